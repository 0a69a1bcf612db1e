use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use poem_notebook_config::Config;
use poem_notebook_engine::{build_bundle, io::BUNDLE_FILE, load_poems, render_notebook_html};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
};

mod app;
mod ui;

use app::{App, Flow};

fn usage(program: &str) {
    eprintln!("Usage: {program} [poems-path]");
    eprintln!("       {program} html <poems-path>");
    eprintln!("       {program} bundle <manifest-dir>");
}

/// Resolves the config, exiting with usage on failure.
fn resolve_config(program: &str, cli_path: Option<PathBuf>) -> Config {
    match Config::resolve(cli_path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            eprintln!("Error: No poems path provided and no config file found");
            usage(program);
            eprintln!(
                "Or create a config file at {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            usage(program);
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "poem-notebook-cli".to_string());

    match args.get(1..).unwrap_or_default() {
        [cmd, path] if cmd == "html" => {
            let config = resolve_config(&program, Some(PathBuf::from(path)));
            print_html(&config)
        }
        [cmd, dir] if cmd == "bundle" => write_bundle(Path::new(dir)),
        [cmd, ..] if cmd == "html" || cmd == "bundle" => {
            usage(&program);
            process::exit(1);
        }
        [path] => run_reader(resolve_config(&program, Some(PathBuf::from(path)))),
        [] => run_reader(resolve_config(&program, None)),
        _ => {
            usage(&program);
            process::exit(1);
        }
    }
}

fn print_html(config: &Config) -> Result<()> {
    let poems = load_poems(&config.poems_path)
        .with_context(|| format!("loading poems from {}", config.poems_path.display()))?;
    let html = render_notebook_html(&poems, config.pairing);
    stdout().write_all(html.as_bytes())?;
    Ok(())
}

fn write_bundle(dir: &Path) -> Result<()> {
    let bundle = build_bundle(dir)?;
    let out = dir.join(BUNDLE_FILE);
    std::fs::write(&out, bundle.to_pretty_json()?)
        .with_context(|| format!("writing {}", out.display()))?;
    log::info!("Wrote {} poems to {}", bundle.poems.len(), out.display());
    Ok(())
}

fn run_reader(config: Config) -> Result<()> {
    let poems = match load_poems(&config.poems_path) {
        Ok(poems) => poems,
        Err(e) => {
            eprintln!(
                "Error: Poems path '{}' could not be loaded: {e}",
                config.poems_path.display()
            );
            process::exit(1);
        }
    };
    let mut app = App::new(&poems, config.pairing);
    log::info!(
        "Loaded {} poems ({:?} pairing)",
        poems.len(),
        config.pairing
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}
