use dioxus::prelude::*;
use poem_notebook_config::Config;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;
use ui::components::LoadErrorScreen;

fn program_name() -> String {
    env::args()
        .next()
        .unwrap_or_else(|| "poem-notebook-dioxus".to_string())
}

/// Path given on the command line, if any. Exits with usage on extra args.
fn cli_path() -> Option<PathBuf> {
    let args: Vec<String> = env::args().collect();
    match args.as_slice() {
        [_] => None,
        [_, path] => Some(PathBuf::from(path)),
        _ => {
            eprintln!("Usage: {} [poems-path]", program_name());
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("poem-notebook starting up");

    let config_path = Config::config_path();
    match Config::resolve(cli_path()) {
        Ok(Some(config)) => {
            log::info!(
                "Using poems path {} ({:?} pairing)",
                config.poems_path.display(),
                config.pairing
            );
        }
        Ok(None) => {
            eprintln!("Error: No poems path provided and no config file found");
            eprintln!("Usage: {} <poems-path>", program_name());
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [poems-path]", program_name());
            process::exit(1);
        }
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Resolved again here since launch takes a plain fn; main already
    // rejected the cases that would fail.
    match Config::resolve(cli_path()) {
        Ok(Some(config)) => rsx! {
            App { poems_path: config.poems_path, pairing: config.pairing }
        },
        Ok(None) => rsx! {
            LoadErrorScreen {
                path: Config::config_path(),
                message: "No poems path configured".to_string(),
            }
        },
        Err(e) => rsx! {
            LoadErrorScreen {
                path: Config::config_path(),
                message: e.to_string(),
            }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Poem Notebook")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
