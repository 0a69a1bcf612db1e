use crossterm::event::KeyCode;
use poem_notebook_engine::{
    Notebook, Pairing, Poem, PoemView, Trigger, notebook::action_for, render_poem,
};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub views: Vec<PoemView>,
    pub notebook: Notebook,
    /// Vertical scroll of the current page body.
    pub scroll: u16,
}

/// Maps a key to the notebook trigger it stands for.
pub fn trigger_for_key(code: KeyCode) -> Option<Trigger> {
    match code {
        KeyCode::Right | KeyCode::Char('l') => Some(Trigger::ArrowRight),
        KeyCode::Left | KeyCode::Char('h') => Some(Trigger::ArrowLeft),
        KeyCode::Char('t') => Some(Trigger::ToggleButton),
        KeyCode::Char('o') | KeyCode::Enter => Some(Trigger::CoverClick),
        _ => None,
    }
}

impl App {
    pub fn new(poems: &[Poem], pairing: Pairing) -> Self {
        Self {
            views: poems.iter().map(|p| render_poem(p, pairing)).collect(),
            notebook: Notebook::new(poems.len()),
            scroll: 0,
        }
    }

    pub fn current_view(&self) -> Option<&PoemView> {
        self.views.get(self.notebook.current_page())
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Down | KeyCode::Char('j') if self.notebook.is_open() => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') if self.notebook.is_open() => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            _ => {
                let Some(trigger) = trigger_for_key(code) else {
                    return Flow::Continue;
                };
                // Pages stay behind the cover until it is opened.
                if !self.notebook.is_open() && trigger != Trigger::CoverClick {
                    return Flow::Continue;
                }
                let page = self.notebook.current_page();
                if let Some(action) = action_for(trigger)
                    && self.notebook.apply(action)
                    && self.notebook.current_page() != page
                {
                    self.scroll = 0;
                }
            }
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn app(pages: usize) -> App {
        let poems: Vec<Poem> = (0..pages)
            .map(|i| Poem::new(&format!("Poem {i}"), "a\n\nb", "x\n\ny"))
            .collect();
        App::new(&poems, Pairing::Stanza)
    }

    #[rstest]
    #[case(KeyCode::Right, Some(Trigger::ArrowRight))]
    #[case(KeyCode::Char('l'), Some(Trigger::ArrowRight))]
    #[case(KeyCode::Char('h'), Some(Trigger::ArrowLeft))]
    #[case(KeyCode::Char('t'), Some(Trigger::ToggleButton))]
    #[case(KeyCode::Enter, Some(Trigger::CoverClick))]
    #[case(KeyCode::Char('x'), None)]
    fn key_bindings(#[case] code: KeyCode, #[case] expected: Option<Trigger>) {
        assert_eq!(trigger_for_key(code), expected);
    }

    #[test]
    fn navigation_waits_for_the_cover() {
        let mut app = app(3);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.notebook.current_page(), 0);

        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Right);
        assert_eq!(app.notebook.current_page(), 1);
        assert_eq!(app.current_view().unwrap().title, "Poem 1");
    }

    #[test]
    fn page_change_resets_scroll() {
        let mut app = app(2);
        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.scroll, 2);

        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.scroll, 2);
        app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app(1);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Char('z')), Flow::Continue);
    }
}
