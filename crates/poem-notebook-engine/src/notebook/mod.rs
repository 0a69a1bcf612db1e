/*!
 * # Notebook Navigation
 *
 * Page-flip state for a loaded collection, kept as an explicit value that
 * frontends re-render from.
 *
 * ## Model
 *
 * - One page per poem; page 0 starts active and the cover starts closed
 * - Each page remembers whether its translation grid is shown
 * - All changes go through [`Notebook::apply`] with an [`Action`], which
 *   reports whether anything changed so frontends can skip redraws
 *
 * ## Module Structure
 *
 * - **`bindings`**: Declarative (trigger, action) table plus swipe
 *   classification
 */

pub mod bindings;

pub use bindings::{BINDINGS, Swipe, Trigger, action_for};

/// A state change requested by a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NextPage,
    PrevPage,
    /// Shows or hides the translation grid of the current page only.
    ToggleTranslation,
    /// Opens the cover. Idempotent.
    Open,
}

/// How one page should be drawn in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFace {
    pub index: usize,
    /// Turned over to the left of the spine.
    pub flipped: bool,
    pub active: bool,
    /// Stacking order; earlier pages sit on top.
    pub z_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    current: usize,
    translation_visible: Vec<bool>,
    open: bool,
}

impl Notebook {
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 0,
            translation_visible: vec![false; page_count],
            open: false,
        }
    }

    pub fn page_count(&self) -> usize {
        self.translation_visible.len()
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn translation_visible(&self, page: usize) -> bool {
        self.translation_visible.get(page).copied().unwrap_or(false)
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.page_count()
    }

    /// Applies `action`, returning whether the state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::NextPage => self.change_page(1),
            Action::PrevPage => self.change_page(-1),
            Action::ToggleTranslation => match self.translation_visible.get_mut(self.current) {
                Some(visible) => {
                    *visible = !*visible;
                    true
                }
                None => false,
            },
            Action::Open => !std::mem::replace(&mut self.open, true),
        }
    }

    fn change_page(&mut self, delta: isize) -> bool {
        let count = self.page_count();
        if count == 0 {
            return false;
        }
        let next = self
            .current
            .saturating_add_signed(delta)
            .min(count - 1);
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }

    pub fn page_face(&self, index: usize) -> PageFace {
        PageFace {
            index,
            flipped: index < self.current,
            active: index == self.current,
            z_index: self.page_count().saturating_sub(index),
        }
    }

    pub fn faces(&self) -> impl Iterator<Item = PageFace> + '_ {
        (0..self.page_count()).map(|i| self.page_face(i))
    }
}

/// Label of the translation toggle button for the given visibility.
pub fn toggle_label(visible: bool) -> &'static str {
    if visible {
        "Hide translation"
    } else {
        "Show translation"
    }
}

/// Footer text for zero-based page `index`.
pub fn footer_label(index: usize, count: usize) -> String {
    format!("Page {} of {}", index + 1, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn starts_closed_on_first_page() {
        let nb = Notebook::new(3);
        assert_eq!(nb.current_page(), 0);
        assert!(!nb.is_open());
        assert!(!nb.can_go_back());
        assert!(nb.can_go_forward());
        assert!((0..3).all(|p| !nb.translation_visible(p)));
    }

    #[test]
    fn paging_is_clamped() {
        let mut nb = Notebook::new(2);
        assert!(!nb.apply(Action::PrevPage));
        assert!(nb.apply(Action::NextPage));
        assert!(!nb.apply(Action::NextPage));
        assert_eq!(nb.current_page(), 1);
        assert!(!nb.can_go_forward());
    }

    #[rstest]
    #[case(Action::NextPage)]
    #[case(Action::PrevPage)]
    #[case(Action::ToggleTranslation)]
    fn empty_notebook_ignores_navigation(#[case] action: Action) {
        let mut nb = Notebook::new(0);
        assert!(!nb.apply(action));
        assert!(!nb.can_go_forward());
    }

    #[test]
    fn toggle_affects_only_the_current_page() {
        let mut nb = Notebook::new(2);
        assert!(nb.apply(Action::ToggleTranslation));
        nb.apply(Action::NextPage);
        assert!(nb.translation_visible(0));
        assert!(!nb.translation_visible(1));
        nb.apply(Action::ToggleTranslation);
        nb.apply(Action::ToggleTranslation);
        assert!(!nb.translation_visible(1));
    }

    #[test]
    fn open_is_idempotent() {
        let mut nb = Notebook::new(1);
        assert!(nb.apply(Action::Open));
        assert!(!nb.apply(Action::Open));
        assert!(nb.is_open());
    }

    #[test]
    fn faces_flip_pages_before_the_current_one() {
        let mut nb = Notebook::new(3);
        nb.apply(Action::NextPage);
        let faces: Vec<(bool, bool, usize)> =
            nb.faces().map(|f| (f.flipped, f.active, f.z_index)).collect();
        assert_eq!(
            faces,
            vec![(true, false, 3), (false, true, 2), (false, false, 1)]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(toggle_label(false), "Show translation");
        assert_eq!(toggle_label(true), "Hide translation");
        assert_eq!(footer_label(0, 4), "Page 1 of 4");
    }
}
