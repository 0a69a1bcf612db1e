use std::time::Duration;

use super::Action;

/// Minimum horizontal travel of a page-turning swipe, in pixels.
pub const SWIPE_THRESHOLD_PX: f64 = 45.0;

/// Swipes lasting this long or longer are treated as scrolling.
pub const SWIPE_MAX_DURATION: Duration = Duration::from_millis(600);

/// An input event a frontend can translate into an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    ArrowLeft,
    ArrowRight,
    PrevButton,
    NextButton,
    ToggleButton,
    CoverClick,
    /// Finger moved right to left.
    SwipeLeft,
    /// Finger moved left to right.
    SwipeRight,
}

/// Every trigger and the action it performs.
pub const BINDINGS: &[(Trigger, Action)] = &[
    (Trigger::ArrowRight, Action::NextPage),
    (Trigger::ArrowLeft, Action::PrevPage),
    (Trigger::NextButton, Action::NextPage),
    (Trigger::PrevButton, Action::PrevPage),
    (Trigger::ToggleButton, Action::ToggleTranslation),
    (Trigger::CoverClick, Action::Open),
    (Trigger::SwipeLeft, Action::NextPage),
    (Trigger::SwipeRight, Action::PrevPage),
];

pub fn action_for(trigger: Trigger) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|(t, _)| *t == trigger)
        .map(|(_, a)| *a)
}

/// A completed single-touch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub dx: f64,
    pub dy: f64,
    pub duration: Duration,
}

impl Swipe {
    /// Classifies the gesture as a page-turning swipe, if it is one.
    ///
    /// Requires mostly horizontal travel beyond [`SWIPE_THRESHOLD_PX`] within
    /// [`SWIPE_MAX_DURATION`].
    pub fn trigger(&self) -> Option<Trigger> {
        let horizontal = self.dx.abs() > self.dy.abs()
            && self.dx.abs() > SWIPE_THRESHOLD_PX
            && self.duration < SWIPE_MAX_DURATION;
        if !horizontal {
            return None;
        }
        Some(if self.dx < 0.0 {
            Trigger::SwipeLeft
        } else {
            Trigger::SwipeRight
        })
    }
}
