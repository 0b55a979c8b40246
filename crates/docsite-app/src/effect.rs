//! Side-effect descriptors.
//!
//! Transitions never touch the platform. They return [`Effect`] values that
//! the host hands to its [`Platform`](crate::Platform); whatever the platform
//! reports back re-enters the loop as an ordinary [`Action`].

use serde::Serialize;

use crate::action::{Action, ScrollPayload};

/// Elements the syntax highlighter is run over.
pub const HIGHLIGHT_SELECTOR: &str = "pre code";

/// An imperative operation to run outside the pure core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Run the syntax highlighter over every element matching `selector`.
    Highlight { selector: &'static str },
    /// Scroll the window back to the top.
    ScrollToTop,
    /// Read the current scroll offset.
    ReadScroll,
}

/// What the platform observed while running an effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectResult {
    /// Finished with nothing to report.
    Done,
    /// The window is now at this vertical offset.
    Scrolled { y: f64 },
}

impl Effect {
    /// Highlight every code block on the page.
    pub fn highlight() -> Self {
        Self::Highlight {
            selector: HIGHLIGHT_SELECTOR,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Highlight { .. } => "highlight",
            Self::ScrollToTop => "scroll_to_top",
            Self::ReadScroll => "read_scroll",
        }
    }

    /// Action to dispatch with the platform's result, if any.
    pub fn follow_up(&self, result: EffectResult) -> Option<Action> {
        match (self, result) {
            (Self::ScrollToTop | Self::ReadScroll, EffectResult::Scrolled { y }) => {
                Some(Action::WindowScroll(ScrollPayload { y }))
            }
            _ => None,
        }
    }
}
