//! Application state.
//!
//! A single record replaced wholesale on every transition. View functions
//! read everything they need from it, including the location and the
//! scroll-derived flags, so they never consult the platform directly.

use serde::Serialize;

use crate::location::{Location, Query, Route};

/// Scroll offset past which the sticky header gets its shadow.
pub const DEFAULT_SHADOW_THRESHOLD: f64 = 16.0;

/// Options fixed at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    /// Scroll offset (in pixels) past which [`Viewport::scrolled`] is set.
    pub header_shadow_threshold: f64,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            header_shadow_threshold: DEFAULT_SHADOW_THRESHOLD,
        }
    }
}

/// Scroll-derived UI flags.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Viewport {
    /// Vertical scroll offset in pixels, never negative.
    pub scroll_y: f64,
    /// Whether the page is scrolled past the header-shadow threshold.
    pub scrolled: bool,
}

/// The application state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct State {
    /// Whether the mobile menu is open.
    pub menu_opened: bool,
    /// Current location.
    pub location: Location,
    /// Route resolved from `location`.
    pub route: Route,
    /// Search and filter parameters merged from the URL.
    pub search: Query,
    /// Scroll-derived flags.
    pub viewport: Viewport,
    /// Threshold copied from [`AppOptions`].
    pub header_shadow_threshold: f64,
}

impl State {
    /// State before the first URL has been parsed.
    pub fn new(options: &AppOptions) -> Self {
        let location = Location::root();
        Self {
            menu_opened: false,
            route: location.route(),
            location,
            search: Query::new(),
            viewport: Viewport::default(),
            header_shadow_threshold: options.header_shadow_threshold,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(&AppOptions::default())
    }
}
