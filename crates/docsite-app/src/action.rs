//! State transitions.
//!
//! [`update`] is the only way to derive a new [`State`]. It is total: every
//! action applies to every state, and malformed input degrades instead of
//! failing.

use serde::Serialize;

use crate::effect::Effect;
use crate::location::{Location, Query};
use crate::state::{AppOptions, State, Viewport};

/// Payload of [`Action::WindowScroll`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollPayload {
    /// Vertical scroll offset in pixels.
    pub y: f64,
}

/// Everything that can happen to the application.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Recompute the location from a path with optional query.
    ParseUrl(String),
    OpenMenu,
    CloseMenu,
    ToggleMenu,
    /// Record a new scroll offset.
    WindowScroll(ScrollPayload),
    /// Merge parameters into the search state.
    ///
    /// [`Action::ParseUrl`] merges the URL's query the same way.
    SetSearchData(Query),
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ParseUrl(_) => "parse_url",
            Self::OpenMenu => "open_menu",
            Self::CloseMenu => "close_menu",
            Self::ToggleMenu => "toggle_menu",
            Self::WindowScroll(_) => "window_scroll",
            Self::SetSearchData(_) => "set_search_data",
        }
    }
}

/// New state plus the effects to run for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: State,
    pub effects: Vec<Effect>,
}

impl Transition {
    /// Transition without effects.
    fn pure(state: State) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Apply an action to a state.
pub fn update(state: &State, action: Action) -> Transition {
    match action {
        Action::ParseUrl(url) => parse_url(state, &url),
        Action::OpenMenu => with_menu(state, true),
        Action::CloseMenu => with_menu(state, false),
        Action::ToggleMenu => with_menu(state, !state.menu_opened),
        Action::WindowScroll(payload) => window_scroll(state, payload),
        Action::SetSearchData(query) => set_search_data(state, query),
    }
}

/// Initial transition: parse the starting URL, then pick up the current
/// scroll offset and highlight the first page.
pub fn init(options: &AppOptions, url: &str) -> Transition {
    let Transition { state, .. } = parse_url(&State::new(options), url);
    Transition {
        state,
        effects: vec![Effect::ReadScroll, Effect::highlight()],
    }
}

fn parse_url(state: &State, url: &str) -> Transition {
    let location = Location::parse(url);
    let route = location.route();
    let navigated = route != state.route;

    let effects = if navigated {
        vec![Effect::ScrollToTop, Effect::highlight()]
    } else {
        vec![Effect::highlight()]
    };

    Transition {
        state: State {
            menu_opened: state.menu_opened && !navigated,
            search: merged_search(&state.search, location.query.clone()),
            location,
            route,
            ..state.clone()
        },
        effects,
    }
}

fn with_menu(state: &State, opened: bool) -> Transition {
    Transition::pure(State {
        menu_opened: opened,
        ..state.clone()
    })
}

fn window_scroll(state: &State, payload: ScrollPayload) -> Transition {
    // Overscroll bounce reports negative offsets; NaN maps to 0 as well.
    let scroll_y = if payload.y > 0.0 { payload.y } else { 0.0 };
    Transition::pure(State {
        viewport: Viewport {
            scroll_y,
            scrolled: scroll_y > state.header_shadow_threshold,
        },
        ..state.clone()
    })
}

fn set_search_data(state: &State, query: Query) -> Transition {
    Transition::pure(State {
        search: merged_search(&state.search, query),
        ..state.clone()
    })
}

/// Later values win; keys missing from `query` are kept.
fn merged_search(search: &Query, query: Query) -> Query {
    let mut merged = search.clone();
    merged.extend(query);
    merged
}
