//! View composition.
//!
//! Every component is a pure function of the [`State`] and the read-only
//! [`Site`]. The root view picks the page with an exhaustive match on the
//! route resolved by the router.

mod footer;
mod header;
mod pages;

pub use footer::footer;
pub use header::header;
pub use pages::{home, not_found, reference, tutorial};

use crate::location::Route;
use crate::site::Site;
use crate::state::State;
use crate::vnode::{VNode, el};

/// Root view: header, the current page, footer.
pub fn view(state: &State, site: &Site) -> VNode {
    el("div")
        .id("top")
        .class_map(&[("app", true), ("noBodyScroll", state.menu_opened)])
        .child(header(state, site))
        .child(el("main").class("main-content").child(page(state, site)))
        .child(footer(site))
        .into()
}

/// Page component for the current route.
pub fn page(state: &State, site: &Site) -> VNode {
    match state.route {
        Route::Home => home(site),
        Route::Reference => reference(site),
        Route::Tutorial => tutorial(site),
        Route::NotFound => not_found(site),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, ScrollPayload, init, update};
    use crate::render::render_html;
    use crate::state::AppOptions;
    use pretty_assertions::assert_eq;

    fn site() -> Site {
        Site::new("Hyperapp", "2.0.4")
    }

    fn state_at(url: &str) -> State {
        init(&AppOptions::default(), url).state
    }

    #[test]
    fn test_page_class_per_route() {
        for (url, class) in [
            ("/", "home-page"),
            ("/reference", "reference-page"),
            ("/tutorial", "tutorial-page"),
            ("/does-not-exist", "four-oh-four-page"),
            ("/reference/extra", "four-oh-four-page"),
        ] {
            let tree = view(&state_at(url), &site());
            let main = tree.find_by_class("main-content").unwrap();
            let page = main.children[0].as_element().unwrap();
            assert!(page.has_class(class), "url {url}: {:?}", page.get_attr("class"));
        }
    }

    #[test]
    fn test_root_classes_follow_menu() {
        let state = state_at("/");
        let closed = view(&state, &site());
        assert_eq!(closed.as_element().unwrap().get_attr("class"), Some("app"));

        let opened = update(&state, Action::OpenMenu).state;
        let tree = view(&opened, &site());
        assert_eq!(tree.as_element().unwrap().get_attr("class"), Some("app noBodyScroll"));
        assert_eq!(tree.as_element().unwrap().get_attr("id"), Some("top"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let site = site();
        for url in ["/", "/reference?x=5", "/tutorial", "/nope"] {
            let state = state_at(url);
            let first = view(&state, &site);
            let second = view(&state, &site);
            assert_eq!(first, second);
            assert_eq!(render_html(&first), render_html(&second));
        }
    }

    #[test]
    fn test_layout_order() {
        let tree = view(&state_at("/"), &site());
        let tags: Vec<_> = tree
            .as_element()
            .unwrap()
            .children
            .iter()
            .filter_map(|c| c.as_element().map(|e| e.tag))
            .collect();
        assert_eq!(tags, ["header", "main", "footer"]);
    }

    #[test]
    fn test_scroll_marks_header() {
        let state = update(
            &state_at("/"),
            Action::WindowScroll(ScrollPayload { y: 400.0 }),
        )
        .state;
        let tree = view(&state, &site());
        assert!(tree.find_by_class("site-header").unwrap().has_class("scrolled"));
    }
}
