//! Site header with the hamburger menu.

use docsite_content::assets;

use crate::action::Action;
use crate::location::Route;
use crate::site::Site;
use crate::state::State;
use crate::vnode::{Element, EventKind, VNode, el};

/// Header: logo, menu toggler, and navigation.
///
/// A link is active when its route is the current one, and only the current
/// route's sub-menu is rendered.
pub fn header(state: &State, site: &Site) -> VNode {
    let opened = state.menu_opened;

    el("header")
        .class_map(&[
            ("site-header", true),
            ("opened", opened),
            ("scrolled", state.viewport.scrolled),
        ])
        .child(
            smart_link(state.route, Route::Home, Some("logo"))
                .child(img(assets::LOGO_V2, "hyperapp v2").class("v2"))
                .child(img(assets::LOGO_V1, "hyperapp v1").class("v1")),
        )
        .child(menu_toggler(opened))
        .child(
            el("nav")
                .id("menu")
                .class_map(&[("menu", true), ("opened", opened)])
                .child(
                    el("div").class("main-links").children(
                        Route::ALL
                            .iter()
                            .map(|&to| VNode::from(smart_link(state.route, to, None).text(to.label()))),
                    ),
                )
                .children(routed_menu(state.route, site)),
        )
        .into()
}

/// Link to a route, marked active when it is the current one.
fn smart_link(current: Route, to: Route, class: Option<&str>) -> Element {
    let mut classes = Vec::with_capacity(2);
    if let Some(class) = class {
        classes.push((class, true));
    }
    classes.push(("active", current == to));

    el("a")
        .class_map(&classes)
        .attr("href", to.path().unwrap_or("/"))
}

fn menu_toggler(opened: bool) -> Element {
    let (action, icon) = if opened {
        (Action::CloseMenu, img(assets::CLOSE_ICON, "Close menu"))
    } else {
        (Action::OpenMenu, img(assets::MENU_ICON, "Open menu"))
    };

    el("button")
        .class("menu-toggler")
        .attr("aria-expanded", opened.to_string())
        .attr("aria-controls", "menu")
        .on(EventKind::Click, action)
        .text("Menu")
        .child(icon)
}

/// Sub-menu of the current route, if it has one.
fn routed_menu(current: Route, site: &Site) -> Option<VNode> {
    let section = site.content.section(current)?;
    Some(el("div").class("sub-links").trusted(section.menu).into())
}

fn img(src: &'static str, alt: &'static str) -> Element {
    el("img").attr("src", src).attr("alt", alt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{init, update};
    use crate::state::AppOptions;
    use pretty_assertions::assert_eq;

    fn site() -> Site {
        Site::new("Hyperapp", "2.0.4")
    }

    fn render_header(url: &str) -> VNode {
        let state = init(&AppOptions::default(), url).state;
        header(&state, &site())
    }

    fn active_links(tree: &VNode) -> Vec<String> {
        let links = tree.find_by_class("main-links").unwrap();
        links
            .children
            .iter()
            .filter_map(VNode::as_element)
            .filter(|a| a.has_class("active"))
            .map(Element::text_content)
            .collect()
    }

    #[test]
    fn test_reference_link_active_at_reference() {
        let tree = render_header("/reference?x=5");
        assert_eq!(active_links(&tree), ["Reference"]);
    }

    #[test]
    fn test_each_route_activates_its_link() {
        for route in Route::ALL {
            let tree = render_header(route.path().unwrap());
            assert_eq!(active_links(&tree), [route.label()]);
        }
    }

    #[test]
    fn test_no_link_active_on_not_found() {
        let tree = render_header("/missing");
        assert!(active_links(&tree).is_empty());
        assert!(tree.find_by_class("sub-links").is_none());
    }

    #[test]
    fn test_only_current_sub_menu_rendered() {
        let site = site();
        let tree = render_header("/tutorial");
        let menus = tree.find_all(&|e: &Element| e.has_class("sub-links"));
        assert_eq!(menus.len(), 1);
        assert_eq!(
            menus[0].children,
            vec![VNode::Trusted(site.content.tutorial.menu)]
        );
    }

    #[test]
    fn test_logo_keeps_its_class() {
        let home = render_header("/");
        let logo = home.find_by_class("logo").unwrap();
        assert_eq!(logo.get_attr("class"), Some("logo active"));
        assert_eq!(logo.get_attr("href"), Some("/"));

        let reference = render_header("/reference");
        let logo = reference.find_by_class("logo").unwrap();
        assert_eq!(logo.get_attr("class"), Some("logo"));
    }

    #[test]
    fn test_closed_menu_toggler() {
        let tree = render_header("/");
        let button = tree.find_by_class("menu-toggler").unwrap();
        assert_eq!(button.get_attr("aria-expanded"), Some("false"));
        assert_eq!(button.get_attr("aria-controls"), Some("menu"));
        assert_eq!(button.listener(EventKind::Click), Some(&Action::OpenMenu));
        let icon = button.children[1].as_element().unwrap();
        assert_eq!(icon.get_attr("alt"), Some("Open menu"));
        assert!(!tree.as_element().unwrap().has_class("opened"));
    }

    #[test]
    fn test_opened_menu_toggler() {
        let state = update(&init(&AppOptions::default(), "/").state, Action::OpenMenu).state;
        let tree = header(&state, &site());
        let button = tree.find_by_class("menu-toggler").unwrap();
        assert_eq!(button.get_attr("aria-expanded"), Some("true"));
        assert_eq!(button.listener(EventKind::Click), Some(&Action::CloseMenu));
        let icon = button.children[1].as_element().unwrap();
        assert_eq!(icon.get_attr("alt"), Some("Close menu"));

        assert!(tree.as_element().unwrap().has_class("opened"));
        assert!(tree.find_by_id("menu").unwrap().has_class("opened"));
    }
}
