//! Page components, one per route.

use docsite_content::assets;

use crate::site::{SectionContent, Site};
use crate::vnode::{Element, VNode, el};

/// Tagline under the hero title.
const TAGLINE: &str = "The tiny framework for building web interfaces";

/// Message shown for unknown paths.
pub const NOT_FOUND_MESSAGE: &str = "this page doesn't exist, please check your URL and try again";

/// Times the code sample is tiled behind the not-found message.
const NOT_FOUND_CODE_REPEAT: usize = 4;

/// A tile of the features grid.
struct Feature {
    image: &'static str,
    alt: &'static str,
    style: &'static str,
    figure: &'static str,
    caption: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        image: assets::FASTER_THAN_REACT,
        alt: "faster than react",
        style: "width: 8rem",
        figure: "2x",
        caption: "faster than react",
    },
    Feature {
        image: assets::SO_SMALL,
        alt: "it's so small, I can't even",
        style: "margin-top: 1rem",
        figure: "1.8kB",
        caption: "smaller than a favicon",
    },
    Feature {
        image: assets::TIME_TO_INTERACTIVE,
        alt: "time to interactive",
        style: "width: 4rem",
        figure: "10ms",
        caption: "time to interactive",
    },
];

/// Community links in the hero: (href, icon, label).
const SOCIAL: [(&str, &str, &str); 3] = [
    ("https://github.com/jorgebucaran/hyperapp", assets::GITHUB, "GitHub"),
    ("https://twitter.com/hyperappjs", assets::TWITTER, "Twitter"),
    ("https://hyperappjs.herokuapp.com", assets::SLACK, "Slack"),
];

/// Landing page: hero, features grid, quickstart content.
pub fn home(site: &Site) -> VNode {
    el("div")
        .class("home-page")
        .child(hero(site))
        .child(el("hr"))
        .child(
            el("div")
                .class("features-grid")
                .children(FEATURES.iter().map(feature)),
        )
        .child(el("hr"))
        .child(content(&site.content.home))
        .into()
}

fn hero(site: &Site) -> Element {
    el("div")
        .class("hero")
        .child(
            el("h1").text(site.title.clone()).child(
                el("sup").child(el("a").attr("href", "#").child(el("code").text(site.version.clone()))),
            ),
        )
        .child(el("h2").text(TAGLINE))
        .child(el("div").class("social").children(SOCIAL.iter().map(|&(href, icon, label)| {
            VNode::from(
                el("a")
                    .attr("href", href)
                    .attr("aria-label", label)
                    .child(el("img").attr("src", icon).attr("alt", label)),
            )
        })))
}

fn feature(feature: &Feature) -> VNode {
    el("div")
        .class("feature")
        .child(
            el("img")
                .attr("style", feature.style)
                .attr("src", feature.image)
                .attr("alt", feature.alt),
        )
        .child(el("h2").text(feature.figure))
        .child(el("p").text(feature.caption))
        .into()
}

/// API reference page.
pub fn reference(site: &Site) -> VNode {
    el("div")
        .class("reference-page")
        .child(content(&site.content.reference))
        .into()
}

/// Tutorial page.
pub fn tutorial(site: &Site) -> VNode {
    el("div")
        .class("tutorial-page")
        .child(content(&site.content.tutorial))
        .into()
}

/// Page for any path outside the route table.
pub fn not_found(site: &Site) -> VNode {
    el("div")
        .class("four-oh-four-page")
        .child(el("h1").text(NOT_FOUND_MESSAGE))
        .child(el("a").class("back-link").attr("href", "/").text("go back"))
        .child(
            el("div")
                .class("code-background")
                .text(site.content.not_found_code.repeat(NOT_FOUND_CODE_REPEAT)),
        )
        .into()
}

fn content(section: &SectionContent) -> Element {
    el("div").class("content").trusted(section.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_html;
    use pretty_assertions::assert_eq;

    fn site() -> Site {
        Site::new("Hyperapp", "2.0.4")
    }

    #[test]
    fn test_home_hero() {
        let tree = home(&site());
        let hero = tree.find_by_class("hero").unwrap();
        assert_eq!(
            hero.text_content(),
            format!("Hyperapp2.0.4{TAGLINE}")
        );
        assert_eq!(tree.find_by_class("social").unwrap().children.len(), 3);
    }

    #[test]
    fn test_home_features() {
        let tree = home(&site());
        let grid = tree.find_by_class("features-grid").unwrap();
        let figures: Vec<_> = grid
            .children
            .iter()
            .map(|f| f.as_element().unwrap().children[1].as_element().unwrap().text_content())
            .collect();
        assert_eq!(figures, ["2x", "1.8kB", "10ms"]);
    }

    #[test]
    fn test_home_embeds_quickstart() {
        let site = site();
        let html = render_html(&home(&site));
        assert!(html.contains(site.content.home.body.as_str()));
    }

    #[test]
    fn test_reference_and_tutorial_embed_content() {
        let site = site();
        assert!(render_html(&reference(&site)).contains(site.content.reference.body.as_str()));
        assert!(render_html(&tutorial(&site)).contains(site.content.tutorial.body.as_str()));
    }

    #[test]
    fn test_not_found_page() {
        let site = site();
        let tree = not_found(&site);
        let back = tree.find_by_class("back-link").unwrap();
        assert_eq!(back.get_attr("href"), Some("/"));
        let h1 = tree.find(&|e: &Element| e.tag == "h1").unwrap();
        assert_eq!(h1.text_content(), NOT_FOUND_MESSAGE);

        let code = tree.find_by_class("code-background").unwrap().text_content();
        assert_eq!(code, site.content.not_found_code.repeat(4));
    }

    #[test]
    fn test_not_found_code_is_escaped() {
        let html = render_html(&not_found(&site()));
        assert!(!html.contains("<h1>404</h1>"));
        assert!(html.contains("h(&quot;h1&quot;"));
    }

    #[test]
    fn test_title_is_escaped() {
        let site = Site::new("<Hyperapp>", "2.0.4");
        let html = render_html(&home(&site));
        assert!(html.contains("&lt;Hyperapp&gt;"));
    }
}
