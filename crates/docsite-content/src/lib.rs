//! Trusted static content for the documentation site.
//!
//! Markdown under `content/` is converted to HTML by the build script and
//! embedded into the binary, so every fragment here is a `&'static str`
//! authored by the project itself. Asset references are the URLs the
//! exported site serves them from.

/// Embed a fragment produced by `build.rs`.
macro_rules! fragment {
    ($name:literal) => {
        include_str!(concat!(env!("OUT_DIR"), "/", $name, ".html"))
    };
}

/// Content of one documentation section: the page body and its sub-menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    /// Rendered page body.
    pub body: &'static str,
    /// Rendered sub-menu (a list of in-page anchors).
    pub menu: &'static str,
}

/// Quickstart section shown on the home page.
pub const HOME: Section = Section {
    body: fragment!("home_page"),
    menu: fragment!("home_menu"),
};

/// API reference section.
pub const REFERENCE: Section = Section {
    body: fragment!("reference_page"),
    menu: fragment!("reference_menu"),
};

/// Tutorial section.
pub const TUTORIAL: Section = Section {
    body: fragment!("tutorial_page"),
    menu: fragment!("tutorial_menu"),
};

/// Code sample tiled behind the not-found message. Plain text, not markup.
pub const NOT_FOUND_CODE: &str = include_str!("../content/not_found/code.txt");

/// Asset URLs.
pub mod assets {
    pub const LOGO_V2: &str = "/assets/hyperapp-logo-v2.svg";
    pub const LOGO_V1: &str = "/assets/hyperapp-logo-v1.svg";
    pub const MENU_ICON: &str = "/assets/menu.svg";
    pub const CLOSE_ICON: &str = "/assets/close.svg";
    pub const FASTER_THAN_REACT: &str = "/assets/faster-than-react.svg";
    pub const SO_SMALL: &str = "/assets/so-small-cant-even.svg";
    pub const TIME_TO_INTERACTIVE: &str = "/assets/time-to-interactive.svg";
    pub const GITHUB: &str = "/assets/github.svg";
    pub const TWITTER: &str = "/assets/twitter.svg";
    pub const SLACK: &str = "/assets/slack.svg";
    pub const STYLESHEET: &str = "/assets/style.css";
    pub const SCRIPT: &str = "/assets/index.js";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_rendered_html() {
        for section in [HOME, REFERENCE, TUTORIAL] {
            assert!(section.body.contains("<h"), "body: {}", section.body);
            assert!(section.menu.starts_with("<ul>"), "menu: {}", section.menu);
        }
    }

    #[test]
    fn test_heading_ids_become_anchors() {
        assert!(HOME.body.contains(r#"<h2 id="quickstart">"#));
        assert!(REFERENCE.body.contains(r#"id="subscriptions""#));
        assert!(TUTORIAL.body.contains(r#"id="together""#));
    }

    #[test]
    fn test_menu_links_target_page_anchors() {
        assert!(HOME.menu.contains(r##"href="#quickstart""##));
        assert!(REFERENCE.menu.contains(r##"href="#effects""##));
        assert!(TUTORIAL.menu.contains(r##"href="#view""##));
    }

    #[test]
    fn test_code_blocks_are_escaped_by_the_build() {
        assert!(HOME.body.contains("&lt;script type="));
    }

    #[test]
    fn test_not_found_code_is_plain_text() {
        assert!(NOT_FOUND_CODE.starts_with("app("));
    }

    #[test]
    fn test_asset_urls_are_absolute() {
        for url in [assets::LOGO_V2, assets::MENU_ICON, assets::STYLESHEET] {
            assert!(url.starts_with("/assets/"));
        }
    }
}
