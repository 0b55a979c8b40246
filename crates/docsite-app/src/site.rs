//! Read-only context shared by every view.

use crate::location::Route;
use crate::vnode::TrustedHtml;

/// Body and sub-menu of one documentation section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionContent {
    pub body: TrustedHtml,
    pub menu: TrustedHtml,
}

impl From<docsite_content::Section> for SectionContent {
    fn from(section: docsite_content::Section) -> Self {
        Self {
            body: TrustedHtml::from_static(section.body),
            menu: TrustedHtml::from_static(section.menu),
        }
    }
}

/// Pre-rendered page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
    pub home: SectionContent,
    pub reference: SectionContent,
    pub tutorial: SectionContent,
    /// Code sample tiled behind the not-found message (plain text).
    pub not_found_code: &'static str,
}

impl Content {
    /// Content compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            home: docsite_content::HOME.into(),
            reference: docsite_content::REFERENCE.into(),
            tutorial: docsite_content::TUTORIAL.into(),
            not_found_code: docsite_content::NOT_FOUND_CODE,
        }
    }

    /// Section shown for `route`; the not-found page has none.
    pub fn section(&self, route: Route) -> Option<&SectionContent> {
        match route {
            Route::Home => Some(&self.home),
            Route::Reference => Some(&self.reference),
            Route::Tutorial => Some(&self.tutorial),
            Route::NotFound => None,
        }
    }
}

/// Site-wide settings and content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    /// Project name shown in the hero.
    pub title: String,
    /// Released version shown next to the title.
    pub version: String,
    pub content: Content,
}

impl Site {
    /// Site with the bundled content.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            content: Content::bundled(),
        }
    }
}
