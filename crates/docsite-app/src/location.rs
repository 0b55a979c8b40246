//! URL parsing and the fixed route table.
//!
//! The router knows four routes. Anything that is not one of the three
//! documentation pages resolves to [`Route::NotFound`], which is an ordinary
//! page rather than an error.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Parsed query parameters, ordered by key so views render deterministically.
pub type Query = BTreeMap<String, String>;

/// Current path and query of the application.
///
/// `path` always starts with `/` and never ends with one, except for the
/// root path itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Normalized path.
    pub path: String,
    /// Decoded query parameters.
    pub query: Query,
}

impl Location {
    /// Location of the site root with no query.
    pub fn root() -> Self {
        Self {
            path: "/".to_owned(),
            query: Query::new(),
        }
    }

    /// Parse a path with an optional query string and fragment.
    ///
    /// Absolute URLs are accepted; the scheme and authority are dropped.
    /// Trailing slashes are stripped from the path, so `/reference/` and
    /// `/reference` are the same location.
    ///
    /// # Examples
    ///
    /// ```
    /// use docsite_app::{Location, Route};
    ///
    /// let location = Location::parse("/reference/?x=5#effects");
    /// assert_eq!(location.path, "/reference");
    /// assert_eq!(location.query["x"], "5");
    /// assert_eq!(location.route(), Route::Reference);
    /// ```
    pub fn parse(url: &str) -> Self {
        let url = strip_origin(url);
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        let (path, query) = url.split_once('?').unwrap_or((url, ""));

        Self {
            path: normalize_path(path),
            query: parse_query(query),
        }
    }

    /// Route this location resolves to.
    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

/// Drop `scheme://authority` from an absolute URL.
///
/// A `://` inside the path, query, or fragment of a relative URL is not an
/// origin.
fn strip_origin(url: &str) -> &str {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url;
    };
    if !is_scheme(scheme) {
        return url;
    }
    match rest.find(['/', '?', '#']) {
        Some(pos) => &rest[pos..],
        None => "",
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_alphabetic())
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Normalize a raw path: ensure a leading slash, strip trailing ones.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// Parse a query string into decoded key/value pairs.
///
/// Never fails. Segments without `=` map to an empty value, segments with an
/// empty key are dropped, and later duplicates win.
///
/// # Examples
///
/// ```
/// use docsite_app::parse_query;
///
/// let query = parse_query("a=1&b=2&flag");
/// assert_eq!(query["a"], "1");
/// assert_eq!(query["b"], "2");
/// assert_eq!(query["flag"], "");
/// assert!(parse_query("").is_empty());
/// ```
pub fn parse_query(raw: &str) -> Query {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    raw.split('&')
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(key);
            (!key.is_empty()).then(|| (key, decode_component(value)))
        })
        .collect()
}

/// Decode a form-encoded component (`+` is a space).
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Pages the site can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Reference,
    Tutorial,
    NotFound,
}

impl Route {
    /// Navigable routes in menu order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Reference, Route::Tutorial];

    /// Resolve a path, normalized the same way as [`Location::parse`].
    pub fn from_path(path: &str) -> Self {
        match normalize_path(path).as_str() {
            "/" => Self::Home,
            "/reference" => Self::Reference,
            "/tutorial" => Self::Tutorial,
            _ => Self::NotFound,
        }
    }

    /// Canonical path, or `None` for the not-found page.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Reference => Some("/reference"),
            Self::Tutorial => Some("/tutorial"),
            Self::NotFound => None,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Quickstart",
            Self::Reference => "Reference",
            Self::Tutorial => "Tutorial",
            Self::NotFound => "Not found",
        }
    }
}
