//! HTML serialization of view trees and the mount target.

use std::fmt::Write;

use crate::error::MountError;
use crate::vnode::{Element, VNode};

/// Escape text for HTML body and attribute contexts.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Serialize a view tree to HTML.
///
/// Event bindings are not markup and are left out; a client attaches them
/// when it takes over the mount target.
pub fn render_html(node: &VNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &VNode, out: &mut String) {
    match node {
        VNode::Element(element) => write_element(element, out),
        VNode::Text(value) => out.push_str(&escape_html(value)),
        VNode::Trusted(html) => out.push_str(html.as_str()),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        write!(out, r#" {name}="{}""#, escape_html(value)).unwrap();
    }
    out.push('>');

    if element.is_void() {
        return;
    }

    for child in &element.children {
        write_node(child, out);
    }
    write!(out, "</{}>", element.tag).unwrap();
}

/// The element an application renders into.
///
/// Once mounted, the application owns every child of the target.
pub trait Mount {
    /// `id` of the target element.
    fn target_id(&self) -> &str;

    /// Bring the target in line with `tree`.
    ///
    /// Returns whether anything changed.
    fn patch(&mut self, tree: &VNode) -> Result<bool, MountError>;
}

/// A mount target kept as serialized HTML.
///
/// Patching with a tree identical to the current one is a no-op.
#[derive(Debug)]
pub struct HtmlMount {
    id: String,
    html: String,
    patches: usize,
}

impl HtmlMount {
    /// Create an empty target.
    pub fn new(id: impl Into<String>) -> Result<Self, MountError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(MountError::EmptyTarget);
        }
        Ok(Self {
            id,
            html: String::new(),
            patches: 0,
        })
    }

    /// Current inner HTML of the target.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of patches that changed the target.
    pub fn patches(&self) -> usize {
        self.patches
    }

    /// The target element with its content.
    pub fn outer_html(&self) -> String {
        format!(r#"<div id="{}">{}</div>"#, escape_html(&self.id), self.html)
    }
}

impl Mount for HtmlMount {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn patch(&mut self, tree: &VNode) -> Result<bool, MountError> {
        let html = render_html(tree);
        if html == self.html {
            return Ok(false);
        }
        self.html = html;
        self.patches += 1;
        Ok(true)
    }
}

/// Head metadata for [`document`].
#[derive(Clone, Debug, Default)]
pub struct DocumentHead<'a> {
    /// Page title.
    pub title: &'a str,
    /// Canonical URL, if known.
    pub canonical: Option<&'a str>,
    /// Stylesheet URL.
    pub stylesheet: &'a str,
    /// Client script URL that takes over the mount target.
    pub script: &'a str,
}

/// Wrap a mounted target in a complete HTML document.
pub fn document(head: &DocumentHead<'_>, mount: &HtmlMount) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(out, "<title>{}</title>", escape_html(head.title)).unwrap();
    if let Some(canonical) = head.canonical {
        writeln!(out, r#"<link rel="canonical" href="{}">"#, escape_html(canonical)).unwrap();
    }
    writeln!(out, r#"<link rel="stylesheet" href="{}">"#, escape_html(head.stylesheet)).unwrap();
    out.push_str("</head>\n<body>\n");
    out.push_str(&mount.outer_html());
    writeln!(out, "\n<script type=\"module\" src=\"{}\"></script>", escape_html(head.script)).unwrap();
    out.push_str("</body>\n</html>\n");
    out
}
