//! Markup descriptors.
//!
//! A [`VNode`] tree is plain data: tags, attributes, children, and the
//! actions bound to events. It is built fresh on every render and handed to
//! a [`Mount`](crate::Mount), which decides how to apply it.
//!
//! Text children and attribute values are escaped when serialized. Markup
//! that must go in verbatim has to arrive as [`TrustedHtml`], which can only
//! be built from `'static` strings compiled into the binary.

use crate::action::Action;

/// Pre-rendered markup authored by the project.
///
/// Only `'static` strings are accepted. Strings assembled at runtime go
/// through [`VNode::Text`] and get escaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrustedHtml(&'static str);

impl TrustedHtml {
    /// Wrap markup embedded at build time.
    pub const fn from_static(html: &'static str) -> Self {
        Self(html)
    }

    /// The raw markup.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// DOM events a view can bind actions to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
}

impl EventKind {
    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
        }
    }
}

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node of the view tree.
#[derive(Clone, Debug, PartialEq)]
pub enum VNode {
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Trusted markup, inserted verbatim.
    Trusted(TrustedHtml),
}

/// An element with attributes, event bindings, and children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    /// Attributes in insertion order.
    pub attrs: Vec<(&'static str, String)>,
    pub listeners: Vec<(EventKind, Action)>,
    pub children: Vec<VNode>,
}

/// Start building an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        listeners: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(value: impl Into<String>) -> VNode {
    VNode::Text(value.into())
}

impl Element {
    /// Set an attribute, replacing a previous value of the same name.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: &'static str) -> Self {
        self.attr("id", id)
    }

    /// Set `class` from a class map: names whose flag is set, in order.
    ///
    /// The attribute is omitted entirely when no flag is set.
    #[must_use]
    pub fn class_map(mut self, classes: &[(&str, bool)]) -> Self {
        let names: Vec<&str> = classes
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .collect();
        if names.is_empty() {
            self.attrs.retain(|(n, _)| *n != "class");
            self
        } else {
            self.attr("class", names.join(" "))
        }
    }

    /// Set a static `class`.
    #[must_use]
    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    /// Bind an action to an event.
    #[must_use]
    pub fn on(mut self, event: EventKind, action: Action) -> Self {
        self.listeners.push((event, action));
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, node: impl Into<VNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = VNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    /// Append trusted markup.
    #[must_use]
    pub fn trusted(self, html: TrustedHtml) -> Self {
        self.child(VNode::Trusted(html))
    }

    /// Whether the element has no closing tag.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `class` contains `name`.
    pub fn has_class(&self, name: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == name))
    }

    /// Action bound to `event`, if any.
    pub fn listener(&self, event: EventKind) -> Option<&Action> {
        self.listeners
            .iter()
            .find(|(kind, _)| *kind == event)
            .map(|(_, action)| action)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[VNode], out: &mut String) {
    for node in nodes {
        match node {
            VNode::Element(element) => collect_text(&element.children, out),
            VNode::Text(value) => out.push_str(value),
            VNode::Trusted(_) => {}
        }
    }
}

impl VNode {
    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// First element in depth-first order matching `pred`, including self.
    pub fn find(&self, pred: &impl Fn(&Element) -> bool) -> Option<&Element> {
        let element = self.as_element()?;
        if pred(element) {
            return Some(element);
        }
        element.children.iter().find_map(|child| child.find(pred))
    }

    /// Every element in depth-first order matching `pred`.
    pub fn find_all(&self, pred: &impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(pred, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, pred: &impl Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if let Self::Element(element) = self {
            if pred(element) {
                out.push(element);
            }
            for child in &element.children {
                child.collect_matching(pred, out);
            }
        }
    }

    /// First element with the given `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.get_attr("id") == Some(id))
    }

    /// First element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.has_class(class))
    }
}

impl From<Element> for VNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<TrustedHtml> for VNode {
    fn from(html: TrustedHtml) -> Self {
        Self::Trusted(html)
    }
}
