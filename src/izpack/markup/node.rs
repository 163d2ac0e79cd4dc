//! Write-only node tree for descriptor output.

use std::fmt;

/// A node in a rendered descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Element with attributes and children.
    Element(Element),
    /// `<!-- ... -->` comment.
    Comment(String),
    /// Pre-rendered markup emitted verbatim.
    Raw(String),
}

impl Node {
    /// Creates a comment node.
    pub fn comment(text: impl Into<String>) -> Self {
        Node::Comment(text.into())
    }

    /// Creates a raw markup node. The content is never parsed or escaped.
    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the comment text if this node is a comment.
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Node::Comment(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element: name, ordered attributes, optional text and child nodes.
///
/// Attributes keep insertion order so output is stable between runs;
/// re-setting a key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates a leaf element holding `text`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Appends a child and returns self for chaining.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child in place.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Appends every node from `nodes` in order.
    pub fn extend<I, N>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
    }

    /// Sets an attribute unconditionally, replacing any previous value.
    pub(crate) fn put_attribute(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Child nodes in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in order, skipping comments and raw fragments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First child element named `name`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    /// All child elements named `name`.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |element| element.name == name)
    }

    /// True when the element carries neither text nor children.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::writer::element_to_string(self))
    }
}
