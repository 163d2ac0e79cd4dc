//! Caller-supplied fragments merged into a section's output.

use crate::izpack::markup::{Element, Node};

/// Opaque fragments appended as trailing children of a rendered section.
///
/// Fragments are never validated or reordered.
#[derive(Clone, Debug, Default)]
pub struct Extensions {
    fragments: Vec<Node>,
}

impl Extensions {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fragment after the ones already attached.
    pub fn push(&mut self, fragment: impl Into<Node>) {
        self.fragments.push(fragment.into());
    }

    /// Number of attached fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True when nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Attached fragments in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.fragments.iter()
    }

    /// Appends every fragment to `element`. With no fragments, `element` is
    /// returned exactly as given.
    pub fn merge_into(&self, mut element: Element) -> Element {
        element.extend(self.fragments.iter().cloned());
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bag_is_identity() {
        let element = Element::new("variables").child(Element::new("variable"));
        assert_eq!(Extensions::new().merge_into(element.clone()), element);
    }

    #[test]
    fn fragments_trail_in_attachment_order() {
        let mut extensions = Extensions::new();
        extensions.push(Node::raw("<first/>"));
        extensions.push(Element::new("second"));

        let merged = extensions.merge_into(Element::new("panels").child(Element::new("panel")));
        let children = merged.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[1], Node::raw("<first/>"));
        assert_eq!(children[2].as_element().map(Element::name), Some("second"));
    }
}
