//! Conditional attribute building.
//!
//! Every entity renders its optional attributes through [`WithAttributes::with_attr`]:
//! a value that is absent or blank leaves the node untouched, so the output
//! never carries `id=""` style attributes.

use super::Element;
use std::path::{Path, PathBuf};

/// Token for `true` in descriptor attributes and fields.
pub const YES: &str = "yes";

/// Token for `false` in descriptor attributes and fields.
pub const NO: &str = "no";

/// Maps a boolean to its descriptor token.
pub fn yes_no(value: bool) -> &'static str {
    if value { YES } else { NO }
}

/// A value that may or may not produce an attribute.
pub trait AttrValue {
    /// Returns the attribute text, or `None` when the attribute must be omitted.
    fn into_attr_value(self) -> Option<String>;
}

impl AttrValue for &str {
    fn into_attr_value(self) -> Option<String> {
        if self.trim().is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl AttrValue for String {
    fn into_attr_value(self) -> Option<String> {
        if self.trim().is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl AttrValue for &String {
    fn into_attr_value(self) -> Option<String> {
        self.as_str().into_attr_value()
    }
}

impl AttrValue for &Path {
    fn into_attr_value(self) -> Option<String> {
        self.display().to_string().into_attr_value()
    }
}

impl AttrValue for &PathBuf {
    fn into_attr_value(self) -> Option<String> {
        self.as_path().into_attr_value()
    }
}

impl AttrValue for bool {
    fn into_attr_value(self) -> Option<String> {
        Some(yes_no(self).to_string())
    }
}

impl<T: AttrValue> AttrValue for Option<T> {
    fn into_attr_value(self) -> Option<String> {
        self.and_then(AttrValue::into_attr_value)
    }
}

macro_rules! impl_attr_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl AttrValue for $ty {
                fn into_attr_value(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_attr_value_for_int!(u8, u16, u32, u64, usize, i32, i64);

/// Nodes that accept conditional attributes.
pub trait WithAttributes: Sized {
    /// Stores an attribute, replacing an existing value of the same name.
    fn set_attribute(&mut self, name: &str, value: String);

    /// Adds `name` only when `value` yields something; children are untouched.
    fn with_attr(mut self, name: &str, value: impl AttrValue) -> Self {
        self.add_attr(name, value);
        self
    }

    /// In-place form of [`with_attr`](Self::with_attr).
    fn add_attr(&mut self, name: &str, value: impl AttrValue) {
        if let Some(value) = value.into_attr_value() {
            self.set_attribute(name, value);
        }
    }
}

impl WithAttributes for Element {
    fn set_attribute(&mut self, name: &str, value: String) {
        self.put_attribute(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_absent_values_are_omitted() {
        let none: Option<&str> = None;
        let element = Element::new("panel")
            .with_attr("id", "")
            .with_attr("jar", "   ")
            .with_attr("condition", none)
            .with_attr("classname", "HelloPanel");

        assert_eq!(element.attribute("id"), None);
        assert_eq!(element.attribute("jar"), None);
        assert_eq!(element.attribute("condition"), None);
        assert_eq!(element.attribute("classname"), Some("HelloPanel"));
        assert_eq!(element.attributes().count(), 1);
    }

    #[test]
    fn booleans_render_as_tokens() {
        let element = Element::new("pack")
            .with_attr("required", true)
            .with_attr("hidden", false);

        assert_eq!(element.attribute("required"), Some("yes"));
        assert_eq!(element.attribute("hidden"), Some("no"));
    }

    #[test]
    fn attributes_leave_children_alone() {
        let element = Element::new("pack")
            .child(Element::with_text("description", "Core files"))
            .with_attr("name", "Core");

        assert_eq!(element.children().len(), 1);
        assert_eq!(
            element.find("description").and_then(Element::text),
            Some("Core files")
        );
    }

    #[test]
    fn later_value_replaces_earlier() {
        let element = Element::new("res")
            .with_attr("src", "a.txt")
            .with_attr("src", "b.txt");

        assert_eq!(element.attribute("src"), Some("b.txt"));
        assert_eq!(element.attributes().count(), 1);
    }
}
