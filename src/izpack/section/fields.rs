//! Per-section optional scalar fields.

use crate::izpack::{
    error::{Error, Result},
    markup::{Element, Node},
};
use std::collections::BTreeMap;

/// Field values for one section, keyed by the element name they render as.
///
/// Setting a blank value is the same as clearing the field, so `get` never
/// hands out an empty string.
#[derive(Clone, Debug)]
pub struct FieldStore {
    section: &'static str,
    values: BTreeMap<&'static str, String>,
}

impl FieldStore {
    /// Creates an empty store owned by `section`.
    pub fn new(section: &'static str) -> Self {
        Self {
            section,
            values: BTreeMap::new(),
        }
    }

    /// Name of the owning section, used in errors.
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Stores `value`, or clears the field when `value` is blank.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(name);
        } else {
            self.values.insert(name, value);
        }
    }

    /// Removes the field.
    pub fn clear(&mut self, name: &'static str) {
        self.values.remove(name);
    }

    /// Returns the field value, `None` if never set or cleared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the field value or `""`.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// True when the field holds a value.
    pub fn is_present(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the field value or [`Error::MissingField`].
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| Error::MissingField {
            section: self.section.to_string(),
            field: name.to_string(),
        })
    }

    /// Renders the field as `<name>value</name>`, or a `no name` comment
    /// when absent so the position stays visible in the output.
    pub fn optional_node(&self, name: &str) -> Node {
        match self.get(name) {
            Some(value) => Element::with_text(name, value).into(),
            None => Node::comment(format!("no {name}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_read_as_absent() {
        let mut fields = FieldStore::new("info");
        fields.set("appname", "Demo");
        fields.set("appname", " ");
        fields.set("url", "");

        assert_eq!(fields.get("appname"), None);
        assert_eq!(fields.get("url"), None);
        assert_eq!(fields.get_or_empty("appname"), "");
    }

    #[test]
    fn values_can_be_overwritten() {
        let mut fields = FieldStore::new("info");
        fields.set("appversion", "1.0");
        fields.set("appversion", "1.1");
        assert_eq!(fields.get("appversion"), Some("1.1"));
    }

    #[test]
    fn require_names_the_missing_field() {
        let fields = FieldStore::new("info");
        match fields.require("appname") {
            Err(Error::MissingField { section, field }) => {
                assert_eq!(section, "info");
                assert_eq!(field, "appname");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn optional_node_keeps_position() {
        let mut fields = FieldStore::new("info");
        fields.set("url", "https://example.com");

        let present = fields.optional_node("url");
        assert_eq!(
            present.as_element().and_then(Element::text),
            Some("https://example.com")
        );
        assert_eq!(fields.optional_node("webdir").as_comment(), Some("no webdir"));
    }
}
