//! Installer variables (`<variables>`).

use crate::izpack::{
    error::{Error, Result},
    markup::{Element, WithAttributes},
    section::{Extensions, FieldStore, RenderContext, Section},
};

/// The `<variables>` section: name/value pairs in insertion order.
#[derive(Clone, Debug)]
pub struct Variables {
    fields: FieldStore,
    extensions: Extensions,
    entries: Vec<(String, String)>,
}

impl Default for Variables {
    fn default() -> Self {
        Self {
            fields: FieldStore::new(Self::KIND),
            extensions: Extensions::new(),
            entries: Vec::new(),
        }
    }
}

impl Variables {
    /// Creates an empty variables section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`; an existing variable keeps its position and takes the new value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no variable is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for Variables {
    const KIND: &'static str = "variables";

    fn fields(&self) -> &FieldStore {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut FieldStore {
        &mut self.fields
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn validate(&self) -> Result<()> {
        match self.entries.iter().find(|(name, _)| name.trim().is_empty()) {
            Some(_) => Err(Error::MissingField {
                section: "variable".into(),
                field: "name".into(),
            }),
            None => Ok(()),
        }
    }

    fn render_body(&self, _ctx: &RenderContext) -> Result<Element> {
        let mut variables = Element::new(Self::KIND);
        variables.extend(self.entries.iter().map(|(name, value)| {
            Element::new("variable")
                .with_attr("name", name)
                .with_attr("value", value)
        }));
        Ok(variables)
    }
}
