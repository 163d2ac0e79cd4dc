//! Installer window preferences (`<guiprefs>`).

use super::os::OsConstraints;
use crate::izpack::{
    error::{Error, Result},
    markup::{Element, WithAttributes},
    section::{Extensions, FieldStore, RenderContext, Section},
};

/// Default installer window width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;

/// Default installer window height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// A look-and-feel choice, optionally restricted to some OS families.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookAndFeel {
    name: String,
    os: OsConstraints,
    params: Vec<(String, String)>,
}

impl LookAndFeel {
    /// Look-and-feel named `name` (`looks`, `substance`, `kunststoff`, ...).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            os: OsConstraints::new(),
            params: Vec::new(),
        }
    }

    /// Restricts the look-and-feel to `os`.
    pub fn with_os(mut self, os: OsConstraints) -> Self {
        self.os = os;
        self
    }

    /// Adds a `<param>` entry.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    fn render(&self) -> Result<Element> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField {
                section: "laf".into(),
                field: "name".into(),
            });
        }
        let mut laf = Element::new("laf").with_attr("name", &self.name);
        self.os.render_into(&mut laf);
        laf.extend(self.params.iter().map(|(name, value)| {
            Element::new("param")
                .with_attr("name", name)
                .with_attr("value", value)
        }));
        Ok(laf)
    }
}

/// The `<guiprefs>` section.
#[derive(Clone, Debug)]
pub struct GuiPrefs {
    fields: FieldStore,
    extensions: Extensions,
    width: u32,
    height: u32,
    resizable: bool,
    modifiers: Vec<(String, String)>,
    look_and_feels: Vec<LookAndFeel>,
}

impl Default for GuiPrefs {
    fn default() -> Self {
        Self {
            fields: FieldStore::new(Self::KIND),
            extensions: Extensions::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            resizable: false,
            modifiers: Vec::new(),
            look_and_feels: Vec::new(),
        }
    }
}

impl GuiPrefs {
    /// Preferences with the default 800x600 fixed-size window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Window size in pixels.
    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Whether the window can be resized.
    pub fn set_resizable(&mut self, resizable: bool) -> &mut Self {
        self.resizable = resizable;
        self
    }

    /// Adds a `<modifier key value/>` entry.
    pub fn add_modifier(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.modifiers.push((key.into(), value.into()));
        self
    }

    /// Adds a look-and-feel after the existing ones.
    pub fn add_look_and_feel(&mut self, laf: LookAndFeel) -> &mut Self {
        self.look_and_feels.push(laf);
        self
    }

    /// Window size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Section for GuiPrefs {
    const KIND: &'static str = "guiprefs";

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

    fn render_body(&self, _ctx: &RenderContext) -> Result<Element> {
        let mut prefs = Element::new(Self::KIND)
            .with_attr("width", self.width)
            .with_attr("height", self.height)
            .with_attr("resizable", self.resizable);

        prefs.extend(self.modifiers.iter().map(|(key, value)| {
            Element::new("modifier")
                .with_attr("key", key)
                .with_attr("value", value)
        }));
        for laf in &self.look_and_feels {
            prefs.push(laf.render()?);
        }

        Ok(prefs)
    }
}
