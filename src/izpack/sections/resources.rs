//! Installer resources (`<resources>`).

use super::os::OsFamily;
use crate::izpack::{
    error::{Error, Result},
    markup::{Element, WithAttributes},
    section::{Extensions, FieldStore, RenderContext, Section},
};
use std::collections::BTreeMap;

/// Resource id prefix IzPack's target panel reads default install paths from.
pub const INSTALL_DIR_RESOURCE_PREFIX: &str = "TargetPanel.dir.";

/// Resource id (and side-car file name) for an install-directory override.
pub fn install_dir_resource_id(os: &OsFamily) -> String {
    format!("{INSTALL_DIR_RESOURCE_PREFIX}{os}")
}

/// A single `<res>` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    id: String,
    src: String,
    parse: Option<bool>,
    kind: Option<String>,
    encoding: Option<String>,
}

impl Resource {
    /// Resource `id` loaded from `src`.
    pub fn new(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            parse: None,
            kind: None,
            encoding: None,
        }
    }

    /// Substitute variables in the resource at compile time.
    pub fn with_parse(mut self, parse: bool) -> Self {
        self.parse = Some(parse);
        self
    }

    /// Parse type used when `parse` is on.
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Source file encoding.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Resource id.
    pub fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [("id", &self.id), ("src", &self.src)] {
            if value.trim().is_empty() {
                return Err(Error::MissingField {
                    section: "res".into(),
                    field: field.into(),
                });
            }
        }
        Ok(())
    }

    fn render(&self) -> Element {
        Element::new("res")
            .with_attr("id", &self.id)
            .with_attr("src", &self.src)
            .with_attr("parse", self.parse)
            .with_attr("type", self.kind.as_deref())
            .with_attr("encoding", self.encoding.as_deref())
    }
}

/// The `<resources>` section.
///
/// Install-directory overrides are kept as plain paths here; the generator's
/// preparation step turns each into a side-car file before rendering.
#[derive(Clone, Debug)]
pub struct Resources {
    fields: FieldStore,
    extensions: Extensions,
    resources: Vec<Resource>,
    install_dirs: BTreeMap<OsFamily, String>,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            fields: FieldStore::new(Self::KIND),
            extensions: Extensions::new(),
            resources: Vec::new(),
            install_dirs: BTreeMap::new(),
        }
    }
}

impl Resources {
    /// Creates an empty resources section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource after the existing ones.
    pub fn add(&mut self, resource: Resource) -> &mut Self {
        self.resources.push(resource);
        self
    }

    /// Resources in insertion order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Sets the default install path offered on `os`. A blank path removes it.
    pub fn set_install_dir(&mut self, os: OsFamily, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        if path.trim().is_empty() {
            self.install_dirs.remove(&os);
        } else {
            self.install_dirs.insert(os, path);
        }
        self
    }

    /// Install-directory overrides by family.
    pub fn install_dirs(&self) -> &BTreeMap<OsFamily, String> {
        &self.install_dirs
    }
}

impl Section for Resources {
    const KIND: &'static str = "resources";

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
        self.resources.iter().try_for_each(Resource::validate)
    }

    fn render_body(&self, ctx: &RenderContext) -> Result<Element> {
        let mut resources = Element::new(Self::KIND);
        resources.extend(self.resources.iter().map(Resource::render));

        for os in self.install_dirs.keys() {
            let source = ctx
                .install_dir_source(os)
                .ok_or_else(|| Error::UnresolvedInstallDir { os: os.to_string() })?;
            resources.push(
                Element::new("res")
                    .with_attr("id", install_dir_resource_id(os))
                    .with_attr("src", source),
            );
        }

        Ok(resources)
    }
}
