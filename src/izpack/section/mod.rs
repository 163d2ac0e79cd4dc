//! Section composition and the render protocol.
//!
//! A section owns a [`FieldStore`] and an [`Extensions`] bag and knows how to
//! build its own element. [`Section::render`] runs the fixed protocol:
//!
//! 1. [`validate`](Section::validate) required fields; any error aborts the
//!    whole document
//! 2. [`render_body`](Section::render_body) in the kind's fixed child order,
//!    with optional attributes applied through the attribute builder
//! 3. append extension fragments as trailing children

mod extension;
mod fields;
mod slot;

pub use extension::Extensions;
pub use fields::FieldStore;
pub use slot::Slot;

use crate::izpack::{
    error::Result,
    markup::{Element, Node},
    sections::OsFamily,
};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Inputs a section may consult while rendering.
///
/// Built by the generator after the preparation step so rendering itself
/// never touches the filesystem beyond file-set matching.
#[derive(Clone, Debug)]
pub struct RenderContext {
    base_dir: PathBuf,
    install_dirs: BTreeMap<OsFamily, PathBuf>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(".")
    }
}

impl RenderContext {
    /// Creates a context resolving relative file-set patterns against `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            install_dirs: BTreeMap::new(),
        }
    }

    /// Supplies side-car locations produced by the preparation step.
    pub fn with_install_dirs(mut self, install_dirs: BTreeMap<OsFamily, PathBuf>) -> Self {
        self.install_dirs = install_dirs;
        self
    }

    /// Base directory for relative patterns.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Prepared side-car path for `os`.
    pub fn install_dir_source(&self, os: &OsFamily) -> Option<&Path> {
        self.install_dirs.get(os).map(PathBuf::as_path)
    }
}

/// A composable, independently renderable part of the descriptor.
pub trait Section {
    /// Kind name, used in placeholders and errors.
    const KIND: &'static str;

    /// Scalar fields.
    fn fields(&self) -> &FieldStore;

    /// Scalar fields, mutably.
    fn fields_mut(&mut self) -> &mut FieldStore;

    /// Attached extension fragments.
    fn extensions(&self) -> &Extensions;

    /// Attached extension fragments, mutably.
    fn extensions_mut(&mut self) -> &mut Extensions;

    /// Required-field checks run before the body is built.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Builds the section element without extensions.
    fn render_body(&self, ctx: &RenderContext) -> Result<Element>;

    /// Attaches an unvalidated fragment rendered after the section's own children.
    fn extend_with(&mut self, fragment: impl Into<Node>) -> &mut Self
    where
        Self: Sized,
    {
        self.extensions_mut().push(fragment);
        self
    }

    /// Validates, renders the body and merges extensions.
    fn render(&self, ctx: &RenderContext) -> Result<Element> {
        self.validate()?;
        let body = self.render_body(ctx)?;
        log::debug!(
            "Rendered {} section ({} extension fragments)",
            Self::KIND,
            self.extensions().len()
        );
        Ok(self.extensions().merge_into(body))
    }
}
