//! File entries and render-time file-set expansion.

use super::os::OsConstraints;
use crate::izpack::{
    error::{Error, Result},
    markup::{Element, WithAttributes},
    section::RenderContext,
};
use std::path::Path;

/// What happens when an installed file already exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overwrite {
    /// Always overwrite.
    True,
    /// Never overwrite.
    False,
    /// Ask, defaulting to overwrite.
    AskTrue,
    /// Ask, defaulting to keep.
    AskFalse,
    /// Overwrite when the packaged file is newer.
    Update,
}

impl Overwrite {
    /// Descriptor token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::AskTrue => "asktrue",
            Self::AskFalse => "askfalse",
            Self::Update => "update",
        }
    }
}

/// A `<file>` entry of a pack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackFile {
    src: String,
    target_dir: String,
    overwrite: Option<Overwrite>,
    unpack: bool,
    os: OsConstraints,
}

impl PackFile {
    /// Installs `src` (file or directory) into `target_dir`.
    pub fn new(src: impl Into<String>, target_dir: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            target_dir: target_dir.into(),
            overwrite: None,
            unpack: false,
            os: OsConstraints::new(),
        }
    }

    /// Overwrite policy.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Extract archives instead of copying them.
    pub fn with_unpack(mut self, unpack: bool) -> Self {
        self.unpack = unpack;
        self
    }

    /// Restricts the entry to `os`.
    pub fn with_os(mut self, os: OsConstraints) -> Self {
        self.os = os;
        self
    }

    /// Source path.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Renders the `<file>` element.
    pub fn render(&self) -> Result<Element> {
        for (field, value) in [("src", &self.src), ("targetdir", &self.target_dir)] {
            if value.trim().is_empty() {
                return Err(Error::MissingField {
                    section: "file".into(),
                    field: field.into(),
                });
            }
        }

        let mut file = Element::new("file")
            .with_attr("src", &self.src)
            .with_attr("targetdir", &self.target_dir)
            .with_attr("override", self.overwrite.map(Overwrite::as_str))
            .with_attr("unpack", self.unpack);
        self.os.render_into(&mut file);
        Ok(file)
    }
}

/// Glob pattern expanded into one [`PackFile`] per match when rendered.
///
/// Relative patterns are resolved against [`RenderContext::base_dir`].
/// Matches keep the matcher's enumeration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSet {
    pattern: String,
    target_dir: String,
    overwrite: Option<Overwrite>,
    unpack: bool,
    os: OsConstraints,
}

impl FileSet {
    /// Installs every path matching `pattern` into `target_dir`.
    pub fn new(pattern: impl Into<String>, target_dir: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target_dir: target_dir.into(),
            overwrite: None,
            unpack: false,
            os: OsConstraints::new(),
        }
    }

    /// Overwrite policy shared by every match.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Unpack flag shared by every match.
    pub fn with_unpack(mut self, unpack: bool) -> Self {
        self.unpack = unpack;
        self
    }

    /// OS constraints shared by every match.
    pub fn with_os(mut self, os: OsConstraints) -> Self {
        self.os = os;
        self
    }

    /// The glob pattern as given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Matches the pattern now and returns one entry per path.
    pub fn expand(&self, ctx: &RenderContext) -> Result<Vec<PackFile>> {
        let pattern = if Path::new(&self.pattern).is_absolute() {
            self.pattern.clone()
        } else {
            let base = glob::Pattern::escape(&ctx.base_dir().to_string_lossy());
            format!("{}/{}", base.trim_end_matches('/'), self.pattern)
        };

        let paths = glob::glob(&pattern).map_err(|source| Error::Pattern {
            pattern: self.pattern.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| Error::Fs {
                context: "reading file-set match",
                path: e.path().to_path_buf(),
                error: e.into_error(),
            })?;
            files.push(PackFile {
                src: path.display().to_string(),
                target_dir: self.target_dir.clone(),
                overwrite: self.overwrite,
                unpack: self.unpack,
                os: self.os.clone(),
            });
        }

        if files.is_empty() {
            log::warn!("File-set pattern `{}` matched no files", self.pattern);
        } else {
            log::debug!("File-set pattern `{}` matched {} paths", self.pattern, files.len());
        }

        Ok(files)
    }
}
