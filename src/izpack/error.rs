//! Error types for descriptor construction and rendering.
//!
//! Construction-time failures (a second singleton section) and render-time
//! failures (missing required fields, unresolved pack dependencies) share one
//! error type so a build step can propagate either with `?`.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for descriptor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or rendering an installer descriptor.
#[derive(Error, Debug)]
pub enum Error {
    /// A singleton section kind was attached while one is already present.
    #[error("a `{kind}` section is already attached to this installation")]
    DuplicateSection {
        /// Section kind name
        kind: &'static str,
    },

    /// A field required for rendering has no value.
    #[error("missing required field `{field}` in `{section}`")]
    MissingField {
        /// Section (or entity) owning the field
        section: String,
        /// Field name
        field: String,
    },

    /// A pack depends on a pack name that is not part of the same packs section.
    #[error("pack `{pack}` depends on unknown pack `{dependency}`")]
    DanglingDependency {
        /// Pack declaring the dependency
        pack: String,
        /// Unresolved dependency name
        dependency: String,
    },

    /// Two packs share the same identity.
    #[error("pack `{name}` is declared more than once")]
    DuplicatePack {
        /// Duplicated pack name
        name: String,
    },

    /// Pack dependencies form a cycle.
    #[error("pack dependency cycle involving `{pack}`")]
    DependencyCycle {
        /// A pack on the cycle
        pack: String,
    },

    /// Operating system family token is blank or malformed.
    #[error("invalid operating system family token: {0:?}")]
    InvalidOsFamily(String),

    /// An install-directory override was rendered without being prepared first.
    #[error("install directory for `{os}` was not prepared before rendering")]
    UnresolvedInstallDir {
        /// OS family token
        os: String,
    },

    /// An install-directory path would not fit on a single side-car line.
    #[error("install directory for `{os}` contains a line break")]
    MultiLineInstallDir {
        /// OS family token
        os: String,
    },

    /// Two install-directory keys normalize to the same OS family.
    #[error("install directory for `{os}` is configured more than once")]
    DuplicateInstallDir {
        /// Normalized OS family token
        os: String,
    },

    /// File-set pattern could not be compiled.
    #[error("invalid file-set pattern `{pattern}`: {source}")]
    Pattern {
        /// Offending pattern
        pattern: String,
        /// Underlying pattern error
        #[source]
        source: glob::PatternError,
    },

    /// Filesystem operation failed on a known path.
    #[error("failed {context} `{}`: {error}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        error: io::Error,
    },

    /// IO errors without path context.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

/// Attach a message to a missing value or a foreign error.
pub trait Context<T> {
    /// Converts `None` or an error into [`Error::GenericError`] carrying `msg`.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Filesystem context for IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error in [`Error::Fs`] with the operation and path.
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for io::Result<T> {
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.to_path_buf(),
            error,
        })
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::izpack::Error::GenericError(format!($($arg)*)))
    };
}
