//! IzPack installation descriptor generator
//!
//! This library builds IzPack `install.xml` descriptors from typed sections:
//! - explicit attachment of singleton sections to an installation
//! - deterministic rendering with placeholders for absent sections
//! - side-car files for per-OS default install directories
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod izpack;
pub mod metadata;

// Re-export commonly used types
pub use error::{AppError, CliError, Result};
