//! Core GeneratorSettings struct and implementations.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Directory below the output directory that receives generated files.
pub const GENERATED_DIR: &str = "izpack";

/// File name of the generated descriptor.
pub const DESCRIPTOR_FILE: &str = "install.xml";

/// Settings for a generation run.
///
/// Constructed via [`GeneratorSettingsBuilder`](super::GeneratorSettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_izpack::izpack::GeneratorSettingsBuilder;
///
/// # fn example() -> kodegen_bundler_izpack::izpack::Result<()> {
/// let settings = GeneratorSettingsBuilder::new()
///     .output_dir("target")
///     .base_dir(".")
///     .build()?;
/// assert!(settings.descriptor_path().ends_with("izpack/install.xml"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorSettings {
    /// Root directory for generated output.
    output_dir: PathBuf,

    /// Directory relative file-set patterns are resolved against.
    base_dir: PathBuf,

    /// Fixed generation stamp.
    ///
    /// None means the local time when rendering starts.
    timestamp: Option<NaiveDateTime>,
}

impl GeneratorSettings {
    /// Returns the output root.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the directory receiving the descriptor and side-car files.
    pub fn generated_dir(&self) -> PathBuf {
        self.output_dir.join(GENERATED_DIR)
    }

    /// Returns the full descriptor path.
    pub fn descriptor_path(&self) -> PathBuf {
        self.generated_dir().join(DESCRIPTOR_FILE)
    }

    /// Returns the base directory for relative file-set patterns.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the stamp written into the descriptor.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    /// Creates a new GeneratorSettings instance (used by GeneratorSettingsBuilder).
    pub(super) fn new(
        output_dir: PathBuf,
        base_dir: PathBuf,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            output_dir,
            base_dir,
            timestamp,
        }
    }
}
