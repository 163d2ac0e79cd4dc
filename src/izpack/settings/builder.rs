//! Builder for constructing GeneratorSettings.

use super::GeneratorSettings;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Builder for constructing [`GeneratorSettings`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_izpack::izpack::GeneratorSettingsBuilder;
///
/// # fn example() -> kodegen_bundler_izpack::izpack::Result<()> {
/// let settings = GeneratorSettingsBuilder::new()
///     .output_dir("target")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct GeneratorSettingsBuilder {
    output_dir: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    timestamp: Option<NaiveDateTime>,
}

impl GeneratorSettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the output root. Generated files land in `<dir>/izpack/`.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory relative file-set patterns are resolved against.
    ///
    /// Default: current directory
    pub fn base_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Pins the generation stamp, for reproducible output.
    ///
    /// Default: local time at render
    pub fn timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `output_dir` is missing.
    pub fn build(self) -> crate::izpack::Result<GeneratorSettings> {
        use crate::izpack::error::Context;

        Ok(GeneratorSettings::new(
            self.output_dir.context("output_dir is required")?,
            self.base_dir.unwrap_or_else(|| PathBuf::from(".")),
            self.timestamp,
        ))
    }
}
