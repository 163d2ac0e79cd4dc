//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! of the paths involved before anything is generated.

use clap::Parser;
use std::path::PathBuf;

/// IzPack installation descriptor generator
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_izpack",
    version,
    about = "IzPack installation descriptor generator",
    long_about = "Generates an IzPack install.xml descriptor from a TOML manifest.

The manifest is either a Cargo.toml carrying a [package.metadata.izpack] table,
or a standalone file whose top level is the installer configuration.

Usage:
  kodegen_bundler_izpack --manifest Cargo.toml --output-dir target
  kodegen_bundler_izpack --manifest installer.toml --output-dir dist --base-dir build --report-json

Exit code 0 = descriptor guaranteed to exist at <output-dir>/izpack/install.xml."
)]
pub struct Args {
    /// TOML manifest holding the installer configuration
    #[arg(short = 'm', long, value_name = "PATH")]
    pub manifest: PathBuf,

    /// Output root; files are written to <DIR>/izpack/
    ///
    /// Created if it does not exist.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Directory relative file-set patterns are resolved against
    ///
    /// Defaults to the manifest's directory.
    #[arg(short = 'b', long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Print a JSON generation report instead of the descriptor path
    #[arg(long)]
    pub report_json: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.manifest.is_file() {
            return Err(format!(
                "Manifest not found: {}",
                self.manifest.display()
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }

        if self.output_dir.is_file() {
            return Err(format!(
                "Output directory is a file: {}",
                self.output_dir.display()
            ));
        }

        if let Some(base_dir) = self.base_dir.as_ref().filter(|dir| !dir.is_dir()) {
            return Err(format!(
                "Base directory not found: {}",
                base_dir.display()
            ));
        }

        Ok(())
    }

    /// Base directory for file-set patterns, falling back to the manifest's directory
    pub fn resolved_base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| {
            self.manifest
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}
