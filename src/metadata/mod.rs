//! Installer configuration loading from a single TOML manifest

pub mod config;

pub use config::IzPackConfig;

use crate::error::{AppError, CliError, Result};
use crate::izpack::Author;
use config::InfoConfig;
use std::path::Path;

/// Package metadata used to fill in `[info]` defaults
#[derive(Debug, Default)]
pub struct PackageMetadata {
    /// Package name, becomes the application name
    pub name: Option<String>,

    /// Package version (e.g., "0.1.0")
    pub version: Option<String>,

    /// Homepage URL if specified
    pub homepage: Option<String>,

    /// `"Name <email>"` author entries
    pub authors: Vec<String>,
}

/// Load the installer configuration from a TOML manifest (single read + parse)
///
/// Two layouts are accepted:
/// - a Cargo-style manifest whose `[package.metadata.izpack]` table holds the
///   installer config, with `[package]` supplying `[info]` defaults
/// - a standalone file whose top level is the installer config
pub fn load_manifest(manifest_path: &Path) -> Result<IzPackConfig> {
    // Step 1: Read file once
    let manifest = std::fs::read_to_string(manifest_path).map_err(|e| {
        AppError::Cli(CliError::ExecutionFailed {
            command: "read_manifest".to_string(),
            reason: format!("Failed to read {}: {}", manifest_path.display(), e),
        })
    })?;

    // Step 2: Parse TOML once
    let toml_value: toml::Value = toml::from_str(&manifest)?;

    let Some(package) = toml_value.get("package") else {
        log::debug!("No [package] table, reading {} as installer config", manifest_path.display());
        return Ok(toml_value.try_into()?);
    };

    // Step 3: Installer table, or an empty config when only [package] is present
    let mut config: IzPackConfig = match package
        .get("metadata")
        .and_then(|m| m.get("izpack"))
        .cloned()
    {
        Some(table) => table.try_into()?,
        None => {
            log::warn!(
                "No [package.metadata.izpack] table in {}, using package defaults only",
                manifest_path.display()
            );
            IzPackConfig::default()
        }
    };

    // Step 4: Fill [info] gaps from [package]
    let metadata = parse_package_metadata(package);
    apply_package_defaults(config.info.get_or_insert_with(InfoConfig::default), metadata);

    Ok(config)
}

/// Extract the `[package]` fields that map onto `[info]`
fn parse_package_metadata(package: &toml::Value) -> PackageMetadata {
    PackageMetadata {
        name: package
            .get("name")
            .and_then(|v| v.as_str())
            .map(String::from),

        version: package
            .get("version")
            .and_then(|v| v.as_str())
            .map(String::from),

        homepage: package
            .get("homepage")
            .and_then(|v| v.as_str())
            .map(String::from),

        authors: package
            .get("authors")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Explicit installer values always win over package metadata
fn apply_package_defaults(info: &mut InfoConfig, metadata: PackageMetadata) {
    if info.app_name.is_none() {
        info.app_name = metadata.name;
    }
    if info.app_version.is_none() {
        info.app_version = metadata.version;
    }
    if info.url.is_none() {
        info.url = metadata.homepage;
    }
    if info.authors.is_empty() {
        info.authors = metadata
            .authors
            .into_iter()
            .filter(|author| !Author::parse(author).name().is_empty())
            .collect();
    }
}
