//! Command line interface for the IzPack descriptor generator.
//!
//! Parses arguments, loads the manifest, generates, and reports where the
//! descriptor was written.

mod args;

pub use args::Args;

use crate::error::{CliError, Result};
use crate::izpack::{Generator, GeneratorSettingsBuilder};
use crate::metadata;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs one generation for already-parsed arguments
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    log::info!("Loading installer configuration from {}", args.manifest.display());
    let config = metadata::load_manifest(&args.manifest)?;
    let installation = config.into_installation()?;

    let settings = GeneratorSettingsBuilder::new()
        .output_dir(&args.output_dir)
        .base_dir(args.resolved_base_dir())
        .build()?;

    let report = Generator::new(installation, settings).generate().await?;

    if args.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.descriptor.display());
    }

    Ok(0)
}
