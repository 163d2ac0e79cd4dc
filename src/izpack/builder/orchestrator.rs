//! Main generation orchestration.
//!
//! This module provides the [`Generator`] that plans side-car files,
//! renders the descriptor, and persists both once rendering succeeded.

use super::{
    checksum::calculate_sha256,
    prepare::{PreparedResources, prepare_install_dirs},
};
use crate::izpack::{
    GeneratorSettings, Installation, RenderContext, Resources, Result, utils::fs::write_text_file,
};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a successful generation run.
#[derive(Clone, Debug, Serialize)]
pub struct GenerationReport {
    /// Path of the written descriptor.
    pub descriptor: PathBuf,

    /// Paths of the written install directory side-cars.
    pub side_cars: Vec<PathBuf>,

    /// Hex-encoded SHA-256 of the descriptor as written.
    pub sha256: String,
}

/// A descriptor rendered in memory, with the side-cars it references.
#[derive(Clone, Debug)]
pub struct RenderedDescriptor {
    /// Full document text, declaration included.
    pub xml: String,

    /// Side-car files the document refers to.
    pub prepared: PreparedResources,
}

/// Generation orchestrator.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_izpack::izpack::{Generator, GeneratorSettingsBuilder, Info, Installation};
///
/// # async fn example() -> kodegen_bundler_izpack::izpack::Result<()> {
/// let mut installation = Installation::new();
/// installation.attach(Info::new("Demo"))?;
///
/// let settings = GeneratorSettingsBuilder::new().output_dir("target").build()?;
/// let report = Generator::new(installation, settings).generate().await?;
/// println!("{} ({})", report.descriptor.display(), report.sha256);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Generator {
    installation: Installation,
    settings: GeneratorSettings,
}

impl Generator {
    /// Creates a generator for `installation`.
    pub fn new(installation: Installation, settings: GeneratorSettings) -> Self {
        Self {
            installation,
            settings,
        }
    }

    /// Returns the document being generated.
    pub fn installation(&self) -> &Installation {
        &self.installation
    }

    /// Returns the generator settings.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Plans side-cars and renders the document without writing anything.
    pub fn render(&self) -> Result<RenderedDescriptor> {
        let prepared = prepare_install_dirs(
            self.installation.section::<Resources>(),
            &self.settings.generated_dir(),
        )?;
        let ctx = RenderContext::new(self.settings.base_dir())
            .with_install_dirs(prepared.install_dir_sources());
        let xml = self.installation.to_xml(&ctx, self.settings.timestamp())?;

        Ok(RenderedDescriptor { xml, prepared })
    }

    /// Renders, then writes side-cars and the descriptor.
    ///
    /// Nothing is written when rendering fails. Side-cars go first so an
    /// existing descriptor always has its side-cars next to it; they are
    /// removed again when any write fails.
    pub async fn generate(&self) -> Result<GenerationReport> {
        let rendered = self.render()?;

        if let Err(e) = rendered.prepared.write_all().await {
            rendered.prepared.remove_all().await;
            return Err(e);
        }

        let descriptor = self.settings.descriptor_path();
        if let Err(e) = write_text_file(&descriptor, &rendered.xml).await {
            rendered.prepared.remove_all().await;
            return Err(e);
        }
        let sha256 = calculate_sha256(&descriptor).await?;
        log::info!("Generated {} (sha256 {})", descriptor.display(), sha256);

        Ok(GenerationReport {
            descriptor,
            side_cars: rendered
                .prepared
                .side_cars()
                .iter()
                .map(|side_car| side_car.path.clone())
                .collect(),
            sha256,
        })
    }
}
