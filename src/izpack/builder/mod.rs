//! Generation orchestration.
//!
//! - [`prepare`] - per-OS install directory side-car planning
//! - [`checksum`] - SHA256 of the written descriptor
//! - [`orchestrator`] - the [`Generator`] tying render and write together

mod checksum;
mod orchestrator;
pub mod prepare;

pub use orchestrator::{GenerationReport, Generator, RenderedDescriptor};
pub use prepare::{PreparedResources, SideCar, prepare_install_dirs};
