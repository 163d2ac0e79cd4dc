//! Configuration for generation runs.
//!
//! Where output goes, how relative file-set patterns resolve, and which
//! timestamp the descriptor carries.

mod builder;
mod core;

pub use builder::GeneratorSettingsBuilder;
pub use self::core::{DESCRIPTOR_FILE, GENERATED_DIR, GeneratorSettings};
