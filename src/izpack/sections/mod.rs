//! Typed descriptor sections.
//!
//! Each singleton section (`info`, `resources`, `packaging`, `variables`,
//! `guiprefs`, `panels`, `packs`) implements [`Section`](crate::izpack::Section)
//! and is attached to an [`Installation`](crate::izpack::Installation)
//! explicitly. Child entities (authors, resources, panels, packs, ...) are
//! plain values appended with `add_*` calls.

mod fileset;
mod guiprefs;
pub mod info;
mod os;
mod packaging;
mod packs;
mod panels;
mod resources;
mod variables;

pub use fileset::{FileSet, Overwrite, PackFile};
pub use guiprefs::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GuiPrefs, LookAndFeel};
pub use info::{Author, Info, Uninstaller};
pub use os::{OsConstraints, OsFamily};
pub use packaging::{Packaging, PackagingStrategy};
pub use packs::{
    Executable, ExecutableKind, ExecutableStage, FailureAction, Pack, Packs, ParseType, Parsable,
};
pub use panels::{ActionStage, Panel, Panels};
pub use resources::{INSTALL_DIR_RESOURCE_PREFIX, Resource, Resources, install_dir_resource_id};
pub use variables::Variables;
