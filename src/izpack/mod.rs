//! IzPack installation descriptor generation.
//!
//! Build an [`Installation`] from typed sections, attach each one
//! explicitly, then hand it to a [`Generator`]:
//!
//! ```no_run
//! use kodegen_bundler_izpack::izpack::{
//!     Generator, GeneratorSettingsBuilder, Info, Installation, Pack, Packs,
//! };
//!
//! # async fn example() -> kodegen_bundler_izpack::izpack::Result<()> {
//! let mut info = Info::new("Demo");
//! info.set_app_version("1.0.0");
//!
//! let mut packs = Packs::new();
//! let mut core = Pack::new("Core");
//! core.set_required(true);
//! packs.add(core);
//!
//! let mut installation = Installation::new();
//! installation.attach(info)?;
//! installation.attach(packs)?;
//!
//! let settings = GeneratorSettingsBuilder::new().output_dir("target").build()?;
//! Generator::new(installation, settings).generate().await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod document;
pub mod error;
pub mod markup;
pub mod section;
pub mod sections;
pub mod settings;
pub mod utils;

pub use builder::{GenerationReport, Generator, PreparedResources, RenderedDescriptor, SideCar};
pub use document::{
    BANNER, FALLBACK_LOCALE, Installation, SCHEMA_VERSION, SingletonSection, TIMESTAMP_FORMAT,
};
pub use error::{Context, Error, ErrorExt, Result};
pub use markup::{AttrValue, Element, Node, WithAttributes};
pub use section::{Extensions, FieldStore, RenderContext, Section, Slot};
pub use sections::{
    ActionStage, Author, DEFAULT_HEIGHT, DEFAULT_WIDTH, Executable, ExecutableKind,
    ExecutableStage, FailureAction, FileSet, GuiPrefs, INSTALL_DIR_RESOURCE_PREFIX, Info,
    LookAndFeel, OsConstraints, OsFamily, Overwrite, Pack, PackFile, Packaging, PackagingStrategy,
    Packs, Panel, Panels, ParseType, Parsable, Resource, Resources, Uninstaller, Variables,
    install_dir_resource_id,
};
pub use settings::{DESCRIPTOR_FILE, GENERATED_DIR, GeneratorSettings, GeneratorSettingsBuilder};
