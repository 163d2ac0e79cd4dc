//! Packaging strategy (`<packaging>`).

use crate::izpack::{
    error::Result,
    markup::{Element, WithAttributes},
    section::{Extensions, FieldStore, RenderContext, Section},
};

const SINGLE_VOLUME_PACKAGER: &str = "com.izforge.izpack.compiler.packager.impl.Packager";
const MULTI_VOLUME_PACKAGER: &str = "com.izforge.izpack.compiler.packager.impl.MultiVolumePackager";
const SINGLE_VOLUME_UNPACKER: &str = "com.izforge.izpack.installer.unpacker.Unpacker";
const MULTI_VOLUME_UNPACKER: &str = "com.izforge.izpack.installer.multiunpacker.MultiVolumeUnpacker";

/// How the installer payload is split.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackagingStrategy {
    /// Everything in one installer jar.
    #[default]
    SingleVolume,
    /// Payload split across volumes.
    MultiVolume,
}

impl PackagingStrategy {
    /// Compiler-side packager class.
    pub fn packager_class(self) -> &'static str {
        match self {
            Self::SingleVolume => SINGLE_VOLUME_PACKAGER,
            Self::MultiVolume => MULTI_VOLUME_PACKAGER,
        }
    }

    /// Installer-side unpacker class.
    pub fn unpacker_class(self) -> &'static str {
        match self {
            Self::SingleVolume => SINGLE_VOLUME_UNPACKER,
            Self::MultiVolume => MULTI_VOLUME_UNPACKER,
        }
    }
}

/// The `<packaging>` section.
///
/// Volume sizes only apply to [`PackagingStrategy::MultiVolume`]; under the
/// single-volume strategy non-zero values are reported and ignored.
#[derive(Clone, Debug)]
pub struct Packaging {
    fields: FieldStore,
    extensions: Extensions,
    strategy: PackagingStrategy,
    volume_size: u64,
    first_volume_free_space: u64,
}

impl Default for Packaging {
    fn default() -> Self {
        Self::new(PackagingStrategy::default())
    }
}

impl Packaging {
    /// Creates a packaging section for `strategy`.
    pub fn new(strategy: PackagingStrategy) -> Self {
        Self {
            fields: FieldStore::new(Self::KIND),
            extensions: Extensions::new(),
            strategy,
            volume_size: 0,
            first_volume_free_space: 0,
        }
    }

    /// Selected strategy.
    pub fn strategy(&self) -> PackagingStrategy {
        self.strategy
    }

    /// Maximum volume size in bytes; zero leaves the IzPack default.
    pub fn set_volume_size(&mut self, bytes: u64) -> &mut Self {
        self.volume_size = bytes;
        self
    }

    /// Space kept free on the first volume in bytes.
    pub fn set_first_volume_free_space(&mut self, bytes: u64) -> &mut Self {
        self.first_volume_free_space = bytes;
        self
    }

    /// True when volume settings are set but the strategy ignores them.
    pub fn has_ignored_volume_settings(&self) -> bool {
        self.strategy == PackagingStrategy::SingleVolume
            && (self.volume_size != 0 || self.first_volume_free_space != 0)
    }
}

impl Section for Packaging {
    const KIND: &'static str = "packaging";

    fn fields(&self) -> &FieldStore {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut FieldStore {
        &mut self.fields
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn render_body(&self, _ctx: &RenderContext) -> Result<Element> {
        if self.has_ignored_volume_settings() {
            log::warn!(
                "Ignoring volume size ({}) and first volume free space ({}): \
                 only used with the multi-volume packaging strategy",
                self.volume_size,
                self.first_volume_free_space
            );
        }

        let mut packager =
            Element::new("packager").with_attr("class", self.strategy.packager_class());
        if self.strategy == PackagingStrategy::MultiVolume {
            packager.push(
                Element::new("options")
                    .with_attr("volumesize", (self.volume_size != 0).then_some(self.volume_size))
                    .with_attr(
                        "firstvolumefreespace",
                        (self.first_volume_free_space != 0).then_some(self.first_volume_free_space),
                    ),
            );
        }

        Ok(Element::new(Self::KIND)
            .child(packager)
            .child(Element::new("unpacker").with_attr("class", self.strategy.unpacker_class())))
    }
}
