//! Document assembly: the `<installation>` root.
//!
//! The root always has the same skeleton regardless of which sections are
//! populated, so two generated descriptors diff cleanly:
//!
//! ```text
//! <installation version="5.0">
//!     <!-- banner -->
//!     <!-- Generated at yyyy/MM/dd HH:mm:ss -->
//!     info, locale, resources, packaging, variables, guiprefs, panels, packs
//! </installation>
//! ```
//!
//! Absent optional sections render as `<!-- no <kind> section -->`.

use crate::izpack::{
    error::{Error, Result},
    markup::{Element, Node, WithAttributes, writer},
    section::{RenderContext, Section, Slot},
    sections::{GuiPrefs, Info, Packaging, Packs, Panels, Resources, Variables},
};
use chrono::NaiveDateTime;

/// `version` attribute of the root element.
pub const SCHEMA_VERSION: &str = "5.0";

/// Locale used when none is configured.
pub const FALLBACK_LOCALE: &str = "eng";

/// First comment of every generated descriptor.
pub const BANNER: &str =
    "IzPack installation descriptor generated by kodegen_bundler_izpack. Do not edit by hand.";

/// Format of the generation stamp comment.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Section kinds held at most once per installation.
pub trait SingletonSection: Section + Sized {
    /// The slot for this kind.
    fn slot(installation: &Installation) -> &Slot<Self>;

    /// The slot for this kind, mutably.
    fn slot_mut(installation: &mut Installation) -> &mut Slot<Self>;
}

macro_rules! singleton_section {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl SingletonSection for $ty {
                fn slot(installation: &Installation) -> &Slot<Self> {
                    &installation.$field
                }

                fn slot_mut(installation: &mut Installation) -> &mut Slot<Self> {
                    &mut installation.$field
                }
            }
        )*
    };
}

singleton_section! {
    Info => info,
    Resources => resources,
    Packaging => packaging,
    Variables => variables,
    GuiPrefs => gui_prefs,
    Panels => panels,
    Packs => packs,
}

/// The whole descriptor.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_izpack::izpack::{Info, Installation, Packaging, RenderContext};
///
/// # fn example() -> kodegen_bundler_izpack::izpack::Result<()> {
/// let mut installation = Installation::new();
/// installation.attach(Info::new("Demo"))?;
/// installation.attach(Packaging::default())?;
///
/// // A second packaging section is rejected immediately.
/// assert!(installation.attach(Packaging::default()).is_err());
///
/// let stamp = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
///     .and_then(|d| d.and_hms_opt(3, 4, 5))
///     .expect("valid date");
/// let xml = installation.to_xml(&RenderContext::default(), stamp)?;
/// assert!(xml.contains("<appname>Demo</appname>"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Installation {
    info: Slot<Info>,
    resources: Slot<Resources>,
    packaging: Slot<Packaging>,
    variables: Slot<Variables>,
    gui_prefs: Slot<GuiPrefs>,
    panels: Slot<Panels>,
    packs: Slot<Packs>,
    locales: Vec<String>,
}

impl Installation {
    /// Creates an installation with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a singleton section, or clears its slot when given `None`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateSection`] when a section of the same kind is
    /// already attached. Clearing always succeeds.
    pub fn attach<S: SingletonSection>(&mut self, section: impl Into<Option<S>>) -> Result<()> {
        S::slot_mut(self).attach(section.into())
    }

    /// Clears the slot for `S`.
    pub fn clear<S: SingletonSection>(&mut self) {
        // Attaching `None` cannot fail.
        let _ = S::slot_mut(self).attach(None);
    }

    /// The attached section of kind `S`.
    pub fn section<S: SingletonSection>(&self) -> Option<&S> {
        S::slot(self).get()
    }

    /// The attached section of kind `S`, mutably.
    pub fn section_mut<S: SingletonSection>(&mut self) -> Option<&mut S> {
        S::slot_mut(self).get_mut()
    }

    /// Adds a locale ISO3 code. Blank and repeated codes are ignored.
    pub fn add_locale(&mut self, iso3: impl Into<String>) -> &mut Self {
        let iso3 = iso3.into().trim().to_string();
        if !iso3.is_empty() && !self.locales.contains(&iso3) {
            self.locales.push(iso3);
        }
        self
    }

    /// Configured locales, or the fallback locale when none are.
    pub fn locales(&self) -> Vec<&str> {
        if self.locales.is_empty() {
            vec![FALLBACK_LOCALE]
        } else {
            self.locales.iter().map(String::as_str).collect()
        }
    }

    /// Renders the root element.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`] when the info section or its application name
    /// is missing, plus any error raised by a section. Nothing is partially
    /// rendered.
    pub fn render(&self, ctx: &RenderContext, generated_at: NaiveDateTime) -> Result<Element> {
        if !self.info.is_attached() {
            return Err(Error::MissingField {
                section: "installation".into(),
                field: Info::KIND.into(),
            });
        }

        let mut locale = Element::new("locale");
        locale.extend(
            self.locales()
                .into_iter()
                .map(|iso3| Element::new("langpack").with_attr("iso3", iso3)),
        );

        let mut root = Element::new("installation").with_attr("version", SCHEMA_VERSION);
        root.push(Node::comment(BANNER));
        root.push(Node::comment(format!(
            "Generated at {}",
            generated_at.format(TIMESTAMP_FORMAT)
        )));
        root.push(self.info.render_or_placeholder(ctx)?);
        root.push(locale);
        root.push(self.resources.render_or_placeholder(ctx)?);
        root.push(self.packaging.render_or_placeholder(ctx)?);
        root.push(self.variables.render_or_placeholder(ctx)?);
        root.push(self.gui_prefs.render_or_placeholder(ctx)?);
        root.push(self.panels.render_or_placeholder(ctx)?);
        root.push(self.packs.render_or_placeholder(ctx)?);

        Ok(root)
    }

    /// Renders and serializes the full descriptor text.
    pub fn to_xml(&self, ctx: &RenderContext, generated_at: NaiveDateTime) -> Result<String> {
        let root = self.render(ctx, generated_at)?;
        Ok(writer::to_document_string(&root))
    }
}
