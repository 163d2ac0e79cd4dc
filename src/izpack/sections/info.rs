//! General application information (`<info>`).

use crate::izpack::{
    error::{Error, Result},
    markup::{Element, Node, WithAttributes, yes_no},
    section::{Extensions, FieldStore, RenderContext, Section},
};

/// Application name, required.
pub const APP_NAME: &str = "appname";
/// Application version.
pub const APP_VERSION: &str = "appversion";
/// Default install sub-path.
pub const APP_SUBPATH: &str = "appsubpath";
/// Homepage.
pub const URL: &str = "url";
/// Minimum Java version.
pub const JAVA_VERSION: &str = "javaversion";
/// Whether a JDK is required, as a yes/no token.
pub const REQUIRES_JDK: &str = "requiresjdk";
/// Web installer download location.
pub const WEB_DIR: &str = "webdir";
/// Installation summary log path.
pub const SUMMARY_LOG_FILE_PATH: &str = "summarylogfilepath";

const SCALAR_FIELDS: [&str; 8] = [
    APP_NAME,
    APP_VERSION,
    APP_SUBPATH,
    URL,
    JAVA_VERSION,
    REQUIRES_JDK,
    WEB_DIR,
    SUMMARY_LOG_FILE_PATH,
];

/// An application author.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    name: String,
    email: Option<String>,
}

impl Author {
    /// Creates an author without email.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Parses `Name <email>` as used in Cargo manifests.
    pub fn parse(entry: &str) -> Self {
        match entry.split_once('<') {
            Some((name, rest)) => {
                let email = rest.trim_end().trim_end_matches('>').trim();
                Self {
                    name: name.trim().to_string(),
                    email: (!email.is_empty()).then(|| email.to_string()),
                }
            }
            None => Self::new(entry.trim()),
        }
    }

    /// Author name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Author email.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn render(&self) -> Element {
        Element::new("author")
            .with_attr("name", &self.name)
            .with_attr("email", self.email.as_deref())
    }
}

/// Uninstaller generation options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uninstaller {
    /// Jar name, IzPack default when unset.
    pub name: Option<String>,
    /// Location the uninstaller is written to.
    pub path: Option<String>,
    /// Whether the uninstaller is written at all.
    pub write: bool,
}

impl Default for Uninstaller {
    fn default() -> Self {
        Self {
            name: None,
            path: None,
            write: true,
        }
    }
}

/// The `<info>` section.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_izpack::izpack::{Info, Author};
///
/// let mut info = Info::new("Demo");
/// info.set_app_version("1.0.0")
///     .add_author(Author::parse("Jane Doe <jane@example.com>"));
/// assert_eq!(info.app_name(), Some("Demo"));
/// ```
#[derive(Clone, Debug)]
pub struct Info {
    fields: FieldStore,
    extensions: Extensions,
    authors: Vec<Author>,
    run_privileged: Option<Option<String>>,
    uninstaller: Option<Uninstaller>,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            fields: FieldStore::new(Self::KIND),
            extensions: Extensions::new(),
            authors: Vec::new(),
            run_privileged: None,
            uninstaller: None,
        }
    }
}

impl Info {
    /// Creates an info section with the application name set.
    pub fn new(app_name: impl Into<String>) -> Self {
        let mut info = Self::default();
        info.set_app_name(app_name);
        info
    }

    /// Application name, if set.
    pub fn app_name(&self) -> Option<&str> {
        self.fields.get(APP_NAME)
    }

    /// Sets the application name.
    pub fn set_app_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.fields.set(APP_NAME, value);
        self
    }

    /// Sets the application version.
    pub fn set_app_version(&mut self, value: impl Into<String>) -> &mut Self {
        self.fields.set(APP_VERSION, value);
        self
    }

    /// Sets the default install sub-path.
    pub fn set_app_subpath(&mut self, value: impl Into<String>) -> &mut Self {
        self.fields.set(APP_SUBPATH, value);
        self
    }

    /// Sets the homepage.
    pub fn set_url(&mut self, value: impl Into<String>) -> &mut Self {
        self.fields.set(URL, value);
        self
    }

    /// Sets the minimum Java version.
    pub fn set_java_version(&mut self, value: impl Into<String>) -> &mut Self {
        self.fields.set(JAVA_VERSION, value);
        self
    }

    /// Sets whether a JDK (rather than a JRE) is required.
    pub fn set_requires_jdk(&mut self, value: bool) -> &mut Self {
        self.fields.set(REQUIRES_JDK, yes_no(value));
        self
    }

    /// Sets the web installer download location.
    pub fn set_web_dir(&mut self, value: impl Into<String>) -> &mut Self {
        self.fields.set(WEB_DIR, value);
        self
    }

    /// Sets the installation summary log path.
    pub fn set_summary_log_file_path(&mut self, value: impl Into<String>) -> &mut Self {
        self.fields.set(SUMMARY_LOG_FILE_PATH, value);
        self
    }

    /// Adds an author after the existing ones.
    pub fn add_author(&mut self, author: Author) -> &mut Self {
        self.authors.push(author);
        self
    }

    /// Authors in insertion order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Requests elevated privileges, optionally only when `condition` holds.
    pub fn set_run_privileged(&mut self, condition: Option<String>) -> &mut Self {
        self.run_privileged = Some(condition);
        self
    }

    /// Configures the uninstaller.
    pub fn set_uninstaller(&mut self, uninstaller: Uninstaller) -> &mut Self {
        self.uninstaller = Some(uninstaller);
        self
    }
}

impl Section for Info {
    const KIND: &'static str = "info";

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

    fn validate(&self) -> Result<()> {
        self.fields.require(APP_NAME)?;
        if self.authors.iter().any(|author| author.name.trim().is_empty()) {
            return Err(Error::MissingField {
                section: "author".into(),
                field: "name".into(),
            });
        }
        Ok(())
    }

    fn render_body(&self, _ctx: &RenderContext) -> Result<Element> {
        let mut info = Element::new(Self::KIND);

        for field in SCALAR_FIELDS {
            info.push(self.fields.optional_node(field));
            // Authors follow the homepage in IzPack's own examples.
            if field == URL {
                info.push(self.render_authors());
            }
        }

        if let Some(condition) = &self.run_privileged {
            info.push(Element::new("run-privileged").with_attr("condition", condition.as_deref()));
        }

        if let Some(uninstaller) = &self.uninstaller {
            info.push(
                Element::new("uninstaller")
                    .with_attr("name", uninstaller.name.as_deref())
                    .with_attr("path", uninstaller.path.as_deref())
                    .with_attr("write", uninstaller.write),
            );
        }

        Ok(info)
    }
}

impl Info {
    fn render_authors(&self) -> Node {
        if self.authors.is_empty() {
            return Node::comment("no authors");
        }
        let mut authors = Element::new("authors");
        authors.extend(self.authors.iter().map(Author::render));
        authors.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_entry_parsing() {
        let author = Author::parse("Jane Doe <jane@example.com>");
        assert_eq!(author.name(), "Jane Doe");
        assert_eq!(author.email(), Some("jane@example.com"));

        let bare = Author::parse("  Solo ");
        assert_eq!(bare.name(), "Solo");
        assert_eq!(bare.email(), None);
    }

    #[test]
    fn requires_jdk_is_a_token_field() {
        let mut info = Info::new("Demo");
        info.set_requires_jdk(true);
        assert_eq!(info.fields().get(REQUIRES_JDK), Some("yes"));
        info.set_requires_jdk(false);
        assert_eq!(info.fields().get(REQUIRES_JDK), Some("no"));
    }

    #[test]
    fn blank_author_name_fails_validation() {
        let mut info = Info::new("Demo");
        info.add_author(Author::parse("<a@b>"));

        match info.render(&RenderContext::default()) {
            Err(Error::MissingField { section, field }) => {
                assert_eq!(section, "author");
                assert_eq!(field, "name");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}
