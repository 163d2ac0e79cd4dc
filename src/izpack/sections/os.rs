//! Operating system family tokens and constraint sets.

use crate::izpack::{
    error::{Error, Result},
    markup::{Element, WithAttributes},
};
use std::{collections::BTreeSet, fmt, str::FromStr, sync::LazyLock};

static TOKEN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-z][a-z0-9_.-]*$").expect("OS family pattern is valid")
});

/// An operating system family token (`windows`, `macosx`, `unix`, ...).
///
/// The set is open: any lowercase identifier is accepted. `darwin`, `mac`
/// and `osx` normalize to `macosx`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct OsFamily(String);

impl OsFamily {
    /// Parses and normalizes a token.
    pub fn new(token: &str) -> Result<Self> {
        let normalized = token.trim().to_ascii_lowercase();
        let normalized = match normalized.as_str() {
            "darwin" | "mac" | "osx" => "macosx".to_string(),
            _ => normalized,
        };
        if !TOKEN.is_match(&normalized) {
            return Err(Error::InvalidOsFamily(token.to_string()));
        }
        Ok(Self(normalized))
    }

    /// `windows`
    pub fn windows() -> Self {
        Self("windows".into())
    }

    /// `macosx`
    pub fn macosx() -> Self {
        Self("macosx".into())
    }

    /// `unix`
    pub fn unix() -> Self {
        Self("unix".into())
    }

    /// The normalized token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OsFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for OsFamily {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<OsFamily> for String {
    fn from(family: OsFamily) -> Self {
        family.0
    }
}

/// Families an entity is restricted to. Empty means unrestricted.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct OsConstraints(BTreeSet<OsFamily>);

impl OsConstraints {
    /// Unrestricted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a family; duplicates collapse.
    pub fn insert(&mut self, family: OsFamily) {
        self.0.insert(family);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, family: OsFamily) -> Self {
        self.insert(family);
        self
    }

    /// True when no family is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Families in token order.
    pub fn iter(&self) -> impl Iterator<Item = &OsFamily> {
        self.0.iter()
    }

    /// One `<os family="..."/>` marker per family.
    pub fn markers(&self) -> impl Iterator<Item = Element> + '_ {
        self.0
            .iter()
            .map(|family| Element::new("os").with_attr("family", family.as_str()))
    }

    /// Appends the markers to `element`.
    pub fn render_into(&self, element: &mut Element) {
        element.extend(self.markers());
    }
}

impl FromIterator<OsFamily> for OsConstraints {
    fn from_iter<I: IntoIterator<Item = OsFamily>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_normalize_to_macosx() {
        for alias in ["darwin", "Mac", " osx ", "macosx"] {
            assert_eq!(OsFamily::new(alias).map(|f| f.to_string()).ok(), Some("macosx".into()));
        }
    }

    #[test]
    fn open_set_accepts_custom_tokens() {
        let family = OsFamily::new("solaris").ok();
        assert_eq!(family.as_ref().map(OsFamily::as_str), Some("solaris"));
    }

    #[test]
    fn blank_or_malformed_tokens_are_rejected() {
        for bad in ["", "   ", "9lives", "win dows"] {
            assert!(matches!(OsFamily::new(bad), Err(Error::InvalidOsFamily(_))));
        }
    }

    #[test]
    fn empty_set_renders_nothing() {
        let mut element = Element::new("pack");
        OsConstraints::new().render_into(&mut element);
        assert!(element.is_empty());
    }
}
