//! Catalog of allowed theme identifiers and coercion of untrusted input.
//!
//! DESIGN
//! ======
//! A [`Theme`] can only be obtained from a [`ThemeCatalog`] (or from the two
//! built-in constants every catalog is required to contain), so holding one is
//! proof that the identifier passed exact-match validation. Cookies, form
//! fields and rendered attributes all flow through [`ThemeCatalog::coerce`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

/// Error returned by [`ThemeCatalog::new`] for an unusable identifier list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No identifiers were supplied.
    #[error("theme catalog must contain at least one identifier")]
    Empty,
    /// An identifier was empty or whitespace-only.
    #[error("theme identifiers must not be blank")]
    BlankIdentifier,
    /// The same identifier was listed twice.
    #[error("duplicate theme identifier: {0}")]
    Duplicate(String),
    /// A built-in identifier produced by OS or fallback resolution is missing.
    #[error("theme catalog is missing built-in identifier: {0}")]
    MissingBuiltin(&'static str),
}

/// A validated theme identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Theme(Cow<'static, str>);

impl Theme {
    /// The built-in light theme, also the fixed fallback.
    pub const LIGHT: Theme = Theme(Cow::Borrowed("light"));
    /// The built-in dark theme.
    pub const DARK: Theme = Theme(Cow::Borrowed("dark"));

    fn owned(name: String) -> Self {
        match name.as_str() {
            "light" => Self::LIGHT,
            "dark" => Self::DARK,
            _ => Self(Cow::Owned(name)),
        }
    }

    /// The identifier as rendered into class names, cookies and form fields.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        *self == Self::DARK
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Theme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Theme {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Theme {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Ordered, immutable set of allowed theme identifiers.
///
/// Cloning is cheap; the identifiers are shared behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Arc<[Theme]>,
}

impl ThemeCatalog {
    /// Build a catalog from identifiers in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the list is empty, contains a blank or
    /// repeated identifier, or lacks `"light"` or `"dark"`.
    pub fn new<I, S>(identifiers: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut themes: Vec<Theme> = Vec::new();
        for name in identifiers {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(CatalogError::BlankIdentifier);
            }
            if themes.iter().any(|t| t.as_str() == name) {
                return Err(CatalogError::Duplicate(name));
            }
            themes.push(Theme::owned(name));
        }

        if themes.is_empty() {
            return Err(CatalogError::Empty);
        }
        for builtin in ["light", "dark"] {
            if !themes.iter().any(|t| t.as_str() == builtin) {
                return Err(CatalogError::MissingBuiltin(builtin));
            }
        }

        Ok(Self { themes: themes.into() })
    }

    /// The minimal catalog: `["light", "dark"]`.
    #[must_use]
    pub fn builtin() -> Self {
        Self { themes: Arc::from([Theme::LIGHT, Theme::DARK]) }
    }

    /// Map untrusted input onto the catalog.
    ///
    /// Returns the matching entry on an exact, case-sensitive match and `None`
    /// ("unset") for absent, empty or unrecognized input. Never fails.
    #[must_use]
    pub fn coerce(&self, input: Option<&str>) -> Option<Theme> {
        let input = input?;
        self.themes.iter().find(|t| t.as_str() == input).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.themes.iter().any(|t| t.as_str() == name)
    }

    /// Catalog entries in construction order.
    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}
