//! Per-session theme state: the reactive accessor's backing value.
//!
//! DESIGN
//! ======
//! `ThemeState` stores the three inputs and derives the rendered theme on
//! demand, so there is never a stale resolved value to invalidate. UI layers
//! wrap it in their own reactive cell and recompute through [`ThemeState::resolved`].

use crate::catalog::Theme;
use crate::os::OsPreference;
use crate::resolve::{ThemeSources, resolve};

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

/// Coerced cookie value attached to a request for the SSR renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistedTheme(pub Option<Theme>);

/// Inputs for one page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    sources: ThemeSources,
}

impl ThemeState {
    /// Start a session from the server-supplied persisted value.
    #[must_use]
    pub fn new(persisted: Option<Theme>) -> Self {
        Self { sources: ThemeSources { persisted, ..ThemeSources::default() } }
    }

    /// Record an in-session choice. Returns whether the state changed.
    ///
    /// Nothing is persisted here; the caller hands the value to the cookie
    /// endpoint separately.
    pub fn set_override(&mut self, value: Option<Theme>) -> bool {
        if self.sources.override_theme == value {
            return false;
        }
        self.sources.override_theme = value;
        true
    }

    /// Record a choice that was just submitted for persisting.
    ///
    /// The local copy of the cookie is updated along with the override, so
    /// submitting "unset" falls through to the OS preference instead of the
    /// stale cookie value. Returns whether the state changed.
    pub fn commit(&mut self, value: Option<Theme>) -> bool {
        if self.sources.override_theme == value && self.sources.persisted == value {
            return false;
        }
        self.sources.persisted.clone_from(&value);
        self.sources.override_theme = value;
        true
    }

    /// Record a new OS preference. Returns whether the state changed.
    pub fn set_os_preference(&mut self, os: OsPreference) -> bool {
        if self.sources.os == os {
            return false;
        }
        self.sources.os = os;
        true
    }

    #[must_use]
    pub fn resolved(&self) -> Theme {
        resolve(&self.sources)
    }

    /// The theme the user picked, ignoring the OS and fallback.
    #[must_use]
    pub fn effective_choice(&self) -> Option<&Theme> {
        self.sources.override_theme.as_ref().or(self.sources.persisted.as_ref())
    }

    /// Value the "toggle" control should submit: light when currently dark,
    /// dark otherwise.
    #[must_use]
    pub fn toggle_target(&self) -> Theme {
        if self.resolved().is_dark() { Theme::LIGHT } else { Theme::DARK }
    }

    #[must_use]
    pub fn persisted(&self) -> Option<&Theme> {
        self.sources.persisted.as_ref()
    }

    #[must_use]
    pub fn override_theme(&self) -> Option<&Theme> {
        self.sources.override_theme.as_ref()
    }

    #[must_use]
    pub fn os_preference(&self) -> OsPreference {
        self.sources.os
    }
}
