//! Precedence rule combining override, persisted and OS preference.

use crate::catalog::Theme;
use crate::os::OsPreference;

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;

/// Theme rendered when nothing else is known.
pub const FALLBACK_THEME: Theme = Theme::LIGHT;

/// Inputs to [`resolve`], named to avoid mixing up the two theme slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeSources {
    /// In-session choice that has not necessarily been persisted yet.
    pub override_theme: Option<Theme>,
    /// Value read from the theme cookie at request time.
    pub persisted: Option<Theme>,
    pub os: OsPreference,
}

/// Pick the theme to render: override, then persisted, then the OS
/// preference, then [`FALLBACK_THEME`]. Never returns "unset".
#[must_use]
pub fn resolve(sources: &ThemeSources) -> Theme {
    sources
        .override_theme
        .clone()
        .or_else(|| sources.persisted.clone())
        .or_else(|| sources.os.theme())
        .unwrap_or(FALLBACK_THEME)
}

/// Class for `<html>` in server-rendered output.
///
/// The server cannot see the OS preference, so it only commits to a theme
/// the user has persisted. Without a class the stylesheet follows
/// `prefers-color-scheme`, which is what [`resolve`] yields after hydration.
#[must_use]
pub fn server_render_class(persisted: Option<&Theme>) -> Option<&str> {
    persisted.map(Theme::as_str)
}
