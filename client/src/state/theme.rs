//! Theme context shared by the page tree.
//!
//! DESIGN
//! ======
//! `ThemeContext` is a `Copy` handle over one `RwSignal<ThemeState>` plus a
//! memoized resolved theme. It is created once in `App` and handed down as a
//! component prop, so every consumer reads the same memo and there is no
//! context lookup that can silently miss.

use std::sync::OnceLock;

use leptos::prelude::*;
use themes::{OsPreference, Theme, ThemeCatalog, ThemeState};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Theme identifiers offered by this site, in display order.
pub const THEME_NAMES: [&str; 3] = ["light", "dark", CUSTOM_THEME];

/// The seasonal theme offered alongside the built-ins.
pub const CUSTOM_THEME: &str = "christmas";

/// The site-wide catalog. Shared with the server so cookie, form and
/// attribute values are validated identically on both sides.
pub fn catalog() -> &'static ThemeCatalog {
    static VALUE: OnceLock<ThemeCatalog> = OnceLock::new();
    VALUE.get_or_init(|| ThemeCatalog::new(THEME_NAMES).unwrap_or_else(|_| ThemeCatalog::builtin()))
}

/// Coerce untrusted input against [`catalog`].
pub fn coerce(input: Option<&str>) -> Option<Theme> {
    catalog().coerce(input)
}

/// Reactive theme handle passed explicitly to components that need it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
    resolved: Memo<Theme>,
}

impl ThemeContext {
    /// Create the context from the persisted value supplied by the server.
    pub fn new(persisted: Option<Theme>) -> Self {
        let state = RwSignal::new(ThemeState::new(persisted));
        let resolved = Memo::new(move |_| state.with(ThemeState::resolved));
        Self { state, resolved }
    }

    /// Current resolved theme (tracked).
    pub fn resolved(&self) -> Theme {
        self.resolved.get()
    }

    /// Theme the toggle control should submit next (tracked).
    pub fn toggle_target(&self) -> Theme {
        self.state.with(ThemeState::toggle_target)
    }

    /// The user's own choice, if any (tracked).
    pub fn effective_choice(&self) -> Option<Theme> {
        self.state.with(|s| s.effective_choice().cloned())
    }

    /// Record an in-session choice and recompute for all readers.
    ///
    /// The choice also replaces the local copy of the persisted value, since
    /// every choice made on the page is sent to the cookie endpoint. Saving
    /// it is the caller's job.
    pub fn set_override(&self, value: Option<Theme>) {
        self.state.maybe_update(|s| s.commit(value));
    }

    /// Feed a new OS preference into resolution.
    pub fn set_os_preference(&self, os: OsPreference) {
        self.state.maybe_update(|s| s.set_os_preference(os));
    }
}
