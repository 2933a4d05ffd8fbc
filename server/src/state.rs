//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only immutable data: the theme catalog shared with the client crate
//! and the cookie attributes from configuration. Per-visitor state lives in
//! the `theme` cookie.

use themes::ThemeCatalog;

use crate::config::CookieSettings;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: &'static ThemeCatalog,
    pub cookie: CookieSettings,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: &'static ThemeCatalog, cookie: CookieSettings) -> Self {
        Self { catalog, cookie }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
