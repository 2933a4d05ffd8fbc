//! REST helpers for persisting a theme choice.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the endpoint is only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A failed save leaves the
//! optimistic in-session override in place; the cookie simply keeps its old
//! value for the next request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use themes::Theme;

/// Fetch endpoint that sets the theme cookie and answers `204`.
pub const THEME_ENDPOINT: &str = "/api/theme";

/// Native form action that sets the theme cookie and redirects back.
pub const THEME_FORM_ACTION: &str = "/theme";

/// JSON body accepted by [`THEME_ENDPOINT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeChange<'a> {
    /// Requested identifier, or `None` to clear the cookie.
    pub theme: Option<&'a str>,
    /// Page the change was made from.
    pub url: &'a str,
}

impl<'a> ThemeChange<'a> {
    pub fn new(theme: Option<&'a Theme>, url: &'a str) -> Self {
        Self { theme: theme.map(Theme::as_str), url }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn save_failed_message(status: u16) -> String {
    format!("theme save failed: {status}")
}

/// Persist a theme choice via `POST /api/theme`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn persist_theme(theme: Option<&Theme>, url: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = ThemeChange::new(theme, url);
        let resp = gloo_net::http::Request::post(THEME_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(save_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (theme, url);
        Err("not available on server".to_owned())
    }
}
