//! Theme cookie routes: form action, fetch endpoint, and SSR middleware.
//!
//! The cookie value is an opaque string to everything here except
//! [`ThemeCatalog::coerce`], which is the only validator for values coming
//! from cookies and form fields.

use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{Form, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use themes::{PersistedTheme, THEME_COOKIE, Theme, ThemeCatalog};
use time::Duration;

use crate::config::CookieSettings;
use crate::state::AppState;

/// Body of a theme change, posted as a form or as JSON.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeChange {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Return path for a no-JS submission. Only same-site absolute paths are
/// honored; anything else goes to `/`.
///
/// Browsers drop tab and newline characters from URLs, so any control
/// character is rejected before `/\t/host` can turn into `//host`.
pub(crate) fn safe_return_path(url: Option<&str>) -> &str {
    match url {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(|c| c.is_control()) =>
        {
            path
        }
        _ => "/",
    }
}

/// Cookie storing `theme`, or an expired cookie clearing it when unset.
pub(crate) fn theme_cookie(theme: Option<&Theme>, settings: CookieSettings) -> Cookie<'static> {
    let value = theme.map(Theme::to_string).unwrap_or_default();
    let max_age = if theme.is_some() { settings.max_age } else { Duration::ZERO };
    Cookie::build((THEME_COOKIE, value))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(settings.secure)
        .max_age(max_age)
        .build()
}

/// Coerced theme cookie from a request's jar.
pub(crate) fn persisted_from_jar(jar: &CookieJar, catalog: &ThemeCatalog) -> Option<Theme> {
    catalog.coerce(jar.get(THEME_COOKIE).map(Cookie::value))
}

fn store_choice(state: &AppState, jar: CookieJar, raw: Option<&str>) -> CookieJar {
    let theme = state.catalog.coerce(raw);
    if raw.is_some_and(|r| !r.is_empty()) && theme.is_none() {
        tracing::debug!(requested = raw.unwrap_or_default(), "unrecognized theme treated as unset");
    }
    tracing::info!(theme = theme.as_ref().map_or("unset", Theme::as_str), "theme preference stored");
    jar.add(theme_cookie(theme.as_ref(), state.cookie))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /theme`: native form action. Sets the cookie and redirects back.
pub async fn submit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<ThemeChange>, FormRejection>,
) -> Response {
    let change = form.map(|Form(c)| c).unwrap_or_else(|rejection| {
        tracing::warn!(error = %rejection, "malformed theme form");
        ThemeChange::default()
    });
    let jar = store_choice(&state, jar, change.theme.as_deref());
    let target = safe_return_path(change.url.as_deref()).to_owned();
    (jar, Redirect::to(&target)).into_response()
}

/// `POST /api/theme`: fetch endpoint. Sets the cookie and answers 204.
pub async fn submit_json(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<ThemeChange>, JsonRejection>,
) -> Response {
    let change = body.map(|Json(c)| c).unwrap_or_else(|rejection| {
        tracing::warn!(error = %rejection, "malformed theme request");
        ThemeChange::default()
    });
    let jar = store_choice(&state, jar, change.theme.as_deref());
    (jar, StatusCode::NO_CONTENT).into_response()
}

/// Middleware: attach the coerced cookie value as a [`PersistedTheme`]
/// request extension for the SSR renderer.
pub async fn attach_persisted_theme(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let persisted = persisted_from_jar(&jar, state.catalog);
    req.extensions_mut().insert(PersistedTheme(persisted));
    next.run(req).await
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
