//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the theme cookie endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. Every SSR request passes
//! through the persisted-theme middleware so the shell can render the right
//! root class on first paint.

pub mod theme;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Cookie endpoints plus health check, without the SSR frontend.
pub fn theme_routes(state: AppState) -> Router {
    Router::new()
        .route("/theme", post(theme::submit_form))
        .route("/api/theme", post(theme::submit_json))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: cookie endpoints + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .layer(from_fn_with_state(state.clone(), theme::attach_persisted_theme))
        .with_state(leptos_options.clone());

    // Hydration bundle under /pkg, everything else in the site root
    // (favicons, robots.txt) as plain files.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(theme_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
