mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is the normal production case.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let catalog = client::state::theme::catalog();
    let state = state::AppState::new(catalog, config.cookie);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    let names: Vec<&str> = catalog.themes().iter().map(themes::Theme::as_str).collect();
    tracing::info!(port = config.port, themes = ?names, secure_cookie = config.cookie.secure, "perfect-themes listening");
    axum::serve(listener, app).await.expect("server failed");
}
