#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let port = config.port;
    tracing::info!(backend = %config.backend_url, "proxying API requests");

    let state = state::AppState::new(config);
    let app = routes::leptos_app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "fitfusion listening");
    axum::serve(listener, app).await.expect("server failed");
}
