#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    tracing_subscriber::fmt().with_ansi(config.log_ansi).init();

    let app = routes::app().expect("failed to build router");
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "melanomascan listening");
    axum::serve(listener, app).await.expect("server failed");
}
