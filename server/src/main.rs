mod config;
mod error;
mod routes;

use error::ServerError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app(routes::leptos_options()?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.bind_addr, source })?;

    tracing::info!(addr = %config.bind_addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
