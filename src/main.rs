//! SSR host for the postboard client.
//!
//! Renders the Leptos app, serves the hydration bundle from `/pkg` and
//! answers `/healthz`. The blog API itself is a separate service; the
//! browser calls it directly.

#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("server io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    match &config.api_url {
        Some(url) => tracing::info!(api_url = %url, "client API base URL"),
        None => tracing::info!("client API base URL not set; browser bundle uses its built-in default"),
    }

    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "postboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
