//! Site host: serves the server-rendered landing page and its static assets.

mod config;
mod error;
mod routes;

use std::net::SocketAddr;

use config::HostConfig;
use error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = HostConfig::from_env()?;
    let conf = leptos::prelude::get_configuration(None).map_err(|e| StartupError::LeptosConfig(e.to_string()))?;

    let app = routes::app(&config, conf.leptos_options);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, assets_dir = %config.assets_dir.display(), "landing site listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
