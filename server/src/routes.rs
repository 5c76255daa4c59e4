//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR page at `/`, the compiled WASM/JS/CSS
//! bundle under `/pkg`, a health probe, and everything else straight from the
//! assets directory (stylesheets, icons, an optional same-origin `index.xml`).
//! The host never proxies the feed and keeps no per-request state.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Routes that exist regardless of the site content.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Health probe plus static assets as the fallback.
pub fn site_routes(config: &HostConfig) -> Router {
    let assets = ServeDir::new(&config.assets_dir).append_index_html_on_directories(true);
    base_routes().fallback_service(assets)
}

/// Full host router: SSR page, `/pkg` bundle, health probe, static assets.
pub fn app(config: &HostConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    with_layers(
        site_routes(config)
            .merge(leptos_router)
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))),
    )
}

/// gzip responses and trace every request.
fn with_layers(router: Router) -> Router {
    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
