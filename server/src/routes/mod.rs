//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the front-end. It renders the Leptos app via SSR,
//! serves the compiled WASM/JS/CSS bundle under `/pkg`, and answers a
//! liveness probe. Uploaded files never reach it: reading and decoding
//! happen in the browser.


use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Non-Leptos routes.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: probe, `/pkg` bundle and Leptos SSR pages.
pub fn app(leptos_options: LeptosOptions, site_root: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
