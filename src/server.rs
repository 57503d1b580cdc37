//! Axum server for SSR rendering and static assets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the Leptos app on the server so the `hydrate` bundle has markup to
//! attach to, and serves the compiled WASM/JS/CSS under `/pkg`. All recipe
//! state lives in the browser, so the server holds nothing but Leptos options.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};

/// Router serving the SSR app, `/pkg` assets, and `/healthz`.
pub fn app_router(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let pkg_dir = PathBuf::from(options.site_root.as_ref()).join(options.site_pkg_dir.as_ref());
    let pkg_path = format!("/{}", options.site_pkg_dir);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .nest_service(&pkg_path, ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
