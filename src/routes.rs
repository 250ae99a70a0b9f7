//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves everything: Leptos SSR for the site pages, the
//! hydrate bundle under `/pkg`, `/healthz`, and the static assets directory
//! (dataset, scripts, images) for any other path. A path that is neither a
//! page nor a file renders the site's not-found page with a 404 status.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::extract::{Request, State};
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::ServerError;

/// Health check plus the static asset fallback.
///
/// Assets win over the not-found page; only a miss in `assets_dir` renders
/// the app shell.
pub fn static_routes(assets_dir: &Path, leptos_options: LeptosOptions) -> Router {
    let not_found = render_not_found.with_state(leptos_options);
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(assets_dir).not_found_service(not_found))
}

/// Full site: Leptos SSR routes, `/pkg`, and `static_routes`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &SiteConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join(leptos_options.site_pkg_dir.as_ref())))
        .merge(static_routes(&config.assets_dir, leptos_options))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// SSR the app for an unmatched path. The router falls back to the
/// not-found page; `ServeDir` sets the 404 status.
async fn render_not_found(State(options): State<LeptosOptions>, req: Request) -> Response {
    tracing::debug!(path = %req.uri().path(), "no page or asset, rendering not-found");
    let render = leptos_axum::render_app_to_stream(move || client::app::shell(options.clone()));
    render(req).await.into_response()
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
