//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR app, its compiled WASM/JS bundle and a health check
//! under a single Axum router. Paths outside the route table fall through to
//! the Leptos file-and-error handler, which renders the not-found page with a
//! 404 status. Page paths with a trailing slash are redirected to the
//! canonical slash-free path first.

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::http::{StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use leptos::prelude::LeptosOptions;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use portal_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full host router: SSR pages, bundle assets, health check.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "registering leptos routes");

    let pkg_dir = options.site_pkg_dir.to_string();
    let pkg_path = PathBuf::from(options.site_root.as_ref()).join(&pkg_dir);

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .fallback(file_and_error_handler(shell))
        .with_state(options);

    health_routes()
        .nest_service(&format!("/{pkg_dir}"), ServeDir::new(pkg_path))
        .merge(leptos_router)
        .layer(middleware::from_fn(redirect_trailing_slash))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Liveness endpoint, independent of Leptos configuration.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn redirect_trailing_slash(req: Request, next: Next) -> Response {
    match canonical_path(req.uri()) {
        Some(target) => Redirect::permanent(&target).into_response(),
        None => next.run(req).await,
    }
}

/// Slash-free form of `uri` when its path ends in `/`, keeping the query.
///
/// Returns `None` for `/` itself and for paths that would collapse into a
/// protocol-relative `//host` (or `/\host`) location.
pub(crate) fn canonical_path(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p if p.starts_with("//") || p.starts_with("/\\") => return None,
        p => p,
    };
    Some(match uri.query() {
        Some(query) => format!("{trimmed}?{query}"),
        None => trimmed.to_owned(),
    })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
