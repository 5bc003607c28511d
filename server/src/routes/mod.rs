//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page is server-rendered by Leptos and hydrated by the WASM bundle
//! under `/pkg`. Every other storefront page is a static file, served from the
//! configured static directory as the fallback. Authentication itself lives in
//! a separate backend; nothing here touches credentials.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Non-Leptos routes: health check, root redirect, and the static storefront.
pub fn base_routes(static_dir: &Path) -> Router {
    let static_service = ServeDir::new(static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(redirect_root_to_home))
        .fallback_service(static_service)
}

/// Full application: Leptos SSR login page, WASM assets, and [`base_routes`].
///
/// # Errors
///
/// Returns [`RouterError::LeptosConfig`] if the Leptos configuration cannot be
/// loaded (missing `[[workspace.metadata.leptos]]` or `LEPTOS_*` variables).
pub fn app(static_dir: &Path) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(base_routes(static_dir))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_root_to_home() -> Redirect {
    Redirect::temporary("/index.html")
}
