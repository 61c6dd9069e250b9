//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each binary gets one Axum router: Leptos SSR routes for its portal, the
//! compiled client assets under `/pkg`, and `/healthz`. The student router
//! also carries the tutor chat API and the static catalog under `/data`.

pub mod chat;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{AdminConfig, StudentConfig};

fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

fn leptos_options() -> Result<LeptosOptions, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(conf.leptos_options)
}

fn pkg_dir(options: &LeptosOptions) -> PathBuf {
    PathBuf::from(options.site_root.as_ref()).join(options.site_pkg_dir.as_ref())
}

/// Admin console: SSR with the backend origin injected into every page.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn admin_app(config: &AdminConfig) -> Result<Router, String> {
    let options = leptos_options()?;
    let routes = generate_route_list(admin::app::App);
    let backend_url = config.backend_url.clone();

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || admin::app::shell(opts.clone(), backend_url.clone())
        })
        .with_state(options.clone());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir(&options)))
        .layer(cors())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Student portal: SSR, tutor chat, and the course catalog.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn student_app(config: &StudentConfig) -> Result<Router, String> {
    let options = leptos_options()?;
    let routes = generate_route_list(student::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || student::app::shell(opts.clone())
        })
        .with_state(options.clone());

    let chat_state = chat::ChatState { reply_delay: config.chat_reply_delay };
    let api = Router::new()
        .route("/api/chat", post(chat::chat).fallback(chat::method_not_allowed))
        .route("/healthz", get(healthz))
        .with_state(chat_state);

    Ok(api
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir(&options)))
        .nest_service("/data", ServeDir::new(&config.catalog_dir))
        .layer(cors())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
