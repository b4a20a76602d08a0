//! HTTP handlers: server-rendered pages, the navigation payload, and status.

use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use dioxus::prelude::*;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::app::pages::{document_title, page_title};
use crate::app::ServerPage;
use crate::content::NavigationData;

/// Compiled utility stylesheet, served from `<public_dir>/assets`.
pub const STYLESHEET_PATH: &str = "/assets/navbar.css";

/// `wasm-bindgen --target web` output of the `web` build, served from
/// `<public_dir>/wasm`.
pub const CLIENT_SCRIPT_PATH: &str = "/wasm/gallery_navbar.js";
pub const CLIENT_WASM_PATH: &str = "/wasm/gallery_navbar_bg.wasm";

/// Shared, read-only state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub navigation: Arc<NavigationData>,
}

impl AppState {
    pub fn new(navigation: NavigationData) -> Self {
        Self {
            navigation: Arc::new(navigation),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub version: &'static str,
    pub git_sha: &'static str,
}

/// GET /status - Build info
pub async fn status_handler() -> impl IntoResponse {
    Json(StatusResponse {
        version: env!("NAVBAR_VERSION"),
        git_sha: env!("NAVBAR_GIT_SHA"),
    })
}

/// GET /api/navigation - Content the client needs to hydrate the navbar
pub async fn navigation_handler(State(state): State<AppState>) -> Json<NavigationData> {
    Json(NavigationData::clone(&state.navigation))
}

/// Any other GET - render the page for this path with the navbar
pub async fn page_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    tracing::debug!("Rendering page for {}", uri.path());
    Html(render_page(&state.navigation, uri.path()))
}

/// Render a complete HTML document for `path`.
///
/// The body holds the server-rendered page inside `#main`, where the web
/// client mounts and takes over the hover handlers once its module loads.
pub fn render_page(navigation: &NavigationData, path: &str) -> String {
    let body = dioxus::ssr::render_element(rsx! {
        ServerPage { data: navigation.clone(), path: path.to_string() }
    });
    let title = document_title(&page_title(path));
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="{STYLESHEET_PATH}">
</head>
<body class="bg-white">
    <div id="main">{body}</div>
    <script type="module">
        import init from "{CLIENT_SCRIPT_PATH}";
        init({{ module_or_path: "{CLIENT_WASM_PATH}" }});
    </script>
</body>
</html>
"#
    )
}

/// Build the full router with middleware.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/api/navigation", get(navigation_handler))
        // Overlay artwork, stylesheet and the web client bundle
        .nest_service("/images", ServeDir::new(public_dir.join("images")))
        .nest_service("/assets", ServeDir::new(public_dir.join("assets")))
        .nest_service("/wasm", ServeDir::new(public_dir.join("wasm")))
        .route("/", get(page_handler))
        .fallback(page_handler)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
