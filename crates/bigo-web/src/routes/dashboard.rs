//! Health check route handler.
//!
//! Serves a static page for uptime monitors.

use axum::response::{Html, IntoResponse};

const HEALTH_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the uptime check page.
pub async fn index() -> impl IntoResponse {
    Html(HEALTH_HTML)
}
