// GET handlers: banner, version, metrics

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::AppState;
use crate::exporter::CONTENT_TYPE;
use crate::version::{DESCRIPTION, NAME, VERSION};

/// GET /: plain-text banner pointing at the scrape endpoint.
pub(super) async fn root_handler() -> impl IntoResponse {
    format!("{NAME} {VERSION}: {DESCRIPTION}\nMetrics are served at /metrics\n")
}

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /metrics: polls Kea once. A failed poll answers 503 and exposes nothing.
pub(super) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.collector.scrape().await {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), operation = "scrape", "Kea poll failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                format!("Kea poll failed: {e:#}\n"),
            )
        }
    }
}
