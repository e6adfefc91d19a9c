// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::exporter::KeaCollector;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: Arc<KeaCollector>,
}

pub fn app(collector: Arc<KeaCollector>) -> Router {
    let state = AppState { collector };
    Router::new()
        .route("/", get(http::root_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/metrics", get(http::metrics_handler)) // GET /metrics
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
