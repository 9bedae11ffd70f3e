use crate::transport::http::handlers::{health, index, verify};
use axum::routing::get;
use axum::Router;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/verificar", get(verify::verify_handler))
        .route("/verify/:codigo", get(verify::legacy_verify_handler))
        .route("/health", get(health::healthcheck_handler))
        .with_state(app_state)
}
