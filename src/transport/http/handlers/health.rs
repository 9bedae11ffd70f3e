use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

/// Liveness plus snapshot diagnostics: how many rows are cached and when the
/// last fetch succeeded. Reports on the cache only; never triggers a fetch.
pub async fn healthcheck_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let snapshot = state.data_source.cached().await;
    Json(serde_json::json!({
        "status": "ok",
        "cached_rows": snapshot.rows.len(),
        "last_fetch": snapshot.fetched_at.map(|t| t.to_rfc3339()),
    }))
}
