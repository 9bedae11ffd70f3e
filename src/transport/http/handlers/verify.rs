use crate::domain::resolve;
use crate::rendering::render_page;
use crate::transport::http::types::AppState;
use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct VerifyParams {
    #[serde(default)]
    pub codigo: String,
}

/// Looks up a code and renders the result page.
///
/// Every response is 200 with an HTML body: result panel on a match,
/// not-found panel otherwise, and the plain form when the code is empty.
pub async fn verify_handler(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Html<String> {
    let codigo = params.codigo.trim().to_string();
    if codigo.is_empty() {
        return Html(render_page(None, Some("")));
    }

    let snapshot = state.data_source.fetch().await;
    let verdict = resolve::resolve(&codigo, &snapshot.rows);
    if verdict.matched {
        Html(render_page(Some(&verdict), Some(&codigo)))
    } else {
        Html(render_page(None, Some(&codigo)))
    }
}

/// Older printed documents carry the path-parameter URL; map it onto the
/// query form.
pub async fn legacy_verify_handler(Path(codigo): Path<String>) -> Redirect {
    Redirect::to(&format!(
        "/verificar?codigo={}",
        urlencoding::encode(&codigo)
    ))
}
