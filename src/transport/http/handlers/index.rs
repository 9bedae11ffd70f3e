use crate::rendering::render_page;
use axum::response::Html;

/// The empty search form.
pub async fn index_handler() -> Html<String> {
    Html(render_page(None, None))
}
