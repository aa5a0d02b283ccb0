use axum::{
    http::{StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::infra::context::AppContext;

/// Serves a page from the asset store. Any failure becomes a plain-text 404
/// naming the page.
pub async fn render(ctx: &AppContext, page: &'static str) -> Response {
    match ctx.assets.get(page).await {
        Ok(html) => ([(CONTENT_TYPE, "text/html; charset=UTF-8")], html).into_response(),
        Err(err) => {
            tracing::warn!(page, error = %err, "page failed to load");
            (StatusCode::NOT_FOUND, format!("{page} failed to load: {err}")).into_response()
        }
    }
}

pub async fn not_found(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Page not found: {}", uri.path()))
}
