use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Render a page template, degrading to a plain 500 if rendering fails.
pub fn render<T: Template>(template: T) -> Response {
    render_with_status(StatusCode::OK, template)
}

pub fn render_with_status<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render template: {e:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}
