use axum::response::Response;

use crate::template::render;

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

pub async fn page() -> Response {
    render(AboutTemplate)
}
