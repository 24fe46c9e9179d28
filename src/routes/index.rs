use axum::response::Response;
use brochure_contact::ServiceType;
use strum::VariantArray;

use crate::template::render;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub services: &'static [ServiceType],
}

pub async fn page() -> Response {
    render(IndexTemplate {
        services: ServiceType::VARIANTS,
    })
}
