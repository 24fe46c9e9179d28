use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::email::Mailer;
use crate::template::render_with_status;

mod about;
mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: Arc<dyn Mailer>,
}

#[derive(askama::Template)]
#[template(path = "404.html")]
struct NotFoundTemplate;

pub async fn fallback() -> Response {
    render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/contact", post(contact::api))
        .route("/static/{*path}", get(crate::assets::static_handler))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
