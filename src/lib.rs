pub mod assets;
pub mod config;
pub mod email;
pub mod error;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

/// Create the app router with all routes configured.
///
/// Useful for integration testing without starting the full server: tests
/// pass a stub [`email::Mailer`] and drive the router directly.
pub fn create_app(
    config: config::Config,
    mailer: std::sync::Arc<dyn email::Mailer>,
) -> axum::Router {
    routes::router(AppState { config, mailer })
}
