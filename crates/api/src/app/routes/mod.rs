use axum::Router;

pub mod footer;
pub mod system;

/// Router for all endpoints that require an acting user.
pub fn router() -> Router {
    Router::new().nest("/sales", footer::router())
}
