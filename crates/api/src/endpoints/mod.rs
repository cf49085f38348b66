//! API endpoints.

mod actors;
mod client;
mod movies;
mod ratings;
mod reviews;

use axum::Router;

use crate::middleware::AppState;

/// Create the versioned API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/actors", actors::router())
        .nest("/reviews", reviews::router())
        .nest("/ratings", ratings::router())
}

/// Create the router for browser-facing routes outside the API prefix.
pub fn client_router() -> Router<AppState> {
    client::router()
}
