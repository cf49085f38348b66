//! API middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use kinoteka_core::{
    ActorService, CatalogService, ClientLogService, RatingService, ReviewService, UserService,
};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub actor_service: ActorService,
    pub review_service: ReviewService,
    pub rating_service: RatingService,
    pub user_service: UserService,
    pub client_log_service: ClientLogService,
}

/// Authentication middleware.
///
/// Resolves a bearer token into a user and stores it in request extensions;
/// requests without (or with an invalid) token pass through anonymous, and
/// the endpoints decide whether that is acceptable.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = req.headers().get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && let Ok(user) = state.user_service.authenticate_by_token(token).await
    {
        req.extensions_mut().insert(user);
    }

    next.run(req).await
}
