//! Review endpoints.

use axum::{Json, Router, extract::State, routing::post};
use kinoteka_common::AppResult;
use kinoteka_core::NewReview;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{extractors::AuthUser, middleware::AppState, response::ApiResponse};

/// Create review request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub movie_id: String,
    /// Display name; defaults to the caller's username.
    #[validate(length(max = 100))]
    pub author_name: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub text: String,
    pub parent_id: Option<String>,
}

/// Created review response.
#[derive(Debug, Serialize)]
pub struct ReviewCreatedResponse {
    pub id: String,
    pub movie_id: String,
    pub author_name: String,
    pub text: String,
    pub parent_id: Option<String>,
    pub created_at: String,
}

/// Submit a review on a published movie.
async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<ApiResponse<ReviewCreatedResponse>> {
    req.validate()?;

    let author_name = req
        .author_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| user.username.clone());

    let review = state
        .review_service
        .submit(NewReview {
            movie_id: req.movie_id,
            author_name,
            text: req.text,
            parent_id: req.parent_id,
        })
        .await?;

    Ok(ApiResponse::created(ReviewCreatedResponse {
        id: review.id,
        movie_id: review.movie_id,
        author_name: review.author_name,
        text: review.text,
        parent_id: review.parent_id,
        created_at: review.created_at.to_rfc3339(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create))
}
