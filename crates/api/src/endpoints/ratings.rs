//! Rating endpoints.

use axum::{Json, Router, extract::State, routing::post};
use kinoteka_common::AppResult;
use kinoteka_core::NewRating;
use serde::{Deserialize, Serialize};

use crate::{
    extractors::{ClientIp, MaybeAuthUser},
    middleware::AppState,
    response::ApiResponse,
};

/// Create rating request.
#[derive(Debug, Deserialize)]
pub struct CreateRatingRequest {
    pub movie_id: String,
    pub star: i16,
}

/// Created rating response.
#[derive(Debug, Serialize)]
pub struct RatingCreatedResponse {
    pub id: String,
    pub movie_id: String,
    pub star: i16,
    pub created_at: String,
}

/// Submit a star rating, deduplicated by the caller's resolved address.
async fn create(
    MaybeAuthUser(user): MaybeAuthUser,
    ClientIp(client_ip): ClientIp,
    State(state): State<AppState>,
    Json(req): Json<CreateRatingRequest>,
) -> AppResult<ApiResponse<RatingCreatedResponse>> {
    let rating = state
        .rating_service
        .submit(NewRating {
            movie_id: req.movie_id,
            star: req.star,
            client_ip,
            authenticated: user.is_some(),
        })
        .await?;

    Ok(ApiResponse::created(RatingCreatedResponse {
        id: rating.id,
        movie_id: rating.movie_id,
        star: rating.star,
        created_at: rating.created_at.to_rfc3339(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create))
}
