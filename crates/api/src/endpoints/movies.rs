//! Movie endpoints.

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
};
use kinoteka_common::{AppError, AppResult};
use kinoteka_core::{DEFAULT_PAGE_SIZE, MovieDetail, ReviewNode};
use kinoteka_db::{entities::movie, repositories::MovieFilter};
use serde::{Deserialize, Serialize};

use crate::{
    extractors::ClientIp,
    middleware::AppState,
    response::ApiResponse,
};

/// Movie list query parameters.
#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    pub genre: Option<String>,
    pub category_id: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

const fn default_page() -> u64 {
    1
}

const fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// Compact movie shape for list responses.
#[derive(Debug, Serialize)]
pub struct MovieListItem {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub poster: Option<String>,
    pub year: i32,
    pub category_id: Option<String>,
    /// 1 when the caller's address has rated this movie, else 0.
    pub rating_user: u64,
    /// Mean star value, absent when the movie has no ratings.
    pub middle_star: Option<f64>,
}

/// List published movies.
async fn list(
    ClientIp(client_ip): ClientIp,
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> AppResult<ApiResponse<Vec<MovieListItem>>> {
    let filter = MovieFilter {
        genre: query.genre,
        category_id: query.category_id,
        year_min: query.year_min,
        year_max: query.year_max,
    };

    let movies = state
        .catalog_service
        .list(&filter, query.page, query.page_size, &client_ip)
        .await?;

    Ok(ApiResponse::ok(
        movies
            .into_iter()
            .map(|(m, stats)| MovieListItem {
                id: m.id,
                title: m.title,
                tagline: m.tagline,
                poster: m.poster,
                year: m.year,
                category_id: m.category_id,
                rating_user: stats.rating_user,
                middle_star: stats.middle_star,
            })
            .collect(),
    ))
}

/// Named reference shape (category, genre, actor) nested in detail responses.
#[derive(Debug, Serialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

/// Actor shape nested in detail responses.
#[derive(Debug, Serialize)]
pub struct ActorRef {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

/// Review with its reply subtree.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub author_name: String,
    pub text: String,
    pub created_at: String,
    pub replies: Vec<ReviewResponse>,
}

impl From<ReviewNode> for ReviewResponse {
    fn from(node: ReviewNode) -> Self {
        Self {
            id: node.review.id,
            author_name: node.review.author_name,
            text: node.review.text,
            created_at: node.review.created_at.to_rfc3339(),
            replies: node.replies.into_iter().map(Into::into).collect(),
        }
    }
}

/// Full movie shape for detail responses.
#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: Option<String>,
    pub year: i32,
    pub country: String,
    pub category: Option<NamedRef>,
    pub genres: Vec<NamedRef>,
    pub actors: Vec<ActorRef>,
    pub directors: Vec<ActorRef>,
    pub reviews: Vec<ReviewResponse>,
    pub rating_user: u64,
    pub middle_star: Option<f64>,
}

impl From<MovieDetail> for MovieDetailResponse {
    fn from(detail: MovieDetail) -> Self {
        let movie::Model {
            id,
            title,
            tagline,
            description,
            poster,
            year,
            country,
            ..
        } = detail.movie;

        Self {
            id,
            title,
            tagline,
            description,
            poster,
            year,
            country,
            category: detail.category.map(|c| NamedRef {
                id: c.id,
                name: c.name,
            }),
            genres: detail
                .genres
                .into_iter()
                .map(|g| NamedRef {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            actors: detail
                .actors
                .into_iter()
                .map(|a| ActorRef {
                    id: a.id,
                    name: a.name,
                    image: a.image,
                })
                .collect(),
            directors: detail
                .directors
                .into_iter()
                .map(|a| ActorRef {
                    id: a.id,
                    name: a.name,
                    image: a.image,
                })
                .collect(),
            reviews: detail.reviews.into_iter().map(Into::into).collect(),
            rating_user: detail.stats.rating_user,
            middle_star: detail.stats.middle_star,
        }
    }
}

/// Get one published movie with relations, reviews and rating aggregates.
async fn detail(
    ClientIp(client_ip): ClientIp,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<MovieDetailResponse>> {
    let detail = state
        .catalog_service
        .detail(&id, &client_ip)
        .await?
        .ok_or(AppError::MovieNotFound(id))?;

    Ok(ApiResponse::ok(detail.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(detail))
}
