//! Actor endpoints.

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
};
use kinoteka_common::AppResult;
use kinoteka_core::{ActorDetail, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use kinoteka_db::entities::movie;
use serde::{Deserialize, Serialize};

use crate::{middleware::AppState, response::ApiResponse};

/// Actor list query parameters.
#[derive(Debug, Deserialize)]
pub struct ListActorsQuery {
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

/// Compact actor shape for list responses.
#[derive(Debug, Serialize)]
pub struct ActorListItem {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

/// List actors and directors.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListActorsQuery>,
) -> AppResult<ApiResponse<Vec<ActorListItem>>> {
    let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);
    let actors = state.actor_service.list(query.page, page_size).await?;

    Ok(ApiResponse::ok(
        actors
            .into_iter()
            .map(|a| ActorListItem {
                id: a.id,
                name: a.name,
                image: a.image,
            })
            .collect(),
    ))
}

/// Movie shape nested in actor filmographies.
#[derive(Debug, Serialize)]
pub struct FilmographyItem {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub poster: Option<String>,
}

impl From<movie::Model> for FilmographyItem {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            year: m.year,
            poster: m.poster,
        }
    }
}

/// Full actor shape for detail responses.
#[derive(Debug, Serialize)]
pub struct ActorDetailResponse {
    pub id: String,
    pub name: String,
    pub age: i16,
    pub description: String,
    pub image: Option<String>,
    pub movies_acted: Vec<FilmographyItem>,
    pub movies_directed: Vec<FilmographyItem>,
}

impl From<ActorDetail> for ActorDetailResponse {
    fn from(detail: ActorDetail) -> Self {
        Self {
            id: detail.actor.id,
            name: detail.actor.name,
            age: detail.actor.age,
            description: detail.actor.description,
            image: detail.actor.image,
            movies_acted: detail.movies_acted.into_iter().map(Into::into).collect(),
            movies_directed: detail.movies_directed.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get one actor with their published filmography.
async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ActorDetailResponse>> {
    let detail = state.actor_service.detail(&id).await?;
    Ok(ApiResponse::ok(detail.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(detail))
}
