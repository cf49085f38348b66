//! API integration tests.
//!
//! These tests drive the routers end to end over a mock database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use kinoteka_api::{client_router, middleware::AppState, router as api_router};
use kinoteka_common::config::RatingsConfig;
use kinoteka_core::{
    ActorService, CatalogService, ClientLogService, RatingService, ReviewService, UserService,
};
use kinoteka_db::repositories::{
    ActorRepository, MovieRepository, RatingRepository, ReviewRepository, UserRepository,
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use tower::ServiceExt;

fn temp_log_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("kinoteka-api-test-{name}-{}.log", std::process::id()))
}

/// Create app state over the given (mock) connection.
fn state_with(db: DatabaseConnection, log_name: &str) -> AppState {
    let db = Arc::new(db);

    let movie_repo = MovieRepository::new(Arc::clone(&db));
    let actor_repo = ActorRepository::new(Arc::clone(&db));
    let review_repo = ReviewRepository::new(Arc::clone(&db));
    let rating_repo = RatingRepository::new(Arc::clone(&db));
    let user_repo = UserRepository::new(db);

    AppState {
        catalog_service: CatalogService::new(
            movie_repo.clone(),
            rating_repo.clone(),
            review_repo.clone(),
        ),
        actor_service: ActorService::new(actor_repo),
        review_service: ReviewService::new(review_repo, movie_repo.clone()),
        rating_service: RatingService::new(rating_repo, movie_repo, RatingsConfig::default()),
        user_service: UserService::new(user_repo),
        client_log_service: ClientLogService::new(temp_log_path(log_name)),
    }
}

/// Create the router the way the server assembles it.
fn test_router(db: DatabaseConnection, log_name: &str) -> Router {
    Router::new()
        .merge(client_router())
        .nest("/api/v1", api_router())
        .with_state(state_with(db, log_name))
}

fn empty_mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

#[tokio::test]
async fn test_list_movies_empty_catalog_is_ok() {
    let db = empty_mock()
        .append_query_results([Vec::<kinoteka_db::entities::movie::Model>::new()])
        .into_connection();
    let app = test_router(db, "movies-empty");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/movies")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_movie_detail_unknown_id_is_not_found() {
    let db = empty_mock()
        .append_query_results([Vec::<kinoteka_db::entities::movie::Model>::new()])
        .into_connection();
    let app = test_router(db, "movie-missing");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/movies/nonexistent")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_actor_detail_unknown_id_is_not_found() {
    let db = empty_mock()
        .append_query_results([Vec::<kinoteka_db::entities::actor::Model>::new()])
        .into_connection();
    let app = test_router(db, "actor-missing");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/actors/nonexistent")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_review_without_auth_is_unauthorized() {
    let db = empty_mock().into_connection();
    let app = test_router(db, "review-anon");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/reviews")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"movie_id":"m1","text":"great"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_rating_star_out_of_range_is_rejected() {
    // Validation fails before any query, so no mock results are needed.
    let db = empty_mock().into_connection();
    let app = test_router(db, "rating-range");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/ratings")
                .method("POST")
                .header("Content-Type", "application/json")
                .header("x-forwarded-for", "203.0.113.7")
                .body(Body::from(r#"{"movie_id":"m1","star":11}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_logs_accepts_form_batch() {
    let db = empty_mock().into_connection();
    let app = test_router(db, "logs-ok");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/log")
                .method("POST")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from("logs=%5B%7B%22msg%22%3A%22boom%22%7D%5D"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let _ = tokio::fs::remove_file(temp_log_path("logs-ok")).await;
}

#[tokio::test]
async fn test_send_logs_missing_field_is_empty_batch() {
    let db = empty_mock().into_connection();
    let app = test_router(db, "logs-empty");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/log")
                .method("POST")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_send_logs_malformed_json_is_rejected() {
    let db = empty_mock().into_connection();
    let app = test_router(db, "logs-bad");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/log")
                .method("POST")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from("logs=not-json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_landing_page_is_html() {
    let db = empty_mock().into_connection();
    let app = test_router(db, "page");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/page")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_time_endpoint_returns_timestamp() {
    let db = empty_mock().into_connection();
    let app = test_router(db, "time");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/time")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_endpoint_returns_404() {
    let db = empty_mock().into_connection();
    let app = test_router(db, "unknown");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nonexistent/endpoint")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
