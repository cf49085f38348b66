//! Kinoteka server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use kinoteka_api::{client_router, middleware::AppState, router as api_router};
use kinoteka_common::Config;
use kinoteka_core::{
    ActorService, CatalogService, ClientLogService, RatingService, ReviewService, UserService,
};
use kinoteka_db::repositories::{
    ActorRepository, MovieRepository, RatingRepository, ReviewRepository, UserRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kinoteka=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting kinoteka server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database
    let db = kinoteka_db::init(&config).await?;
    info!("Connected to database");

    // Run migrations
    info!("Running database migrations...");
    kinoteka_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let movie_repo = MovieRepository::new(Arc::clone(&db));
    let actor_repo = ActorRepository::new(Arc::clone(&db));
    let review_repo = ReviewRepository::new(Arc::clone(&db));
    let rating_repo = RatingRepository::new(Arc::clone(&db));
    let user_repo = UserRepository::new(db);

    // Initialize services
    let catalog_service = CatalogService::new(
        movie_repo.clone(),
        rating_repo.clone(),
        review_repo.clone(),
    );
    let actor_service = ActorService::new(actor_repo);
    let review_service = ReviewService::new(review_repo, movie_repo.clone());
    let rating_service = RatingService::new(rating_repo, movie_repo, config.ratings.clone());
    let user_service = UserService::new(user_repo);
    let client_log_service = ClientLogService::new(&config.logging.client_log_path);

    // Create app state
    let state = AppState {
        catalog_service,
        actor_service,
        review_service,
        rating_service,
        user_service,
        client_log_service,
    };

    // Build router
    let app = Router::new()
        .merge(client_router())
        .nest("/api/v1", api_router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            kinoteka_api::middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
