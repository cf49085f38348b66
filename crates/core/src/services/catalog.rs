//! Catalog service: published-movie listing and detail.

use std::collections::HashMap;

use kinoteka_common::AppResult;
use kinoteka_db::{
    entities::{actor, category, genre, movie},
    repositories::{MovieFilter, MovieRepository, RatingRepository, ReviewRepository},
};

use crate::rating_stats::{self, RatingStats};
use crate::services::review::{ReviewNode, build_thread_tree};

/// Default number of movies per list page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Upper bound on the caller-supplied page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Full detail shape for one published movie.
#[derive(Debug, Clone)]
pub struct MovieDetail {
    /// The movie row.
    pub movie: movie::Model,
    /// Its category, if any.
    pub category: Option<category::Model>,
    /// Genres through the join table.
    pub genres: Vec<genre::Model>,
    /// Cast.
    pub actors: Vec<actor::Model>,
    /// Directors (same entity type as the cast).
    pub directors: Vec<actor::Model>,
    /// Reviews as reply trees, oldest first.
    pub reviews: Vec<ReviewNode>,
    /// Rating aggregate for the current caller.
    pub stats: RatingStats,
}

/// Catalog service for read paths.
#[derive(Clone)]
pub struct CatalogService {
    movie_repo: MovieRepository,
    rating_repo: RatingRepository,
    review_repo: ReviewRepository,
}

impl CatalogService {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(
        movie_repo: MovieRepository,
        rating_repo: RatingRepository,
        review_repo: ReviewRepository,
    ) -> Self {
        Self {
            movie_repo,
            rating_repo,
            review_repo,
        }
    }

    /// List published movies with their per-caller rating aggregates.
    ///
    /// Ratings for the whole page are fetched in one query and aggregated
    /// in-process; movies without ratings get the default (empty) stats.
    pub async fn list(
        &self,
        filter: &MovieFilter,
        page: u64,
        page_size: u64,
        client_ip: &str,
    ) -> AppResult<Vec<(movie::Model, RatingStats)>> {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

        let movies = self.movie_repo.list_published(filter, page, page_size).await?;

        let movie_ids: Vec<String> = movies.iter().map(|m| m.id.clone()).collect();
        let ratings = self.rating_repo.find_by_movie_ids(&movie_ids).await?;
        let mut stats: HashMap<String, RatingStats> = rating_stats::aggregate(&ratings, client_ip);

        Ok(movies
            .into_iter()
            .map(|movie| {
                let movie_stats = stats.remove(&movie.id).unwrap_or_default();
                (movie, movie_stats)
            })
            .collect())
    }

    /// Full detail of one published movie.
    ///
    /// Returns `Ok(None)` for unknown or draft ids; the endpoint maps that
    /// to a not-found error.
    pub async fn detail(&self, id: &str, client_ip: &str) -> AppResult<Option<MovieDetail>> {
        let Some(movie) = self.movie_repo.find_published_by_id(id).await? else {
            return Ok(None);
        };

        let category = self.movie_repo.category_for_movie(&movie).await?;
        let genres = self.movie_repo.genres_for_movie(&movie.id).await?;
        let actors = self.movie_repo.actors_for_movie(&movie.id).await?;
        let directors = self.movie_repo.directors_for_movie(&movie.id).await?;
        let reviews = build_thread_tree(self.review_repo.find_by_movie(&movie.id).await?);

        let ratings = self
            .rating_repo
            .find_by_movie_ids(std::slice::from_ref(&movie.id))
            .await?;
        let stats = rating_stats::aggregate(&ratings, client_ip)
            .remove(&movie.id)
            .unwrap_or_default();

        Ok(Some(MovieDetail {
            movie,
            category,
            genres,
            actors,
            directors,
            reviews,
            stats,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kinoteka_db::entities::{movie, rating};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn test_movie(id: &str, title: &str) -> movie::Model {
        movie::Model {
            id: id.to_string(),
            title: title.to_string(),
            tagline: String::new(),
            description: String::new(),
            poster: None,
            year: 1979,
            country: "US".to_string(),
            category_id: None,
            draft: false,
            created_at: Utc::now().into(),
        }
    }

    fn test_rating(id: &str, movie_id: &str, ip: &str, star: i16) -> rating::Model {
        rating::Model {
            id: id.to_string(),
            movie_id: movie_id.to_string(),
            ip: ip.to_string(),
            star,
            created_at: Utc::now().into(),
        }
    }

    fn service_with(db: Arc<sea_orm::DatabaseConnection>) -> CatalogService {
        CatalogService::new(
            MovieRepository::new(Arc::clone(&db)),
            RatingRepository::new(Arc::clone(&db)),
            ReviewRepository::new(db),
        )
    }

    #[tokio::test]
    async fn test_list_annotates_stats_per_caller() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_movie("m1", "Alien"), test_movie("m2", "Blade Runner")]])
                .append_query_results([[
                    test_rating("r1", "m1", "203.0.113.7", 8),
                    test_rating("r2", "m1", "198.51.100.1", 4),
                ]])
                .into_connection(),
        );
        let service = service_with(db);

        let result = service
            .list(&MovieFilter::default(), 1, 10, "203.0.113.7")
            .await
            .unwrap();

        assert_eq!(result.len(), 2);

        let (alien, alien_stats) = &result[0];
        assert_eq!(alien.id, "m1");
        assert_eq!(alien_stats.middle_star, Some(6.0));
        assert_eq!(alien_stats.rating_user, 1);

        // Unrated movie: no mean, no user rating, no crash.
        let (_, br_stats) = &result[1];
        assert_eq!(br_stats.middle_star, None);
        assert_eq!(br_stats.rating_user, 0);
    }

    #[tokio::test]
    async fn test_detail_unknown_id_is_none() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<movie::Model>::new()])
                .into_connection(),
        );
        let service = service_with(db);

        let result = service.detail("nonexistent", "").await.unwrap();
        assert!(result.is_none());
    }
}
