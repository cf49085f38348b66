//! Movie repository.
//!
//! Every public read goes through the published (`draft = false`) gate here;
//! callers never see draft movies regardless of filters.

use std::sync::Arc;

use crate::entities::{
    Genre, Movie, MovieActor, MovieDirector, MovieGenre, actor, category, genre, movie,
    movie_actor, movie_director, movie_genre,
};
use kinoteka_common::{AppError, AppResult};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Whitelisted equality/range filters for the movie list endpoint.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Genre slug; matched through the `movie_genre` join table.
    pub genre: Option<String>,
    /// Category primary key.
    pub category_id: Option<String>,
    /// Inclusive lower bound on the release year.
    pub year_min: Option<i32>,
    /// Inclusive upper bound on the release year.
    pub year_max: Option<i32>,
}

/// Movie repository for database operations.
#[derive(Clone)]
pub struct MovieRepository {
    db: Arc<DatabaseConnection>,
}

impl MovieRepository {
    /// Create a new movie repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// List published movies matching the filter, paginated.
    ///
    /// `page` is 1-based; `page_size` is clamped by the caller.
    pub async fn list_published(
        &self,
        filter: &MovieFilter,
        page: u64,
        page_size: u64,
    ) -> AppResult<Vec<movie::Model>> {
        // Genre filtering goes through the join table: resolve the slug to
        // the matching movie ids first. An unknown slug matches nothing.
        let genre_movie_ids = match &filter.genre {
            Some(slug) => {
                let Some(genre) = Genre::find()
                    .filter(genre::Column::Slug.eq(slug))
                    .one(self.db.as_ref())
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?
                else {
                    return Ok(Vec::new());
                };

                let links = MovieGenre::find()
                    .filter(movie_genre::Column::GenreId.eq(&genre.id))
                    .all(self.db.as_ref())
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;

                if links.is_empty() {
                    return Ok(Vec::new());
                }

                Some(
                    links
                        .into_iter()
                        .map(|link| link.movie_id)
                        .collect::<Vec<_>>(),
                )
            }
            None => None,
        };

        let mut query = Movie::find().filter(movie::Column::Draft.eq(false));

        if let Some(ids) = genre_movie_ids {
            query = query.filter(movie::Column::Id.is_in(ids));
        }
        if let Some(category_id) = &filter.category_id {
            query = query.filter(movie::Column::CategoryId.eq(category_id));
        }
        if let Some(year_min) = filter.year_min {
            query = query.filter(movie::Column::Year.gte(year_min));
        }
        if let Some(year_max) = filter.year_max {
            query = query.filter(movie::Column::Year.lte(year_max));
        }

        query
            .order_by_asc(movie::Column::Title)
            .offset(page.saturating_sub(1).saturating_mul(page_size))
            .limit(page_size)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a published movie by ID. Draft movies are treated as absent.
    pub async fn find_published_by_id(&self, id: &str) -> AppResult<Option<movie::Model>> {
        Movie::find_by_id(id)
            .filter(movie::Column::Draft.eq(false))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the category of a movie, if any.
    pub async fn category_for_movie(
        &self,
        movie: &movie::Model,
    ) -> AppResult<Option<category::Model>> {
        let Some(category_id) = &movie.category_id else {
            return Ok(None);
        };

        crate::entities::Category::find_by_id(category_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the genres of a movie.
    pub async fn genres_for_movie(&self, movie_id: &str) -> AppResult<Vec<genre::Model>> {
        let links = MovieGenre::find()
            .filter(movie_genre::Column::MovieId.eq(movie_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let genre_ids: Vec<String> = links.into_iter().map(|link| link.genre_id).collect();
        Genre::find()
            .filter(genre::Column::Id.is_in(genre_ids))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the cast of a movie.
    pub async fn actors_for_movie(&self, movie_id: &str) -> AppResult<Vec<actor::Model>> {
        let links = MovieActor::find()
            .filter(movie_actor::Column::MovieId.eq(movie_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let actor_ids: Vec<String> = links.into_iter().map(|link| link.actor_id).collect();
        crate::entities::Actor::find()
            .filter(actor::Column::Id.is_in(actor_ids))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the directors of a movie.
    pub async fn directors_for_movie(&self, movie_id: &str) -> AppResult<Vec<actor::Model>> {
        let links = MovieDirector::find()
            .filter(movie_director::Column::MovieId.eq(movie_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let actor_ids: Vec<String> = links.into_iter().map(|link| link.actor_id).collect();
        crate::entities::Actor::find()
            .filter(actor::Column::Id.is_in(actor_ids))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_movie(id: &str, title: &str, year: i32) -> movie::Model {
        movie::Model {
            id: id.to_string(),
            title: title.to_string(),
            tagline: String::new(),
            description: "test".to_string(),
            poster: None,
            year,
            country: "US".to_string(),
            category_id: None,
            draft: false,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_list_published_no_filter() {
        let m1 = create_test_movie("m1", "Alien", 1979);
        let m2 = create_test_movie("m2", "Blade Runner", 1982);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[m1, m2]])
                .into_connection(),
        );

        let repo = MovieRepository::new(db);
        let result = repo
            .list_published(&MovieFilter::default(), 1, 10)
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Alien");
    }

    #[tokio::test]
    async fn test_list_published_huge_page_does_not_overflow() {
        // page is caller-supplied and unbounded; the offset arithmetic must
        // saturate instead of wrapping.
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<movie::Model>::new()])
                .into_connection(),
        );

        let repo = MovieRepository::new(db);
        let result = repo
            .list_published(&MovieFilter::default(), u64::MAX, 100)
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_list_published_unknown_genre_matches_nothing() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<genre::Model>::new()])
                .into_connection(),
        );

        let repo = MovieRepository::new(db);
        let filter = MovieFilter {
            genre: Some("no-such-genre".to_string()),
            ..MovieFilter::default()
        };
        let result = repo.list_published(&filter, 1, 10).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_find_published_by_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<movie::Model>::new()])
                .into_connection(),
        );

        let repo = MovieRepository::new(db);
        let result = repo.find_published_by_id("nonexistent").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_genres_for_movie() {
        let link = movie_genre::Model {
            movie_id: "m1".to_string(),
            genre_id: "g1".to_string(),
        };
        let genre = genre::Model {
            id: "g1".to_string(),
            name: "Horror".to_string(),
            slug: "horror".to_string(),
            description: String::new(),
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[link]])
                .append_query_results([[genre]])
                .into_connection(),
        );

        let repo = MovieRepository::new(db);
        let result = repo.genres_for_movie("m1").await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "horror");
    }

    #[tokio::test]
    async fn test_actors_for_movie_empty() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<movie_actor::Model>::new()])
                .into_connection(),
        );

        let repo = MovieRepository::new(db);
        let result = repo.actors_for_movie("m1").await.unwrap();

        assert!(result.is_empty());
    }
}
