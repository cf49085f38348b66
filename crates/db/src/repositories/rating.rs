//! Rating repository.

use std::sync::Arc;

use crate::entities::{Rating, rating};
use kinoteka_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

/// Rating repository for database operations.
#[derive(Clone)]
pub struct RatingRepository {
    db: Arc<DatabaseConnection>,
}

impl RatingRepository {
    /// Create a new rating repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a rating by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<rating::Model>> {
        Rating::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All ratings of the given movies, fetched in one query.
    ///
    /// Used by the read-time aggregator; one call covers a whole page of
    /// movies.
    pub async fn find_by_movie_ids(&self, movie_ids: &[String]) -> AppResult<Vec<rating::Model>> {
        if movie_ids.is_empty() {
            return Ok(Vec::new());
        }

        Rating::find()
            .filter(rating::Column::MovieId.is_in(movie_ids.iter().cloned()))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find an existing rating from the given client identity for a movie.
    pub async fn find_by_movie_and_ip(
        &self,
        movie_id: &str,
        ip: &str,
    ) -> AppResult<Option<rating::Model>> {
        Rating::find()
            .filter(rating::Column::MovieId.eq(movie_id))
            .filter(rating::Column::Ip.eq(ip))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new rating.
    pub async fn create(&self, model: rating::ActiveModel) -> AppResult<rating::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Overwrite the star value of an existing rating.
    pub async fn update_star(&self, existing: rating::Model, star: i16) -> AppResult<rating::Model> {
        let mut active: rating::ActiveModel = existing.into();
        active.star = Set(star);
        active
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
