//! Actor repository.

use std::sync::Arc;

use crate::entities::{
    Actor, Movie, MovieActor, MovieDirector, actor, movie, movie_actor, movie_director,
};
use kinoteka_common::{AppError, AppResult};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Actor repository for database operations.
#[derive(Clone)]
pub struct ActorRepository {
    db: Arc<DatabaseConnection>,
}

impl ActorRepository {
    /// Create a new actor repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an actor by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<actor::Model>> {
        Actor::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List actors ordered by name, paginated.
    pub async fn list(&self, page: u64, page_size: u64) -> AppResult<Vec<actor::Model>> {
        Actor::find()
            .order_by_asc(actor::Column::Name)
            .offset(page.saturating_sub(1).saturating_mul(page_size))
            .limit(page_size)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Published movies the actor appears in.
    pub async fn movies_acted(&self, actor_id: &str) -> AppResult<Vec<movie::Model>> {
        let links = MovieActor::find()
            .filter(movie_actor::Column::ActorId.eq(actor_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let movie_ids: Vec<String> = links.into_iter().map(|link| link.movie_id).collect();
        Movie::find()
            .filter(movie::Column::Id.is_in(movie_ids))
            .filter(movie::Column::Draft.eq(false))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Published movies the actor directed.
    pub async fn movies_directed(&self, actor_id: &str) -> AppResult<Vec<movie::Model>> {
        let links = MovieDirector::find()
            .filter(movie_director::Column::ActorId.eq(actor_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let movie_ids: Vec<String> = links.into_iter().map(|link| link.movie_id).collect();
        Movie::find()
            .filter(movie::Column::Id.is_in(movie_ids))
            .filter(movie::Column::Draft.eq(false))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_actor(id: &str, name: &str) -> actor::Model {
        actor::Model {
            id: id.to_string(),
            name: name.to_string(),
            age: 50,
            description: String::new(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let actor = create_test_actor("a1", "Sigourney Weaver");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[actor.clone()]])
                .into_connection(),
        );

        let repo = ActorRepository::new(db);
        let result = repo.find_by_id("a1").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().name, "Sigourney Weaver");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<actor::Model>::new()])
                .into_connection(),
        );

        let repo = ActorRepository::new(db);
        let result = repo.find_by_id("nonexistent").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list() {
        let a1 = create_test_actor("a1", "Harrison Ford");
        let a2 = create_test_actor("a2", "Sigourney Weaver");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[a1, a2]])
                .into_connection(),
        );

        let repo = ActorRepository::new(db);
        let result = repo.list(1, 10).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_list_huge_page_does_not_overflow() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<actor::Model>::new()])
                .into_connection(),
        );

        let repo = ActorRepository::new(db);
        let result = repo.list(u64::MAX, 100).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_movies_acted_no_links() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<movie_actor::Model>::new()])
                .into_connection(),
        );

        let repo = ActorRepository::new(db);
        let result = repo.movies_acted("a1").await.unwrap();

        assert!(result.is_empty());
    }
}
