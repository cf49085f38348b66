//! Actor service.

use kinoteka_common::{AppError, AppResult};
use kinoteka_db::{
    entities::{actor, movie},
    repositories::ActorRepository,
};

/// Full detail shape for one actor or director.
#[derive(Debug, Clone)]
pub struct ActorDetail {
    /// The actor row.
    pub actor: actor::Model,
    /// Published movies they appear in.
    pub movies_acted: Vec<movie::Model>,
    /// Published movies they directed.
    pub movies_directed: Vec<movie::Model>,
}

/// Actor service for read paths.
#[derive(Clone)]
pub struct ActorService {
    actor_repo: ActorRepository,
}

impl ActorService {
    /// Create a new actor service.
    #[must_use]
    pub const fn new(actor_repo: ActorRepository) -> Self {
        Self { actor_repo }
    }

    /// List actors, paginated.
    pub async fn list(&self, page: u64, page_size: u64) -> AppResult<Vec<actor::Model>> {
        self.actor_repo.list(page.max(1), page_size).await
    }

    /// Full detail of one actor, including filmography.
    pub async fn detail(&self, id: &str) -> AppResult<ActorDetail> {
        let actor = self
            .actor_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::ActorNotFound(id.to_string()))?;

        let movies_acted = self.actor_repo.movies_acted(&actor.id).await?;
        let movies_directed = self.actor_repo.movies_directed(&actor.id).await?;

        Ok(ActorDetail {
            actor,
            movies_acted,
            movies_directed,
        })
    }
}
