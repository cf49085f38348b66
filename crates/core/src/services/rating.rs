//! Rating service.

use chrono::Utc;
use kinoteka_common::{
    AppError, AppResult, IdGenerator,
    config::{DuplicateRatingPolicy, RatingsConfig},
};
use kinoteka_db::{
    entities::rating,
    repositories::{MovieRepository, RatingRepository},
};
use sea_orm::Set;

/// Allowed star values.
pub const STAR_MIN: i16 = 1;
/// Allowed star values.
pub const STAR_MAX: i16 = 10;

/// Input for a new rating submission.
#[derive(Debug, Clone)]
pub struct NewRating {
    /// Movie being rated.
    pub movie_id: String,
    /// Star value, 1 through 10.
    pub star: i16,
    /// Resolved client identity; stamped by the server, never client-supplied.
    pub client_ip: String,
    /// Whether the caller presented a valid bearer token.
    pub authenticated: bool,
}

/// Rating service for business logic.
#[derive(Clone)]
pub struct RatingService {
    rating_repo: RatingRepository,
    movie_repo: MovieRepository,
    config: RatingsConfig,
    id_gen: IdGenerator,
}

impl RatingService {
    /// Create a new rating service.
    #[must_use]
    pub fn new(
        rating_repo: RatingRepository,
        movie_repo: MovieRepository,
        config: RatingsConfig,
    ) -> Self {
        Self {
            rating_repo,
            movie_repo,
            config,
            id_gen: IdGenerator::new(),
        }
    }

    /// Validate and persist a rating, stamped with the client identity.
    ///
    /// Resubmission from the same identity follows the configured duplicate
    /// policy: keep inserting rows, reject with a conflict, or overwrite the
    /// existing star value.
    pub async fn submit(&self, new: NewRating) -> AppResult<rating::Model> {
        if !self.config.allow_anonymous && !new.authenticated {
            return Err(AppError::Unauthorized);
        }

        if !(STAR_MIN..=STAR_MAX).contains(&new.star) {
            return Err(AppError::Validation(format!(
                "star must be between {STAR_MIN} and {STAR_MAX}, got {}",
                new.star
            )));
        }

        if self
            .movie_repo
            .find_published_by_id(&new.movie_id)
            .await?
            .is_none()
        {
            return Err(AppError::MovieNotFound(new.movie_id));
        }

        let existing = match self.config.on_duplicate {
            DuplicateRatingPolicy::Allow => None,
            DuplicateRatingPolicy::Reject | DuplicateRatingPolicy::Replace => {
                self.rating_repo
                    .find_by_movie_and_ip(&new.movie_id, &new.client_ip)
                    .await?
            }
        };

        if let Some(existing) = existing {
            return match self.config.on_duplicate {
                DuplicateRatingPolicy::Reject => Err(AppError::Conflict(format!(
                    "movie {} already rated from this address",
                    new.movie_id
                ))),
                _ => {
                    let updated = self.rating_repo.update_star(existing, new.star).await?;
                    tracing::debug!(rating_id = %updated.id, star = updated.star, "Rating replaced");
                    Ok(updated)
                }
            };
        }

        let model = rating::ActiveModel {
            id: Set(self.id_gen.generate()),
            movie_id: Set(new.movie_id),
            ip: Set(new.client_ip),
            star: Set(new.star),
            created_at: Set(Utc::now().into()),
        };

        let created = self.rating_repo.create(model).await?;
        tracing::debug!(rating_id = %created.id, movie_id = %created.movie_id, "Rating created");
        Ok(created)
    }
}
