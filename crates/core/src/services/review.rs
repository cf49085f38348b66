//! Review service.

use chrono::Utc;
use kinoteka_common::{AppError, AppResult, IdGenerator};
use kinoteka_db::{
    entities::review,
    repositories::{MovieRepository, ReviewRepository},
};
use sea_orm::Set;

/// Input for a new review.
#[derive(Debug, Clone)]
pub struct NewReview {
    /// Movie being reviewed.
    pub movie_id: String,
    /// Display name of the author.
    pub author_name: String,
    /// Review body.
    pub text: String,
    /// Review being replied to, if any.
    pub parent_id: Option<String>,
}

/// One review with its reply subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewNode {
    /// The review itself.
    pub review: review::Model,
    /// Direct replies, oldest first.
    pub replies: Vec<ReviewNode>,
}

/// Assemble flat review rows (oldest first) into reply trees.
///
/// Rows whose parent is missing from the input are treated as top-level;
/// this keeps the detail endpoint total even on inconsistent data.
#[must_use]
pub fn build_thread_tree(reviews: Vec<review::Model>) -> Vec<ReviewNode> {
    use std::collections::HashMap;

    let known_ids: std::collections::HashSet<String> =
        reviews.iter().map(|r| r.id.clone()).collect();

    let mut children: HashMap<String, Vec<review::Model>> = HashMap::new();
    let mut roots = Vec::new();

    for review in reviews {
        match &review.parent_id {
            Some(parent) if known_ids.contains(parent) => {
                children.entry(parent.clone()).or_default().push(review);
            }
            _ => roots.push(review),
        }
    }

    fn attach(
        review: review::Model,
        children: &mut std::collections::HashMap<String, Vec<review::Model>>,
    ) -> ReviewNode {
        let replies = children
            .remove(&review.id)
            .unwrap_or_default()
            .into_iter()
            .map(|child| attach(child, children))
            .collect();
        ReviewNode { review, replies }
    }

    roots
        .into_iter()
        .map(|root| attach(root, &mut children))
        .collect()
}

/// Review service for business logic.
#[derive(Clone)]
pub struct ReviewService {
    review_repo: ReviewRepository,
    movie_repo: MovieRepository,
    id_gen: IdGenerator,
}

impl ReviewService {
    /// Create a new review service.
    #[must_use]
    pub fn new(review_repo: ReviewRepository, movie_repo: MovieRepository) -> Self {
        Self {
            review_repo,
            movie_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Persist a new review.
    ///
    /// The movie must be published; a parent review must exist and belong to
    /// the same movie.
    pub async fn submit(&self, new: NewReview) -> AppResult<review::Model> {
        if self
            .movie_repo
            .find_published_by_id(&new.movie_id)
            .await?
            .is_none()
        {
            return Err(AppError::MovieNotFound(new.movie_id));
        }

        if let Some(parent_id) = &new.parent_id {
            let parent = self
                .review_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| {
                    AppError::Validation(format!("parent review {parent_id} does not exist"))
                })?;

            if parent.movie_id != new.movie_id {
                return Err(AppError::Validation(
                    "parent review belongs to a different movie".to_string(),
                ));
            }
        }

        let model = review::ActiveModel {
            id: Set(self.id_gen.generate()),
            movie_id: Set(new.movie_id),
            author_name: Set(new.author_name),
            text: Set(new.text),
            parent_id: Set(new.parent_id),
            created_at: Set(Utc::now().into()),
        };

        let created = self.review_repo.create(model).await?;
        tracing::debug!(review_id = %created.id, movie_id = %created.movie_id, "Review created");
        Ok(created)
    }

    /// All reviews of a movie as reply trees, oldest first.
    pub async fn threads_for_movie(&self, movie_id: &str) -> AppResult<Vec<ReviewNode>> {
        let reviews = self.review_repo.find_by_movie(movie_id).await?;
        Ok(build_thread_tree(reviews))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kinoteka_db::entities::{movie, review};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn test_review(id: &str, movie_id: &str, parent_id: Option<&str>) -> review::Model {
        review::Model {
            id: id.to_string(),
            movie_id: movie_id.to_string(),
            author_name: "alice".to_string(),
            text: "text".to_string(),
            parent_id: parent_id.map(ToString::to_string),
            created_at: Utc::now().into(),
        }
    }

    fn test_movie(id: &str) -> movie::Model {
        movie::Model {
            id: id.to_string(),
            title: "Alien".to_string(),
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

    #[test]
    fn test_tree_nests_replies() {
        let reviews = vec![
            test_review("r1", "m1", None),
            test_review("r2", "m1", Some("r1")),
            test_review("r3", "m1", Some("r2")),
            test_review("r4", "m1", None),
        ];

        let tree = build_thread_tree(reviews);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].review.id, "r1");
        assert_eq!(tree[0].replies.len(), 1);
        assert_eq!(tree[0].replies[0].review.id, "r2");
        assert_eq!(tree[0].replies[0].replies[0].review.id, "r3");
        assert!(tree[1].replies.is_empty());
    }

    #[test]
    fn test_tree_orphan_becomes_root() {
        let reviews = vec![test_review("r2", "m1", Some("gone"))];

        let tree = build_thread_tree(reviews);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].review.id, "r2");
    }

    #[tokio::test]
    async fn test_submit_unknown_movie_is_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<movie::Model>::new()])
                .into_connection(),
        );
        let service = ReviewService::new(
            ReviewRepository::new(Arc::clone(&db)),
            MovieRepository::new(db),
        );

        let err = service
            .submit(NewReview {
                movie_id: "m-missing".to_string(),
                author_name: "alice".to_string(),
                text: "text".to_string(),
                parent_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MovieNotFound(_)));
    }

    #[tokio::test]
    async fn test_submit_parent_from_other_movie_is_rejected() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_movie("m1")]])
                .append_query_results([[test_review("r1", "m2", None)]])
                .into_connection(),
        );
        let service = ReviewService::new(
            ReviewRepository::new(Arc::clone(&db)),
            MovieRepository::new(db),
        );

        let err = service
            .submit(NewReview {
                movie_id: "m1".to_string(),
                author_name: "alice".to_string(),
                text: "text".to_string(),
                parent_id: Some("r1".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
