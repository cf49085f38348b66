//! Service layer.

pub mod actor;
pub mod catalog;
pub mod client_log;
pub mod rating;
pub mod review;
pub mod user;

pub use actor::{ActorDetail, ActorService};
pub use catalog::{CatalogService, MovieDetail, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use client_log::ClientLogService;
pub use rating::{NewRating, RatingService};
pub use review::{NewReview, ReviewNode, ReviewService, build_thread_tree};
pub use user::UserService;
