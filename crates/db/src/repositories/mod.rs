//! Repositories for database access.

mod actor;
mod movie;
mod rating;
mod review;
mod user;

pub use actor::ActorRepository;
pub use movie::{MovieFilter, MovieRepository};
pub use rating::RatingRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
