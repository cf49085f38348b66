//! Database entities.

pub mod actor;
pub mod category;
pub mod genre;
pub mod movie;
pub mod movie_actor;
pub mod movie_director;
pub mod movie_genre;
pub mod rating;
pub mod review;
pub mod user;

pub use actor::Entity as Actor;
pub use category::Entity as Category;
pub use genre::Entity as Genre;
pub use movie::Entity as Movie;
pub use movie_actor::Entity as MovieActor;
pub use movie_director::Entity as MovieDirector;
pub use movie_genre::Entity as MovieGenre;
pub use rating::Entity as Rating;
pub use review::Entity as Review;
pub use user::Entity as User;
