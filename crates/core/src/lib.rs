//! Business logic for kinoteka.

pub mod rating_stats;
pub mod services;

pub use rating_stats::RatingStats;
pub use services::*;
