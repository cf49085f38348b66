//! Common utilities and shared types for kinoteka.
//!
//! This crate provides foundational components used across all kinoteka crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Client identity**: Forwarded-for aware IP resolution via [`client_ip`]
//! - **ID Generation**: ULID-based unique identifiers via [`IdGenerator`]
//!
//! # Example
//!
//! ```no_run
//! use kinoteka_common::{Config, IdGenerator, AppResult};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let id_gen = IdGenerator::new();
//!     let id = id_gen.generate();
//!     println!("Generated ID: {}", id);
//!     Ok(())
//! }
//! ```

pub mod client_ip;
pub mod config;
pub mod error;
pub mod id;

pub use client_ip::resolve_client_ip;
pub use config::{Config, DuplicateRatingPolicy};
pub use error::{AppError, AppResult};
pub use id::IdGenerator;
