//! HTTP API for kinoteka.
//!
//! Endpoints are thin mappers: extract, validate, call a service, shape the
//! response. List and detail requests of the same resource deliberately use
//! two different response shapes.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::{client_router, router};
