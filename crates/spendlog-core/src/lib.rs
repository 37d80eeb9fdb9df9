//! Shared service plumbing: health handler, request-id middleware,
//! tracing bootstrap, and response serialization helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
