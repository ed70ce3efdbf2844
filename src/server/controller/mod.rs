//! HTTP request handlers.
//!
//! Controllers extract path and body values, convert DTOs into domain parameters,
//! call a single service method and convert the result back into a DTO. Each handler
//! carries a `#[utoipa::path]` annotation so the router can assemble the OpenAPI
//! document from the handlers themselves.

pub mod comment;
pub mod friendship;
pub mod root;
pub mod task;
pub mod user;
