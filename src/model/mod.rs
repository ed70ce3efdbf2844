//! Wire-level DTOs exchanged over the HTTP API.
//!
//! Every DTO serializes with camelCase field names and derives `ToSchema` so it
//! appears in the generated OpenAPI document.

pub mod api;
pub mod comment;
pub mod task;
pub mod user;
