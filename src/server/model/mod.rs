//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input of
//! create operations from controllers (or the seeder) down to the repositories.

pub mod comment;
pub mod friendship;
pub mod seed;
pub mod task;
pub mod user;
