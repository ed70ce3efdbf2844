//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer,
//! working with domain models rather than DTOs or entity models. Request services are
//! thin: each maps one endpoint onto one repository call. The seeder is the only
//! service that coordinates several repositories.

pub mod comment;
pub mod friendship;
pub mod seed;
pub mod task;
pub mod user;
