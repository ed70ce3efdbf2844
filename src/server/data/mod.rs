//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees entity types. Each repository is generic over
//! `ConnectionTrait`, letting the seeder run them inside a transaction while request
//! handlers use the pooled connection directly.

pub mod comment;
pub mod friendship;
pub mod task;
pub mod user;

#[cfg(test)]
mod test;

/// Rows per multi-row INSERT, keeping bound parameters well under SQLite's limit.
pub(crate) const INSERT_CHUNK_SIZE: usize = 200;
