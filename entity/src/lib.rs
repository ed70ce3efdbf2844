//! SeaORM entities for the taskboard schema.
//!
//! Each module maps one table. Relations carry their `on_delete` behavior so that
//! schemas generated straight from the entities (as the test harness does) enforce
//! the same cascade and restrict rules as the migrations.

pub mod prelude;

pub mod comment;
pub mod friendship;
pub mod task_item;
pub mod user;
