//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let task = factory::create_task(&db, user.id).await?;
//! let comment = factory::create_comment(&db, task.id, user.id).await?;
//!
//! let (owner, task, comment) = factory::helpers::create_comment_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let task = factory::task_item::TaskItemFactory::new(&db, user.id)
//!     .title("Write docs")
//!     .completed(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `task_item` - Create task entities
//! - `comment` - Create comment entities
//! - `friendship` - Create mutual friendship edge pairs
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod comment;
pub mod friendship;
pub mod helpers;
pub mod task_item;
pub mod user;

pub use comment::create_comment;
pub use friendship::create_mutual_friendship;
pub use task_item::create_task;
pub use user::create_user;
