//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across all factories in a test binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a task together with the user that owns it.
///
/// # Returns
/// - `Ok((owner, task))` - The created user and task
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::task_item::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let task = crate::factory::task_item::create_task(db, owner.id).await?;

    Ok((owner, task))
}

/// Creates a comment with all of its dependencies.
///
/// The task owner is also used as the comment author.
///
/// # Returns
/// - `Ok((owner, task, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::task_item::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (owner, task) = create_task_with_owner(db).await?;
    let comment = crate::factory::comment::create_comment(db, task.id, owner.id).await?;

    Ok((owner, task, comment))
}
