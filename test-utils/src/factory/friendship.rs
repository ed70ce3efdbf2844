//! Friendship factory for creating mutual friendship edges.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a single directed friendship edge.
pub async fn create_edge(
    db: &DatabaseConnection,
    user_id: i32,
    friend_id: i32,
    since: DateTime<Utc>,
) -> Result<entity::friendship::Model, DbErr> {
    entity::friendship::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        friend_id: ActiveValue::Set(friend_id),
        since: ActiveValue::Set(since),
    }
    .insert(db)
    .await
}

/// Creates both directed rows for a mutual friendship with a shared timestamp.
///
/// # Returns
/// - `Ok((a_to_b, b_to_a))` - The two inserted edges
/// - `Err(DbErr)` - Database error during insert
pub async fn create_mutual_friendship(
    db: &DatabaseConnection,
    a: i32,
    b: i32,
) -> Result<(entity::friendship::Model, entity::friendship::Model), DbErr> {
    let since = Utc::now();
    let forward = create_edge(db, a, b, since).await?;
    let backward = create_edge(db, b, a, since).await?;

    Ok((forward, backward))
}
