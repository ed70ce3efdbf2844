//! Friendship data repository for database operations.
//!
//! Friendships are directed rows. Writes always go through `create_mutual_many`, which
//! stores both directions of every pair in the same statement so a pair is never
//! half-present.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    data::INSERT_CHUNK_SIZE,
    model::{friendship::MutualFriendshipParams, user::User},
};

/// Repository providing database operations for friendships.
pub struct FriendshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FriendshipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts both directed rows for each pair, sharing the pair's `since` timestamp.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of directed rows inserted (twice the number of pairs)
    /// - `Err(DbErr)` - Self-pair, duplicate pair or unknown user id
    pub async fn create_mutual_many(
        &self,
        pairs: &[MutualFriendshipParams],
    ) -> Result<u64, DbErr> {
        if let Some(pair) = pairs.iter().find(|p| p.user_id == p.friend_id) {
            return Err(DbErr::Custom(format!(
                "User {} cannot befriend themselves",
                pair.user_id
            )));
        }

        let mut inserted = 0;
        // Each pair expands to two rows, so halve the chunk to keep the row bound.
        for chunk in pairs.chunks(INSERT_CHUNK_SIZE / 2) {
            let models = chunk.iter().flat_map(|pair| {
                [
                    Self::edge(pair.user_id, pair.friend_id, pair),
                    Self::edge(pair.friend_id, pair.user_id, pair),
                ]
            });

            inserted += entity::prelude::Friendship::insert_many(models)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    /// Gets the users on the receiving side of a user's outgoing friendship rows.
    ///
    /// An unknown user id yields an empty list.
    pub async fn get_friends(&self, user_id: i32) -> Result<Vec<User>, DbErr> {
        let friends = entity::prelude::User::find()
            .join(
                JoinType::InnerJoin,
                entity::friendship::Relation::Friend.def().rev(),
            )
            .filter(entity::friendship::Column::UserId.eq(user_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(friends.into_iter().map(User::from_entity).collect())
    }

    fn edge(
        user_id: i32,
        friend_id: i32,
        pair: &MutualFriendshipParams,
    ) -> entity::friendship::ActiveModel {
        entity::friendship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            friend_id: ActiveValue::Set(friend_id),
            since: ActiveValue::Set(pair.since),
        }
    }
}
