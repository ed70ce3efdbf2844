//! Friendship domain models and parameters.

use chrono::{DateTime, Utc};

/// One unordered friendship between two distinct users.
///
/// Persisted as two directed rows sharing `since`; see
/// `FriendshipRepository::create_mutual_many`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutualFriendshipParams {
    pub user_id: i32,
    pub friend_id: i32,
    pub since: DateTime<Utc>,
}
