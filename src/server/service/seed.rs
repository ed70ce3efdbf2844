//! Fake-data seeding.
//!
//! Fills an empty database with users, tasks, comments and mutual friendships that
//! satisfy every foreign key and uniqueness rule. The run is idempotent (it does nothing
//! once any user exists) and atomic (all rows are written in one transaction, so a
//! failure leaves the user table empty and the next start tries again).

use std::collections::HashSet;

use chrono::Utc;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        comment::CommentRepository, friendship::FriendshipRepository, task::TaskRepository,
        user::UserRepository,
    },
    error::{seed::SeedError, AppError},
    model::{
        comment::CreateCommentParams,
        friendship::MutualFriendshipParams,
        seed::{SeedParams, SeedSummary},
        task::CreateTaskParams,
        user::CreateUserParams,
    },
    util::fake,
};

/// Username draws allowed per requested user before giving up.
const USERNAME_ATTEMPTS_PER_USER: usize = 50;

/// Probability that a generated task starts out completed.
const TASK_COMPLETED_PROBABILITY: f64 = 0.3;

/// Comments are backdated up to this many days.
const COMMENT_MAX_AGE_DAYS: i64 = 30;

/// Friendships are backdated up to this many years.
const FRIENDSHIP_MAX_AGE_YEARS: i64 = 2;

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the database unless it already contains users.
    ///
    /// # Arguments
    /// - `params`: Row counts, task range and RNG seed
    ///
    /// # Returns
    /// - `Ok(SeedSummary)`: Inserted row counts, or a summary with `skipped` set
    /// - `Err(AppError::SeedErr)`: Invalid parameters or username space exhausted
    /// - `Err(AppError::DbErr)`: Database error; the transaction is rolled back
    pub async fn seed(&self, params: &SeedParams) -> Result<SeedSummary, AppError> {
        params.validate()?;

        if UserRepository::new(self.db).any_exists().await? {
            return Ok(SeedSummary::skipped());
        }

        let mut rng = StdRng::seed_from_u64(params.rng_seed);

        let txn = self.db.begin().await?;

        let user_ids = Self::seed_users(&txn, &mut rng, params.user_count).await?;
        let task_ids = Self::seed_tasks(&txn, &mut rng, &user_ids, params).await?;
        let comments =
            Self::seed_comments(&txn, &mut rng, &task_ids, &user_ids, params.comment_count)
                .await?;
        let friendship_pairs =
            Self::seed_friendships(&txn, &mut rng, &user_ids, params.friendship_pairs).await?;

        txn.commit().await?;

        Ok(SeedSummary {
            skipped: false,
            users: user_ids.len(),
            tasks: task_ids.len(),
            comments,
            friendship_pairs,
        })
    }

    async fn seed_users(
        txn: &DatabaseTransaction,
        rng: &mut StdRng,
        count: usize,
    ) -> Result<Vec<i32>, AppError> {
        let repo = UserRepository::new(txn);

        let mut ids = Vec::with_capacity(count);
        for username in unique_usernames(rng, count)? {
            let user = repo.create(CreateUserParams { username }).await?;
            ids.push(user.id);
        }

        Ok(ids)
    }

    async fn seed_tasks(
        txn: &DatabaseTransaction,
        rng: &mut StdRng,
        user_ids: &[i32],
        params: &SeedParams,
    ) -> Result<Vec<i32>, AppError> {
        let repo = TaskRepository::new(txn);

        let mut ids = Vec::new();
        for &user_id in user_ids {
            let count = rng.random_range(params.tasks_per_user_min..=params.tasks_per_user_max);
            for _ in 0..count {
                let task = repo
                    .create(CreateTaskParams {
                        title: fake::hacker_phrase(rng),
                        is_completed: rng.random_bool(TASK_COMPLETED_PROBABILITY),
                        user_id,
                    })
                    .await?;
                ids.push(task.id);
            }
        }

        Ok(ids)
    }

    async fn seed_comments(
        txn: &DatabaseTransaction,
        rng: &mut StdRng,
        task_ids: &[i32],
        user_ids: &[i32],
        count: usize,
    ) -> Result<usize, AppError> {
        if task_ids.is_empty() || user_ids.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let comments: Vec<CreateCommentParams> = (0..count)
            .map(|_| CreateCommentParams {
                body: fake::lorem_sentence(rng),
                created_at: fake::recent(rng, now, COMMENT_MAX_AGE_DAYS),
                task_item_id: task_ids[rng.random_range(0..task_ids.len())],
                author_id: user_ids[rng.random_range(0..user_ids.len())],
            })
            .collect();

        let inserted = CommentRepository::new(txn).create_many(comments).await?;

        Ok(inserted as usize)
    }

    async fn seed_friendships(
        txn: &DatabaseTransaction,
        rng: &mut StdRng,
        user_ids: &[i32],
        requested: usize,
    ) -> Result<usize, AppError> {
        let now = Utc::now();
        let pairs: Vec<MutualFriendshipParams> = friendship_pairs(rng, user_ids, requested)
            .into_iter()
            .map(|(user_id, friend_id)| MutualFriendshipParams {
                user_id,
                friend_id,
                since: fake::past(rng, now, FRIENDSHIP_MAX_AGE_YEARS),
            })
            .collect();

        FriendshipRepository::new(txn)
            .create_mutual_many(&pairs)
            .await?;

        Ok(pairs.len())
    }
}

/// Draws `count` distinct usernames, retrying on collision.
fn unique_usernames<R: Rng>(rng: &mut R, count: usize) -> Result<Vec<String>, SeedError> {
    let mut seen = HashSet::with_capacity(count);
    let mut names = Vec::with_capacity(count);

    let budget = count.saturating_mul(USERNAME_ATTEMPTS_PER_USER);
    for _ in 0..budget {
        if names.len() == count {
            break;
        }
        let name = fake::username(rng);
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }

    if names.len() < count {
        return Err(SeedError::UsernamesExhausted {
            requested: count,
            generated: names.len(),
        });
    }

    Ok(names)
}

/// Picks up to `requested` distinct unordered pairs of distinct users.
///
/// Pairs are returned as `(a, b)` in draw order. The request is capped at n·(n−1)/2.
/// Sparse requests use rejection sampling; dense ones shuffle the full pair list so the
/// loop never stalls hunting for the last few free pairs.
fn friendship_pairs<R: Rng>(rng: &mut R, user_ids: &[i32], requested: usize) -> Vec<(i32, i32)> {
    let max_pairs = SeedParams::max_friendship_pairs(user_ids.len());
    let target = requested.min(max_pairs);

    if target == 0 {
        return Vec::new();
    }

    if target * 2 > max_pairs {
        let mut all: Vec<(i32, i32)> = user_ids
            .iter()
            .enumerate()
            .flat_map(|(i, &a)| user_ids[i + 1..].iter().map(move |&b| (a, b)))
            .collect();
        all.shuffle(rng);
        all.truncate(target);
        return all;
    }

    let mut seen = HashSet::with_capacity(target);
    let mut pairs = Vec::with_capacity(target);
    while pairs.len() < target {
        let a = user_ids[rng.random_range(0..user_ids.len())];
        let b = user_ids[rng.random_range(0..user_ids.len())];
        if a == b {
            continue;
        }

        let key = if a < b { (a, b) } else { (b, a) };
        if seen.insert(key) {
            pairs.push((a, b));
        }
    }

    pairs
}
