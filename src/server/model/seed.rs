//! Seeding parameters and results.

use crate::server::error::seed::SeedError;

/// Caller-supplied knobs for the fake-data seeder.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedParams {
    /// Number of users to create.
    pub user_count: usize,
    /// Inclusive lower bound of tasks generated per user.
    pub tasks_per_user_min: usize,
    /// Inclusive upper bound of tasks generated per user.
    pub tasks_per_user_max: usize,
    /// Number of comments spread across random tasks and authors.
    pub comment_count: usize,
    /// Number of unordered friend pairs, capped at n·(n−1)/2.
    pub friendship_pairs: usize,
    /// Seed for the random generator so runs are reproducible.
    pub rng_seed: u64,
}

impl SeedParams {
    /// Rejects parameter combinations the seeder cannot honor.
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.tasks_per_user_min > self.tasks_per_user_max {
            return Err(SeedError::InvalidTaskRange {
                min: self.tasks_per_user_min,
                max: self.tasks_per_user_max,
            });
        }

        Ok(())
    }

    /// Largest number of distinct unordered pairs among `user_count` users.
    pub fn max_friendship_pairs(user_count: usize) -> usize {
        user_count * user_count.saturating_sub(1) / 2
    }
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            user_count: 30,
            tasks_per_user_min: 1,
            tasks_per_user_max: 5,
            comment_count: 300,
            friendship_pairs: 120,
            rng_seed: 42,
        }
    }
}

/// Row counts produced by a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// True when the database already held users and nothing was inserted.
    pub skipped: bool,
    pub users: usize,
    pub tasks: usize,
    pub comments: usize,
    /// Unordered pairs; twice as many friendship rows were written.
    pub friendship_pairs: usize,
}

impl SeedSummary {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Default::default()
        }
    }
}
