use thiserror::Error;

/// Failures of the fake-data seeder that are not database errors.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Lower task bound is above the upper bound.
    #[error("Invalid tasks-per-user range: min {min} is greater than max {max}")]
    InvalidTaskRange { min: usize, max: usize },

    /// The username generator kept colliding and gave up.
    ///
    /// Only reachable when asking for more users than the generator can produce
    /// distinct handles for within its retry budget.
    #[error("Could only generate {generated} of {requested} unique usernames")]
    UsernamesExhausted { requested: usize, generated: usize },
}
