use std::str::FromStr;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::seed::SeedParams,
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Serve the OpenAPI document and Swagger UI.
    pub api_docs_enabled: bool,

    pub seed_enabled: bool,
    pub seed: SeedParams,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env_or("PORT", DEFAULT_PORT)?,
            api_docs_enabled: env_or("API_DOCS_ENABLED", true)?,
            seed_enabled: env_or("SEED_ENABLED", true)?,
            seed: SeedParams {
                user_count: env_or("SEED_USER_COUNT", 40)?,
                tasks_per_user_min: env_or("SEED_TASKS_MIN", 1)?,
                tasks_per_user_max: env_or("SEED_TASKS_MAX", 6)?,
                comment_count: env_or("SEED_COMMENT_COUNT", 400)?,
                friendship_pairs: env_or("SEED_FRIENDSHIP_PAIRS", 150)?,
                rng_seed: env_or("SEED_RNG_SEED", 42)?,
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_value(name, value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_value() {
        let port: u16 = parse_value("PORT", "9000".to_string()).unwrap();
        assert_eq!(port, 9000);
    }

    #[test]
    fn parses_boolean_with_whitespace() {
        let enabled: bool = parse_value("SEED_ENABLED", " false ".to_string()).unwrap();
        assert!(!enabled);
    }

    #[test]
    fn rejects_unparsable_value() {
        let result: Result<u16, _> = parse_value("PORT", "eighty".to_string());

        match result {
            Err(ConfigError::InvalidEnvVar { name, value }) => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "eighty");
            }
            _ => panic!("expected InvalidEnvVar"),
        }
    }

    #[test]
    fn falls_back_to_default_when_unset() {
        let value: usize = env_or("TASKBOARD_TEST_SURELY_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }
}
