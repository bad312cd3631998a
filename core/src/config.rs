//! Quota configuration
//!
//! All quota values are independently settable; `from_env` reads them from
//! the environment with the defaults below so a bare deployment still has
//! sensible limits.

use std::env;

/// Hourly comment quotas and the tenure threshold for the experienced tier
#[derive(Debug, Clone)]
pub struct Config {
    /// Hourly quota for new users
    pub initial_comments_per_hour: u32,
    /// Hourly quota for experienced users (must exceed the initial quota)
    pub max_comments_per_hour: u32,
    /// Hourly quota for moderators
    pub moderator_comments_per_hour: u32,
    /// Lifetime comment count at which a user becomes experienced
    pub comments_to_max: u64,
}

const DEFAULT_INITIAL_COMMENTS_PER_HOUR: u32 = 6;
const DEFAULT_MAX_COMMENTS_PER_HOUR: u32 = 60;
const DEFAULT_MODERATOR_COMMENTS_PER_HOUR: u32 = 60;
const DEFAULT_COMMENTS_TO_MAX: u64 = 200;

impl Config {
    pub fn new(
        initial_comments_per_hour: u32,
        max_comments_per_hour: u32,
        moderator_comments_per_hour: u32,
        comments_to_max: u64,
    ) -> Self {
        Self {
            initial_comments_per_hour,
            max_comments_per_hour,
            moderator_comments_per_hour,
            comments_to_max,
        }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            initial_comments_per_hour: env_u32(
                "INITIAL_COMMENTS_PER_HOUR",
                DEFAULT_INITIAL_COMMENTS_PER_HOUR,
            ),
            max_comments_per_hour: env_u32(
                "MAX_COMMENTS_PER_HOUR",
                DEFAULT_MAX_COMMENTS_PER_HOUR,
            ),
            moderator_comments_per_hour: env_u32(
                "MODERATOR_COMMENTS_PER_HOUR",
                DEFAULT_MODERATOR_COMMENTS_PER_HOUR,
            ),
            comments_to_max: env::var("COMMENTS_TO_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COMMENTS_TO_MAX),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_INITIAL_COMMENTS_PER_HOUR,
            DEFAULT_MAX_COMMENTS_PER_HOUR,
            DEFAULT_MODERATOR_COMMENTS_PER_HOUR,
            DEFAULT_COMMENTS_TO_MAX,
        )
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
