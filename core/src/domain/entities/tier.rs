//! Rate-limit tier classification
//!
//! The tier is a pure function of current user state and lifetime comment
//! count, re-evaluated on every create attempt and never persisted.

use serde::{Deserialize, Serialize};

use crate::config::Config;

use super::user::UserFlags;

/// Trust tier determining the hourly comment quota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateLimitTier {
    New,
    Experienced,
    Reported,
    Moderator,
}

impl RateLimitTier {
    /// Classify a user by strict precedence, highest first.
    ///
    /// Moderator trust overrides everything; an open report depresses the
    /// quota regardless of tenure, so an otherwise-experienced account
    /// under report still lands in `Reported`.
    pub fn classify(flags: UserFlags, lifetime_comments: u64, comments_to_max: u64) -> Self {
        let rules: [(bool, RateLimitTier); 3] = [
            (flags.is_moderator, RateLimitTier::Moderator),
            (flags.has_open_report, RateLimitTier::Reported),
            (lifetime_comments >= comments_to_max, RateLimitTier::Experienced),
        ];

        rules
            .into_iter()
            .find_map(|(matched, tier)| matched.then_some(tier))
            .unwrap_or(RateLimitTier::New)
    }

    /// The hourly quota for this tier
    pub fn hourly_quota(&self, config: &Config) -> u32 {
        match self {
            RateLimitTier::New => config.initial_comments_per_hour,
            RateLimitTier::Experienced => config.max_comments_per_hour,
            RateLimitTier::Reported => config.initial_comments_per_hour / 2,
            RateLimitTier::Moderator => config.moderator_comments_per_hour,
        }
    }
}

impl std::fmt::Display for RateLimitTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateLimitTier::New => write!(f, "new"),
            RateLimitTier::Experienced => write!(f, "experienced"),
            RateLimitTier::Reported => write!(f, "reported"),
            RateLimitTier::Moderator => write!(f, "moderator"),
        }
    }
}
