//! Admission control for comment creation
//!
//! The admission decision itself is a pure comparison against the tier
//! quota; the interesting part is `UserLocks`, which serializes the
//! check-then-insert sequence per author so two concurrent requests from
//! the same user cannot both observe the last free slot.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Duration;

use crate::config::Config;
use crate::domain::entities::{RateLimitTier, UserId};

/// Length of the sliding rate-limit window
pub fn window() -> Duration {
    Duration::hours(1)
}

/// Accept iff the trailing-hour count is below the tier quota
pub fn admit(tier: RateLimitTier, window_count: u64, config: &Config) -> bool {
    window_count < u64::from(tier.hourly_quota(config))
}

/// Per-user mutual exclusion for the admission check
///
/// Each author gets their own `tokio::sync::Mutex`, created on first use;
/// the outer std mutex only guards the map and is never held across await.
/// Distinct authors never contend.
#[derive(Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<UserId, Arc<tokio::sync::Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lock for an author, creating it on first use.
    ///
    /// The returned handle must be `.lock().await`ed by the caller and
    /// held across the count-and-insert sequence.
    pub fn for_user(&self, user_id: &UserId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks.entry(*user_id).or_default().clone()
    }
}
