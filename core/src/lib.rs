//! Changeset comments core
//!
//! Decision and orchestration layer for attaching comments to closed
//! changesets: tiered admission control, moderator-gated visibility, and
//! notification fan-out to subscribers. Uses hexagonal (ports & adapters)
//! architecture: persistence, auth, and delivery are traits implemented by
//! the calling layer.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
pub mod test_utils;


pub use app::{CommentService, NotificationRouter, UserLocks};
pub use config::Config;
pub use domain::entities::{
    AccountStatus, Caller, Changeset, ChangesetComment, ChangesetId, CommentId, NewComment,
    RateLimitTier, UserFlags, UserId,
};
pub use domain::ports::{
    ChangesetRepository, CommentRepository, Notification, NotificationDispatcher, TemplateVariant,
    UserDirectory,
};
pub use error::{CommentError, DispatchError, DomainError};
