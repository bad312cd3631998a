//! Repository port traits
//!
//! These traits define the interface for data persistence. Implementations
//! are provided by the calling layer's adapters; reads are assumed
//! consistent within the calling transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    AccountStatus, Changeset, ChangesetComment, ChangesetId, CommentId, NewComment, UserId,
};
use crate::error::DomainError;

/// Read access to changesets and their subscriber sets
#[async_trait]
pub trait ChangesetRepository: Send + Sync {
    /// Find a changeset by ID
    async fn find_by_id(&self, id: &ChangesetId) -> Result<Option<Changeset>, DomainError>;

    /// List users subscribed to a changeset (unique, unordered)
    async fn list_subscribers(&self, id: &ChangesetId) -> Result<Vec<UserId>, DomainError>;
}

/// Persistence for changeset comments
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment by ID
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<ChangesetComment>, DomainError>;

    /// Persist a new comment; `visible` defaults to true
    async fn insert(&self, comment: &NewComment) -> Result<ChangesetComment, DomainError>;

    /// Set the visibility flag on an existing comment
    async fn set_visibility(&self, id: &CommentId, visible: bool) -> Result<(), DomainError>;

    /// Count comments by an author with `created_at` after `since`
    /// (the sliding rate-limit window)
    async fn count_by_author_since(
        &self,
        author_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<u64, DomainError>;

    /// Count all comments ever authored by a user (tier classification input)
    async fn count_by_author(&self, author_id: &UserId) -> Result<u64, DomainError>;
}

/// Read access to user account state held by the external account subsystem
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Current lifecycle state of an account
    async fn account_status(&self, id: &UserId) -> Result<AccountStatus, DomainError>;

    /// Whether the user is currently the subject of an open report
    async fn has_open_report_against(&self, id: &UserId) -> Result<bool, DomainError>;
}
