//! Mock implementations of port traits
//!
//! In-memory implementations that store data behind `Arc<RwLock<..>>` and
//! can be seeded with `with_*` builders. Manual mocks keep the behavior
//! explicit and debuggable; the recording dispatcher additionally captures
//! everything it is asked to enqueue.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    AccountStatus, Changeset, ChangesetComment, ChangesetId, CommentId, NewComment, UserId,
};
use crate::domain::ports::{
    ChangesetRepository, CommentRepository, Notification, NotificationDispatcher, UserDirectory,
};
use crate::error::{DispatchError, DomainError};

// ============================================================================
// In-Memory Changeset Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryChangesetRepository {
    changesets: Arc<RwLock<HashMap<ChangesetId, Changeset>>>,
}

impl InMemoryChangesetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a changeset for testing
    pub fn with_changeset(self, changeset: Changeset) -> Self {
        {
            let mut changesets = self.changesets.write().unwrap();
            changesets.insert(changeset.id, changeset);
        }
        self
    }
}

#[async_trait]
impl ChangesetRepository for InMemoryChangesetRepository {
    async fn find_by_id(&self, id: &ChangesetId) -> Result<Option<Changeset>, DomainError> {
        let changesets = self.changesets.read().unwrap();
        Ok(changesets.get(id).cloned())
    }

    async fn list_subscribers(&self, id: &ChangesetId) -> Result<Vec<UserId>, DomainError> {
        let changesets = self.changesets.read().unwrap();
        match changesets.get(id) {
            Some(changeset) => Ok(changeset.subscribers.clone()),
            None => Err(DomainError::NotFound(format!("changeset {}", id))),
        }
    }
}

// ============================================================================
// In-Memory Comment Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<HashMap<CommentId, ChangesetComment>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a comment for testing
    pub fn with_comment(self, comment: ChangesetComment) -> Self {
        {
            let mut comments = self.comments.write().unwrap();
            comments.insert(comment.id, comment);
        }
        self
    }

    /// Make every subsequent call fail with a database error
    pub fn failing(self) -> Self {
        *self.should_fail.write().unwrap() = true;
        self
    }

    pub fn count(&self) -> usize {
        self.comments.read().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            Err(DomainError::Database("mock failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<ChangesetComment>, DomainError> {
        self.check_failure()?;
        let comments = self.comments.read().unwrap();
        Ok(comments.get(id).cloned())
    }

    async fn insert(&self, new_comment: &NewComment) -> Result<ChangesetComment, DomainError> {
        self.check_failure()?;
        let comment = ChangesetComment {
            id: CommentId(Uuid::new_v4()),
            changeset_id: new_comment.changeset_id,
            author_id: new_comment.author_id,
            body: new_comment.body.clone(),
            created_at: Utc::now(),
            visible: true,
        };

        let mut comments = self.comments.write().unwrap();
        comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn set_visibility(&self, id: &CommentId, visible: bool) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut comments = self.comments.write().unwrap();
        if let Some(comment) = comments.get_mut(id) {
            comment.visible = visible;
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("comment {}", id)))
        }
    }

    async fn count_by_author_since(
        &self,
        author_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        self.check_failure()?;
        let comments = self.comments.read().unwrap();
        Ok(comments
            .values()
            .filter(|c| c.author_id == *author_id && c.created_at > since)
            .count() as u64)
    }

    async fn count_by_author(&self, author_id: &UserId) -> Result<u64, DomainError> {
        self.check_failure()?;
        let comments = self.comments.read().unwrap();
        Ok(comments
            .values()
            .filter(|c| c.author_id == *author_id)
            .count() as u64)
    }
}

// ============================================================================
// In-Memory User Directory
// ============================================================================

/// Accounts default to `Active` with no open report unless configured.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    statuses: Arc<RwLock<HashMap<UserId, AccountStatus>>>,
    reported: Arc<RwLock<HashSet<UserId>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(self, user_id: UserId, status: AccountStatus) -> Self {
        {
            let mut statuses = self.statuses.write().unwrap();
            statuses.insert(user_id, status);
        }
        self
    }

    pub fn with_open_report_against(self, user_id: UserId) -> Self {
        {
            let mut reported = self.reported.write().unwrap();
            reported.insert(user_id);
        }
        self
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn account_status(&self, id: &UserId) -> Result<AccountStatus, DomainError> {
        let statuses = self.statuses.read().unwrap();
        Ok(statuses.get(id).copied().unwrap_or(AccountStatus::Active))
    }

    async fn has_open_report_against(&self, id: &UserId) -> Result<bool, DomainError> {
        let reported = self.reported.read().unwrap();
        Ok(reported.contains(id))
    }
}

// ============================================================================
// Recording Dispatcher
// ============================================================================

/// A dispatcher that records everything enqueued and can be configured to
/// reject specific recipients.
#[derive(Default)]
pub struct RecordingDispatcher {
    sent: Arc<RwLock<Vec<Notification>>>,
    failing_recipients: Arc<RwLock<HashSet<UserId>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject enqueues for a specific recipient
    pub fn failing_for(self, recipient: UserId) -> Self {
        {
            let mut failing = self.failing_recipients.write().unwrap();
            failing.insert(recipient);
        }
        self
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.read().unwrap().clone()
    }

    pub fn sent_to(&self, recipient: UserId) -> Vec<Notification> {
        self.sent
            .read()
            .unwrap()
            .iter()
            .filter(|n| n.recipient == recipient)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingDispatcher {
    async fn enqueue(&self, notification: Notification) -> Result<(), DispatchError> {
        if self
            .failing_recipients
            .read()
            .unwrap()
            .contains(&notification.recipient)
        {
            return Err(DispatchError::QueueRejected(format!(
                "mock rejection for {}",
                notification.recipient
            )));
        }
        self.sent.write().unwrap().push(notification);
        Ok(())
    }
}
