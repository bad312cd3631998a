//! Notification dispatcher port trait
//!
//! Defines the handoff to the asynchronous delivery substrate. The core's
//! contract ends at "enqueued": delivery, retry, and failure handling are
//! owned by the dispatcher implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ChangesetId, CommentId, UserId};
use crate::error::DispatchError;

/// Which message template a recipient gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateVariant {
    /// The recipient created the changeset being commented on
    CommentedOnOwnChangeset,
    /// The recipient subscribed to someone else's changeset
    CommentedOnWatchedChangeset,
}

/// One unit of asynchronous delivery work, one per recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: UserId,
    pub variant: TemplateVariant,
    pub subject: String,
    /// Template context (commenter name, changeset id, comment id, body)
    pub context: serde_json::Value,
}

impl Notification {
    pub fn new(
        recipient: UserId,
        variant: TemplateVariant,
        commenter_name: &str,
        changeset_id: ChangesetId,
        comment_id: CommentId,
        body: &str,
    ) -> Self {
        let subject = match variant {
            TemplateVariant::CommentedOnOwnChangeset => {
                format!("{} has commented on one of your changesets", commenter_name)
            }
            TemplateVariant::CommentedOnWatchedChangeset => {
                format!(
                    "{} has commented on a changeset you are interested in",
                    commenter_name
                )
            }
        };

        Self {
            recipient,
            variant,
            subject,
            context: serde_json::json!({
                "commenter": commenter_name,
                "changeset_id": changeset_id,
                "comment_id": comment_id,
                "body": body,
            }),
        }
    }
}

/// Port trait for asynchronous notification delivery
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Queue a notification for out-of-band delivery.
    ///
    /// Fire-and-forget from the caller's perspective: an error here means
    /// the handoff itself failed, and is isolated to this recipient.
    async fn enqueue(&self, notification: Notification) -> Result<(), DispatchError>;
}
