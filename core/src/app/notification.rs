//! Notification router
//!
//! Computes the recipient set and message variant for a newly created
//! comment and hands each recipient off to the dispatcher as an
//! independent unit of work. Runs exactly once per admitted comment,
//! after the insert has committed; nothing here can fail creation.

use std::sync::Arc;

use crate::domain::entities::{Changeset, ChangesetComment};
use crate::domain::ports::{
    ChangesetRepository, Notification, NotificationDispatcher, TemplateVariant, UserDirectory,
};
use crate::error::DomainError;

/// Routes comment notifications to eligible subscribers
pub struct NotificationRouter<CR, UD, ND>
where
    CR: ChangesetRepository,
    UD: UserDirectory,
    ND: NotificationDispatcher,
{
    changesets: Arc<CR>,
    users: Arc<UD>,
    dispatcher: Arc<ND>,
}

impl<CR, UD, ND> NotificationRouter<CR, UD, ND>
where
    CR: ChangesetRepository,
    UD: UserDirectory,
    ND: NotificationDispatcher,
{
    pub fn new(changesets: Arc<CR>, users: Arc<UD>, dispatcher: Arc<ND>) -> Self {
        Self {
            changesets,
            users,
            dispatcher,
        }
    }

    /// Fan out notifications for a freshly created comment.
    ///
    /// Recipients are the changeset's subscribers minus the commenter,
    /// filtered to active accounts. The changeset creator gets the creator
    /// variant, everyone else the watched-changeset variant. One enqueue
    /// per recipient; a failed enqueue is logged and does not affect the
    /// others. An empty recipient set is a silent no-op.
    pub async fn fan_out(
        &self,
        changeset: &Changeset,
        comment: &ChangesetComment,
        commenter_name: &str,
    ) -> Result<usize, DomainError> {
        let subscribers = self.changesets.list_subscribers(&changeset.id).await?;

        let mut dispatched = 0;
        for recipient in subscribers {
            if recipient == comment.author_id {
                continue;
            }
            if !self.users.account_status(&recipient).await?.is_active() {
                continue;
            }

            let variant = if recipient == changeset.creator_id {
                TemplateVariant::CommentedOnOwnChangeset
            } else {
                TemplateVariant::CommentedOnWatchedChangeset
            };

            let notification = Notification::new(
                recipient,
                variant,
                commenter_name,
                changeset.id,
                comment.id,
                &comment.body,
            );

            match self.dispatcher.enqueue(notification).await {
                Ok(()) => dispatched += 1,
                Err(e) => {
                    tracing::warn!(
                        recipient = %recipient,
                        comment = %comment.id,
                        "failed to enqueue comment notification: {}",
                        e
                    );
                }
            }
        }

        if dispatched > 0 {
            tracing::info!(
                comment = %comment.id,
                changeset = %changeset.id,
                recipients = dispatched,
                "queued comment notifications"
            );
        }

        Ok(dispatched)
    }
}
