//! Comment service
//!
//! Orchestrates the three operations exposed to the calling layer:
//! creating a comment on a closed changeset (with tiered admission
//! control), and the moderator-only hide/restore visibility transitions.

use std::sync::Arc;

use chrono::Utc;

use crate::app::notification::NotificationRouter;
use crate::app::rate_limit::{self, UserLocks};
use crate::config::Config;
use crate::domain::entities::{
    normalize_body, Caller, ChangesetComment, ChangesetId, CommentId, NewComment, RateLimitTier,
    UserFlags,
};
use crate::domain::ports::{
    ChangesetRepository, CommentRepository, NotificationDispatcher, UserDirectory,
};
use crate::error::CommentError;

/// Service for comment creation and moderation
pub struct CommentService<CR, KR, UD, ND>
where
    CR: ChangesetRepository,
    KR: CommentRepository,
    UD: UserDirectory,
    ND: NotificationDispatcher,
{
    changesets: Arc<CR>,
    comments: Arc<KR>,
    users: Arc<UD>,
    router: NotificationRouter<CR, UD, ND>,
    config: Config,
    locks: UserLocks,
}

impl<CR, KR, UD, ND> CommentService<CR, KR, UD, ND>
where
    CR: ChangesetRepository,
    KR: CommentRepository,
    UD: UserDirectory,
    ND: NotificationDispatcher,
{
    pub fn new(
        changesets: Arc<CR>,
        comments: Arc<KR>,
        users: Arc<UD>,
        dispatcher: Arc<ND>,
        config: Config,
    ) -> Self {
        let router =
            NotificationRouter::new(changesets.clone(), users.clone(), dispatcher);
        Self {
            changesets,
            comments,
            users,
            router,
            config,
            locks: UserLocks::new(),
        }
    }

    /// Create a comment on a closed changeset.
    ///
    /// Precondition checks run in taxonomy precedence order; rate limiting
    /// runs last, with the count-and-insert sequence serialized per author
    /// so concurrent requests cannot overshoot the quota. On acceptance the
    /// comment is persisted and notifications are queued for every eligible
    /// subscriber.
    pub async fn create_comment(
        &self,
        caller: Option<&Caller>,
        changeset_id: ChangesetId,
        body: &str,
    ) -> Result<ChangesetComment, CommentError> {
        let caller = caller.ok_or(CommentError::Unauthorized)?;

        let changeset = self
            .changesets
            .find_by_id(&changeset_id)
            .await?
            .ok_or_else(|| CommentError::NotFound(format!("changeset {}", changeset_id)))?;

        if !changeset.accepts_comments() {
            return Err(CommentError::Conflict(format!(
                "changeset {} is still open",
                changeset_id
            )));
        }

        let body = normalize_body(body)
            .ok_or_else(|| CommentError::BadRequest("comment body is required".to_string()))?;

        if !caller.terms_agreed {
            return Err(CommentError::Forbidden(
                "contributor terms must be agreed before commenting".to_string(),
            ));
        }

        // Hold the author's lock across count-and-insert so only one
        // request at a time can claim the last quota slot.
        let lock = self.locks.for_user(&caller.id);
        let guard = lock.lock().await;

        let flags = UserFlags {
            is_moderator: caller.is_moderator,
            has_open_report: self.users.has_open_report_against(&caller.id).await?,
        };
        let lifetime = self.comments.count_by_author(&caller.id).await?;
        let tier = RateLimitTier::classify(flags, lifetime, self.config.comments_to_max);

        let since = Utc::now() - rate_limit::window();
        let window_count = self
            .comments
            .count_by_author_since(&caller.id, since)
            .await?;

        if !rate_limit::admit(tier, window_count, &self.config) {
            tracing::warn!(
                author = %caller.id,
                %tier,
                window_count,
                "comment rejected: hourly quota exhausted"
            );
            return Err(CommentError::TooManyRequests);
        }

        let comment = self
            .comments
            .insert(&NewComment {
                changeset_id,
                author_id: caller.id,
                body,
            })
            .await?;
        drop(guard);

        tracing::info!(
            comment = %comment.id,
            changeset = %changeset_id,
            author = %caller.id,
            %tier,
            "comment created"
        );

        // The comment is already committed; a fault while queuing
        // notifications must not turn the creation into an error.
        if let Err(e) = self
            .router
            .fan_out(&changeset, &comment, &caller.display_name)
            .await
        {
            tracing::error!(
                comment = %comment.id,
                "notification fan-out aborted: {}",
                e
            );
        }

        Ok(comment)
    }

    /// Hide a comment (moderators only). Idempotent at the state level:
    /// hiding an already-hidden comment succeeds and still writes.
    pub async fn hide_comment(
        &self,
        caller: Option<&Caller>,
        comment_id: CommentId,
    ) -> Result<ChangesetComment, CommentError> {
        self.set_visibility(caller, comment_id, false).await
    }

    /// Restore a hidden comment (moderators only). Idempotent at the state
    /// level, same as `hide_comment`.
    pub async fn restore_comment(
        &self,
        caller: Option<&Caller>,
        comment_id: CommentId,
    ) -> Result<ChangesetComment, CommentError> {
        self.set_visibility(caller, comment_id, true).await
    }

    async fn set_visibility(
        &self,
        caller: Option<&Caller>,
        comment_id: CommentId,
        visible: bool,
    ) -> Result<ChangesetComment, CommentError> {
        let caller = caller.ok_or(CommentError::Unauthorized)?;

        let comment = self
            .comments
            .find_by_id(&comment_id)
            .await?
            .ok_or_else(|| CommentError::NotFound(format!("comment {}", comment_id)))?;

        if !caller.can_moderate() {
            return Err(CommentError::Forbidden(
                "only moderators may change comment visibility".to_string(),
            ));
        }

        self.comments.set_visibility(&comment_id, visible).await?;

        tracing::info!(
            comment = %comment_id,
            moderator = %caller.id,
            visible,
            "comment visibility changed"
        );

        Ok(ChangesetComment { visible, ..comment })
    }
}
