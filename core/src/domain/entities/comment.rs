//! Changeset comment domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::changeset::ChangesetId;
use super::user::UserId;

/// Unique identifier for a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CommentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comment attached to a closed changeset
///
/// Invariant: after creation only `visible` ever changes, and only through
/// the moderator-gated hide/restore transitions. Comments are never
/// deleted; hidden is the terminal-but-reversible suppressed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangesetComment {
    pub id: CommentId,
    pub changeset_id: ChangesetId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub visible: bool,
}

/// Data needed to persist a new comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub changeset_id: ChangesetId,
    pub author_id: UserId,
    pub body: String,
}

/// Validate and normalize a comment body: required, non-empty after trimming
pub fn normalize_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
