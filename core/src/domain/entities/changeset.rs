//! Changeset domain entity
//!
//! Changesets are owned by the external editing subsystem; this core only
//! reads them. Comments attach to a changeset once it has closed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for a changeset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangesetId(pub Uuid);

impl ChangesetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChangesetId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ChangesetId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChangesetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A batch of edits that accepts comments after closing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changeset {
    pub id: ChangesetId,
    pub creator_id: UserId,
    pub is_open: bool,
    /// Users registered for notifications about this changeset. Unique,
    /// unordered; accumulated over the changeset's life by the owning
    /// subsystem. This core never mutates it.
    pub subscribers: Vec<UserId>,
}

impl Changeset {
    /// Comments may only be created once the changeset has closed
    pub fn accepts_comments(&self) -> bool {
        !self.is_open
    }
}
