//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{
    Caller, Changeset, ChangesetComment, ChangesetId, CommentId, UserId,
};

/// An authenticated ordinary user who has agreed to the terms
pub fn test_caller() -> Caller {
    Caller {
        id: UserId::new(),
        display_name: "test-user".to_string(),
        is_moderator: false,
        terms_agreed: true,
    }
}

pub fn test_caller_named(name: &str) -> Caller {
    Caller {
        id: UserId::new(),
        display_name: name.to_string(),
        is_moderator: false,
        terms_agreed: true,
    }
}

pub fn test_moderator() -> Caller {
    Caller {
        id: UserId::new(),
        display_name: "test-moderator".to_string(),
        is_moderator: true,
        terms_agreed: true,
    }
}

/// A user who never accepted the contributor terms
pub fn test_caller_without_terms() -> Caller {
    Caller {
        terms_agreed: false,
        ..test_caller()
    }
}

pub fn test_changeset(creator_id: UserId, is_open: bool) -> Changeset {
    Changeset {
        id: ChangesetId::new(),
        creator_id,
        is_open,
        subscribers: vec![],
    }
}

pub fn test_closed_changeset() -> Changeset {
    test_changeset(UserId::new(), false)
}

pub fn test_comment(changeset_id: ChangesetId, author_id: UserId) -> ChangesetComment {
    ChangesetComment {
        id: CommentId::new(),
        changeset_id,
        author_id,
        body: "This is a comment".to_string(),
        created_at: Utc::now(),
        visible: true,
    }
}

pub fn test_hidden_comment(changeset_id: ChangesetId, author_id: UserId) -> ChangesetComment {
    ChangesetComment {
        visible: false,
        ..test_comment(changeset_id, author_id)
    }
}
