//! Domain entities
//!
//! Pure domain models representing core business concepts. Users and
//! changesets are owned by external subsystems and only read here.

pub mod changeset;
pub mod comment;
pub mod tier;
pub mod user;

pub use changeset::{Changeset, ChangesetId};
pub use comment::{normalize_body, ChangesetComment, CommentId, NewComment};
pub use tier::RateLimitTier;
pub use user::{AccountStatus, Caller, UserFlags, UserId};
