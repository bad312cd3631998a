//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters in the calling layer provide concrete implementations.

pub mod dispatcher;
pub mod repositories;

pub use dispatcher::{Notification, NotificationDispatcher, TemplateVariant};
pub use repositories::{ChangesetRepository, CommentRepository, UserDirectory};
