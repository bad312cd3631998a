//! Application layer
//!
//! Contains use cases and service orchestration. Services coordinate
//! between domain entities and the collaborator ports.

pub mod comment_service;
pub mod notification;
pub mod rate_limit;

pub use comment_service::CommentService;
pub use notification::NotificationRouter;
pub use rate_limit::UserLocks;
