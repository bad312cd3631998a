//! Unified error types for the changeset comments core
//!
//! Two layers, mirroring the port/service split:
//! - `DomainError`: what port implementations return (storage faults, missing rows)
//! - `CommentError`: operation-level outcomes surfaced to the calling layer
//! - `DispatchError`: notification dispatcher failures, isolated per recipient

use thiserror::Error;

/// Errors returned by repository and directory ports
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Errors returned by the notification dispatcher port
///
/// These never propagate out of the creation path; the router logs them
/// and moves on to the next recipient.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Queue rejected notification: {0}")]
    QueueRejected(String),

    #[error("Dispatch backend unavailable: {0}")]
    Unavailable(String),
}

/// Operation-level errors for comment creation and moderation
///
/// When multiple conditions hold at once, precedence is:
/// Unauthorized > NotFound > Conflict > BadRequest > Forbidden > TooManyRequests.
/// Each is terminal; none are retried internally. Storage faults collapse
/// into `Internal` rather than any of the user-visible variants.
#[derive(Debug, Error)]
pub enum CommentError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Too many requests: comment quota exhausted")]
    TooManyRequests,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for CommentError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(msg) => CommentError::NotFound(msg),
            DomainError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                CommentError::Internal(msg)
            }
        }
    }
}
