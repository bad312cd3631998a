//! User identity and caller types
//!
//! The user account subsystem is external; this core only reads identity,
//! privilege flags, and account status. The auth gateway resolves bearer
//! tokens into a `Caller` before any operation reaches the service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account lifecycle state as reported by the user directory
///
/// Only `Active` accounts receive notifications; suspended and deleted
/// subscribers are silently skipped during fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
    Deleted,
}

impl AccountStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

/// The authenticated caller, as resolved by the external auth gateway
///
/// Operations take `Option<&Caller>`; `None` means no valid identity was
/// presented and maps to `Unauthorized`.
#[derive(Debug, Clone)]
pub struct Caller {
    pub id: UserId,
    pub display_name: String,
    pub is_moderator: bool,
    pub terms_agreed: bool,
}

impl Caller {
    pub fn can_moderate(&self) -> bool {
        self.is_moderator
    }
}

/// Per-request trust inputs for tier classification
#[derive(Debug, Clone, Copy)]
pub struct UserFlags {
    pub is_moderator: bool,
    pub has_open_report: bool,
}
