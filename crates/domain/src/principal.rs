use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::BuiltinRole;

/// Stable principal identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    /// Creates a new random principal identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a principal identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Actor initiating a request: a known user or the anonymous principal.
///
/// The principal is passed explicitly through every resolution call; there is
/// no ambient current-user state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Principal {
    /// Unauthenticated actor.
    Anonymous,
    /// Authenticated user account.
    User {
        /// Stable account identifier.
        id: PrincipalId,
        /// Whether the account holds site-wide administration rights.
        is_admin: bool,
    },
}

impl Principal {
    /// Creates the anonymous principal.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Creates a regular user principal.
    #[must_use]
    pub fn user(id: PrincipalId) -> Self {
        Self::User {
            id,
            is_admin: false,
        }
    }

    /// Creates an administrator principal.
    #[must_use]
    pub fn admin(id: PrincipalId) -> Self {
        Self::User { id, is_admin: true }
    }

    /// Returns the account identifier for user principals.
    #[must_use]
    pub fn id(&self) -> Option<PrincipalId> {
        match self {
            Self::Anonymous => None,
            Self::User { id, .. } => Some(*id),
        }
    }

    /// Returns whether the principal is the anonymous actor.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Returns whether the principal holds site-wide administration rights.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::User { is_admin: true, .. })
    }

    /// Returns the built-in role applied when no explicit membership exists.
    #[must_use]
    pub fn builtin_role(&self) -> BuiltinRole {
        match self {
            Self::Anonymous => BuiltinRole::Anonymous,
            Self::User { .. } => BuiltinRole::NonMember,
        }
    }
}
