use std::collections::{BTreeMap, BTreeSet};

use gantry_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Permission;

/// Stable role identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoleId(Uuid);

impl RoleId {
    /// Creates a new random role identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a role identifier from an existing UUID value.
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

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Built-in roles applied to principals without an explicit membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinRole {
    /// Applied to logged-in principals on public projects they are not members of.
    NonMember,
    /// Applied to the anonymous principal.
    Anonymous,
}

impl BuiltinRole {
    /// Returns a stable storage value for this built-in role kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonMember => "non_member",
            Self::Anonymous => "anonymous",
        }
    }
}

/// Named bundle of permissions assignable to a principal within a project scope.
///
/// Roles are immutable once loaded: resolution never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: NonEmptyString,
    builtin: Option<BuiltinRole>,
    permissions: BTreeSet<Permission>,
}

impl Role {
    /// Creates a givable (non-built-in) role.
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        permissions: BTreeSet<Permission>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            builtin: None,
            permissions,
        })
    }

    /// Creates one of the built-in roles.
    #[must_use]
    pub fn builtin(id: RoleId, kind: BuiltinRole, permissions: BTreeSet<Permission>) -> Self {
        Self {
            id,
            name: NonEmptyString::new(kind.as_str()).unwrap_or_else(|_| unreachable!()),
            builtin: Some(kind),
            permissions,
        }
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the built-in kind when the role is not a givable one.
    #[must_use]
    pub fn builtin_kind(&self) -> Option<BuiltinRole> {
        self.builtin
    }

    /// Returns whether this is a built-in role.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        self.builtin.is_some()
    }

    /// Returns whether the role carries the permission flag.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns the permission flags carried by the role.
    #[must_use]
    pub fn permissions(&self) -> &BTreeSet<Permission> {
        &self.permissions
    }
}

/// Set of effective roles resolved for one (principal, project) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    roles: BTreeMap<RoleId, Role>,
}

impl RoleSet {
    /// Creates an empty role set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: BTreeMap::new(),
        }
    }

    /// Inserts a role, replacing any previous role with the same id.
    pub fn insert(&mut self, role: Role) {
        self.roles.insert(role.id(), role);
    }

    /// Returns whether no role is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns the number of distinct roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns the ids of every role in the set.
    #[must_use]
    pub fn ids(&self) -> BTreeSet<RoleId> {
        self.roles.keys().copied().collect()
    }

    /// Returns whether any role id is shared with the given allow-list.
    #[must_use]
    pub fn intersects(&self, role_ids: &BTreeSet<RoleId>) -> bool {
        role_ids.iter().any(|id| self.roles.contains_key(id))
    }

    /// Returns whether any role in the set carries the permission flag.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.roles
            .values()
            .any(|role| role.has_permission(permission))
    }

    /// Iterates over the roles in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = Self::new();
        for role in iter {
            set.insert(role);
        }
        set
    }
}
