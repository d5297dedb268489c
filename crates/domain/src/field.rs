use std::collections::BTreeSet;
use std::str::FromStr;

use gantry_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::RoleId;

/// Stable custom field identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FieldId(Uuid);

impl FieldId {
    /// Creates a new random field identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a field identifier from an existing UUID value.
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

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Entity kinds a custom field can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOwner {
    /// Issue records.
    Issue,
    /// Release version records.
    Version,
    /// Principal group records.
    Group,
    /// Project records.
    Project,
    /// Logged time entry records.
    TimeEntry,
}

impl FieldOwner {
    /// Returns a stable storage value for the owner kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Version => "version",
            Self::Group => "group",
            Self::Project => "project",
            Self::TimeEntry => "time_entry",
        }
    }
}

impl FromStr for FieldOwner {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "issue" => Ok(Self::Issue),
            "version" => Ok(Self::Version),
            "group" => Ok(Self::Group),
            "project" => Ok(Self::Project),
            "time_entry" => Ok(Self::TimeEntry),
            _ => Err(AppError::Validation(format!(
                "unknown field owner '{value}'"
            ))),
        }
    }
}

/// Supported custom field value formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFormat {
    /// Single-line string value.
    String,
    /// Multi-line text value.
    Text,
    /// Value picked from a fixed list.
    List,
    /// Integer value.
    Int,
    /// Floating point value.
    Float,
    /// Date value.
    Date,
    /// Boolean value.
    Bool,
}

impl FieldFormat {
    /// Returns a stable storage value for the field format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::List => "list",
            Self::Int => "int",
            Self::Float => "float",
            Self::Date => "date",
            Self::Bool => "bool",
        }
    }

    /// Returns whether values of this format can be text-searched.
    #[must_use]
    pub fn supports_search(&self) -> bool {
        !matches!(self, Self::Int | Self::Float | Self::Date | Self::Bool)
    }
}

impl FromStr for FieldFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "string" => Ok(Self::String),
            "text" => Ok(Self::Text),
            "list" => Ok(Self::List),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "date" => Ok(Self::Date),
            "bool" => Ok(Self::Bool),
            _ => Err(AppError::Validation(format!(
                "unknown field format '{value}'"
            ))),
        }
    }
}

/// User-defined attribute attachable to a domain entity, with optional
/// role-scoped visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    id: FieldId,
    name: NonEmptyString,
    owner: FieldOwner,
    format: FieldFormat,
    searchable: bool,
    visible: bool,
    role_ids: BTreeSet<RoleId>,
}

impl CustomField {
    /// Creates a validated custom field definition.
    ///
    /// The role allow-list is only meaningful for restricted fields and is
    /// cleared when `visible` is set. Formats without text content are never
    /// searchable.
    pub fn new(
        id: FieldId,
        name: impl Into<String>,
        owner: FieldOwner,
        format: FieldFormat,
        searchable: bool,
        visible: bool,
        role_ids: BTreeSet<RoleId>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            owner,
            format,
            searchable: searchable && format.supports_search(),
            visible,
            role_ids: if visible { BTreeSet::new() } else { role_ids },
        })
    }

    /// Returns the field identifier.
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the entity kind the field is attached to.
    #[must_use]
    pub fn owner(&self) -> FieldOwner {
        self.owner
    }

    /// Returns the value format.
    #[must_use]
    pub fn format(&self) -> FieldFormat {
        self.format
    }

    /// Returns whether field values participate in text search.
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Returns whether the field is visible to every principal.
    #[must_use]
    pub fn is_visible_to_all(&self) -> bool {
        self.visible
    }

    /// Returns the role allow-list for restricted fields.
    #[must_use]
    pub fn role_ids(&self) -> &BTreeSet<RoleId> {
        &self.role_ids
    }

    /// Returns whether the field is exposed to a holder of the given roles.
    ///
    /// Administrator short-circuiting is the caller's concern: this checks the
    /// visibility flag and the allow-list intersection only.
    #[must_use]
    pub fn visible_to_roles(&self, role_ids: &BTreeSet<RoleId>) -> bool {
        self.visible || self.role_ids.iter().any(|id| role_ids.contains(id))
    }
}
