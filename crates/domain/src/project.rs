use gantry_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable project identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Creates a new random project identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a project identifier from an existing UUID value.
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

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Project scoping role assignments, custom field values and searchable records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    identifier: NonEmptyString,
    name: NonEmptyString,
    is_public: bool,
    archived: bool,
}

impl Project {
    /// Creates a validated project.
    ///
    /// The identifier is the stable URL-safe handle: lowercase letters, digits
    /// and dashes only.
    pub fn new(
        id: ProjectId,
        identifier: impl Into<String>,
        name: impl Into<String>,
        is_public: bool,
        archived: bool,
    ) -> AppResult<Self> {
        let identifier = NonEmptyString::new(identifier)?;
        if !identifier
            .as_str()
            .chars()
            .all(|character| character.is_ascii_lowercase() || character.is_ascii_digit() || character == '-')
        {
            return Err(AppError::Validation(format!(
                "project identifier '{}' must contain only lowercase letters, digits and dashes",
                identifier.as_str()
            )));
        }

        Ok(Self {
            id,
            identifier,
            name: NonEmptyString::new(name)?,
            is_public,
            archived,
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the URL-safe handle.
    #[must_use]
    pub fn identifier(&self) -> &NonEmptyString {
        &self.identifier
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns whether the project is readable without a membership.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Returns whether the project has been archived.
    ///
    /// Archived projects grant no roles and are excluded from search.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.archived
    }
}
