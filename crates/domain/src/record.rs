use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use gantry_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{FieldId, FieldOwner, ProjectId};

/// Stable searchable record identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Creates a new random record identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a record identifier from an existing UUID value.
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

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Indexed projection of a domain entity: core text plus custom field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableRecord {
    id: RecordId,
    kind: FieldOwner,
    project_id: ProjectId,
    title: NonEmptyString,
    body: String,
    custom_values: BTreeMap<FieldId, String>,
    updated_at: DateTime<Utc>,
}

impl SearchableRecord {
    /// Creates a validated searchable record projection.
    pub fn new(
        id: RecordId,
        kind: FieldOwner,
        project_id: ProjectId,
        title: impl Into<String>,
        body: impl Into<String>,
        custom_values: BTreeMap<FieldId, String>,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            kind,
            project_id,
            title: NonEmptyString::new(title)?,
            body: body.into(),
            custom_values,
            updated_at,
        })
    }

    /// Returns the record identifier.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the owning entity kind.
    #[must_use]
    pub fn kind(&self) -> FieldOwner {
        self.kind
    }

    /// Returns the owning project.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the record title.
    #[must_use]
    pub fn title(&self) -> &NonEmptyString {
        &self.title
    }

    /// Returns the indexed body text.
    #[must_use]
    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Returns every stored custom field value.
    #[must_use]
    pub fn custom_values(&self) -> &BTreeMap<FieldId, String> {
        &self.custom_values
    }

    /// Returns the stored value for one custom field.
    #[must_use]
    pub fn custom_value(&self, field_id: FieldId) -> Option<&str> {
        self.custom_values.get(&field_id).map(String::as_str)
    }

    /// Returns the ranking timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
