use std::collections::BTreeMap;

use async_trait::async_trait;
use gantry_application::FieldCatalog;
use gantry_core::{AppError, AppResult};
use gantry_domain::{CustomField, FieldId};
use tokio::sync::RwLock;

/// In-memory custom field catalog implementation.
#[derive(Debug, Default)]
pub struct InMemoryFieldCatalog {
    fields: RwLock<BTreeMap<FieldId, CustomField>>,
}

impl InMemoryFieldCatalog {
    /// Creates an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: RwLock::new(BTreeMap::new()),
        }
    }

    /// Stores a field definition.
    pub async fn insert_field(&self, field: CustomField) -> AppResult<()> {
        let mut fields = self.fields.write().await;

        if fields.contains_key(&field.id()) {
            return Err(AppError::Conflict(format!(
                "custom field '{}' already exists",
                field.name().as_str()
            )));
        }

        fields.insert(field.id(), field);
        Ok(())
    }
}

#[async_trait]
impl FieldCatalog for InMemoryFieldCatalog {
    async fn list_fields(&self) -> AppResult<Vec<CustomField>> {
        Ok(self.fields.read().await.values().cloned().collect())
    }

    async fn find_field(&self, field_id: FieldId) -> AppResult<Option<CustomField>> {
        Ok(self.fields.read().await.get(&field_id).cloned())
    }
}
