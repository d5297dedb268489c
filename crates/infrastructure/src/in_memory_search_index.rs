use std::collections::BTreeMap;

use async_trait::async_trait;
use gantry_application::SearchIndex;
use gantry_core::{AppError, AppResult};
use gantry_domain::{RecordId, SearchTokens, SearchableRecord};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory search index implementation.
///
/// Recall only: a record is a candidate when any token occurs in its title,
/// body or any custom field value. Visibility filtering happens in the
/// search service.
#[derive(Debug, Default)]
pub struct InMemorySearchIndex {
    records: RwLock<BTreeMap<RecordId, SearchableRecord>>,
}

impl InMemorySearchIndex {
    /// Creates an empty in-memory index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Stores a record projection.
    pub async fn insert_record(&self, record: SearchableRecord) -> AppResult<()> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.id()) {
            return Err(AppError::Conflict(format!(
                "record '{}' is already indexed",
                record.id()
            )));
        }

        records.insert(record.id(), record);
        Ok(())
    }
}

#[async_trait]
impl SearchIndex for InMemorySearchIndex {
    async fn matching_records(&self, tokens: &SearchTokens) -> AppResult<Vec<SearchableRecord>> {
        let records = self.records.read().await;

        let candidates: Vec<SearchableRecord> = records
            .values()
            .filter(|record| {
                tokens.any_match(record.title().as_str())
                    || tokens.any_match(record.body())
                    || record
                        .custom_values()
                        .values()
                        .any(|value| tokens.any_match(value))
            })
            .cloned()
            .collect();

        debug!(
            tokens = tokens.len(),
            candidates = candidates.len(),
            "index scan"
        );

        Ok(candidates)
    }
}
