use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::RecordLoader;
use crate::{RawSaleRecord, Result};

/// In-memory record loader for testing.
///
/// Holds its rows in memory and provides the same interface as the CSV
/// loader. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryRecordLoader {
    records: Arc<RwLock<Vec<RawSaleRecord>>>,
}

impl InMemoryRecordLoader {
    /// Creates a new empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader holding the given rows.
    pub fn with_records(records: Vec<RawSaleRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Appends a row.
    pub async fn push(&self, record: RawSaleRecord) {
        self.records.write().await.push(record);
    }

    /// Returns the number of rows held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when no rows are held.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Removes all rows.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl RecordLoader for InMemoryRecordLoader {
    async fn load(&self) -> Result<Vec<RawSaleRecord>> {
        Ok(self.records.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_returns_rows_in_insertion_order() {
        let loader = InMemoryRecordLoader::new();
        loader
            .push(RawSaleRecord::new("2023-01-05", "Sales", "X", "3", "30"))
            .await;
        loader
            .push(RawSaleRecord::new("2023-01-10", "Sales", "Y", "2", "20"))
            .await;

        let records = loader.load().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].software.as_deref(), Some("X"));
        assert_eq!(records[1].software.as_deref(), Some("Y"));
    }

    #[tokio::test]
    async fn clones_share_rows() {
        let loader = InMemoryRecordLoader::new();
        let clone = loader.clone();
        clone
            .push(RawSaleRecord::new("2023-01-05", "Sales", "X", "3", "30"))
            .await;
        assert_eq!(loader.len().await, 1);

        loader.clear().await;
        assert!(clone.is_empty().await);
    }
}
