use async_trait::async_trait;

use crate::{RawSaleRecord, Result};

/// Source of the full sales record set.
///
/// Every call reads storage afresh; implementations keep no derived state
/// between calls. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait RecordLoader: Send + Sync {
    /// Loads every record, in the order encountered in storage.
    async fn load(&self) -> Result<Vec<RawSaleRecord>>;
}

