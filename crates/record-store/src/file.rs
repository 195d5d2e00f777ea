use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::store::RecordLoader;
use crate::{LoadError, RawSaleRecord, Result};

/// Loads sale records from a CSV file with a header row.
///
/// Columns are matched by header name (`date`, `department`, `software`,
/// `seats`, `amount`); extra columns are ignored and whitespace around each
/// field is trimmed. The whole file is read on every call.
#[derive(Debug, Clone)]
pub struct CsvRecordLoader {
    path: PathBuf,
}

impl CsvRecordLoader {
    /// Creates a loader reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parses CSV bytes into raw records, preserving row order.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<RawSaleRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    for row in reader.deserialize::<RawSaleRecord>() {
        records.push(row?);
    }
    Ok(records)
}

#[async_trait]
impl RecordLoader for CsvRecordLoader {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<RawSaleRecord>> {
        let start = std::time::Instant::now();

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        let records = parse_csv(&bytes)?;

        let duration = start.elapsed().as_secs_f64();
        metrics::histogram!("record_load_duration_seconds").record(duration);
        metrics::counter!("records_loaded_total").increment(records.len() as u64);
        tracing::debug!(records = records.len(), duration, "loaded sale records");

        Ok(records)
    }
}
