//! Record loaders for the license sales query service.
//!
//! - [`RecordLoader`] trait: the full, ordered record set on every call
//! - [`CsvRecordLoader`]: reads a CSV file with a header row
//! - [`InMemoryRecordLoader`]: in-memory rows for tests and benches

pub mod error;
pub mod file;
pub mod memory;
pub mod record;
pub mod store;

pub use error::{LoadError, Result};
pub use file::{CsvRecordLoader, parse_csv};
pub use memory::InMemoryRecordLoader;
pub use record::RawSaleRecord;
pub use store::RecordLoader;
