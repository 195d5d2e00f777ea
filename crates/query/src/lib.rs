//! Aggregate query engine over license sales records.
//!
//! - [`RecordSet`]: raw rows coerced into [`SaleRecord`]s under a [`FaultPolicy`]
//! - [`ops`]: the four aggregations as pure functions over a record slice
//! - [`QueryEngine`]: loads a fresh record set per query and runs one aggregation

pub mod engine;
pub mod error;
pub mod ops;
pub mod options;
pub mod record;
pub mod record_set;

pub use engine::QueryEngine;
pub use error::{QueryError, Result};
pub use ops::{DepartmentBreakdown, DepartmentShare, MonthlySales, SoftwareShare};
pub use options::{DateMode, FaultPolicy, ParseDateModeError, ParseFaultPolicyError, QueryOptions};
pub use record::{Field, RecordDate, RowFault, SaleRecord};
pub use record_set::RecordSet;
