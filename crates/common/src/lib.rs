//! Shared value types for the license sales query service.

pub mod types;

pub use types::{DateRange, Metric, ParseMetricError};
