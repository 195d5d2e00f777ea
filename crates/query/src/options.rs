//! Engine options: fault handling and date comparison.

use std::str::FromStr;

use thiserror::Error;

/// What the engine does with a raw row that fails coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaultPolicy {
    /// Drop faulty rows.
    Skip,
    /// Replace unparsable seats or amount with 0 and keep the row.
    /// Rows with a bad date, department or software are dropped.
    #[default]
    ZeroFill,
    /// Fail the query on the first faulty row.
    Abort,
}

impl FaultPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultPolicy::Skip => "skip",
            FaultPolicy::ZeroFill => "zero-fill",
            FaultPolicy::Abort => "abort",
        }
    }
}

impl std::fmt::Display for FaultPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown fault policy: {0} (expected \"skip\", \"zero-fill\" or \"abort\")")]
pub struct ParseFaultPolicyError(pub String);

impl FromStr for FaultPolicy {
    type Err = ParseFaultPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(FaultPolicy::Skip),
            "zero-fill" | "zero_fill" | "zerofill" => Ok(FaultPolicy::ZeroFill),
            "abort" => Ok(FaultPolicy::Abort),
            _ => Err(ParseFaultPolicyError(s.to_string())),
        }
    }
}

/// How record dates are compared against a date range.
///
/// Counting by department always compares calendar days. Ranking and the
/// department breakdown compare the full timestamp under `AsSourced`, so a
/// timestamped sale on the end day falls outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateMode {
    #[default]
    AsSourced,
    /// Every range comparison uses the calendar day.
    Day,
}

impl DateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateMode::AsSourced => "as-sourced",
            DateMode::Day => "day",
        }
    }
}

impl std::fmt::Display for DateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown date mode: {0} (expected \"as-sourced\" or \"day\")")]
pub struct ParseDateModeError(pub String);

impl FromStr for DateMode {
    type Err = ParseDateModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "as-sourced" | "as_sourced" => Ok(DateMode::AsSourced),
            "day" => Ok(DateMode::Day),
            _ => Err(ParseDateModeError(s.to_string())),
        }
    }
}

/// Options applied to every query an engine answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    pub fault_policy: FaultPolicy,
    pub date_mode: DateMode,
}

impl QueryOptions {
    pub fn new(fault_policy: FaultPolicy, date_mode: DateMode) -> Self {
        Self {
            fault_policy,
            date_mode,
        }
    }
}
