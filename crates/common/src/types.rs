use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive calendar-date range used to filter sale records.
///
/// A range whose start lies after its end is empty: it matches nothing
/// rather than being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start..=end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true when the range matches no day at all.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Tests a calendar day against the range.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Tests a timestamp against the range bounds taken at midnight.
    ///
    /// A timestamp later than midnight on the end day falls outside.
    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        self.start.and_time(chrono::NaiveTime::MIN) <= instant
            && instant <= self.end.and_time(chrono::NaiveTime::MIN)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Basis on which software products are ranked.
///
/// Deserialises through [`FromStr`], so unknown names fail with
/// [`ParseMetricError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Metric {
    /// Sum of seats sold.
    Quantity,
    /// Sum of amounts paid.
    Price,
}

impl Metric {
    /// Returns the wire name of the metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Quantity => "quantity",
            Metric::Price => "price",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known metric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown metric: {0} (expected \"quantity\" or \"price\")")]
pub struct ParseMetricError(pub String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quantity" => Ok(Metric::Quantity),
            "price" => Ok(Metric::Price),
            other => Err(ParseMetricError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Metric {
    type Error = ParseMetricError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
