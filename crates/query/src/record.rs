//! Typed sale records and coercion from raw storage rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use record_store::RawSaleRecord;
use thiserror::Error;

/// Column of a sale record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Department,
    Software,
    Seats,
    Amount,
}

impl Field {
    /// Returns the column name as it appears in the storage header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Department => "department",
            Field::Software => "software",
            Field::Seats => "seats",
            Field::Amount => "amount",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw row that could not be coerced into a [`SaleRecord`].
///
/// `row` is the 1-based index of the data row (the header is not counted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowFault {
    #[error("row {row}: missing {field}")]
    MissingField { row: usize, field: Field },

    #[error("row {row}: invalid date {raw:?}")]
    InvalidDate { row: usize, raw: String },

    #[error("row {row}: invalid {field} {raw:?}")]
    InvalidNumber {
        row: usize,
        field: Field,
        raw: String,
    },
}

impl RowFault {
    /// Returns the 1-based data row index.
    pub fn row(&self) -> usize {
        match self {
            RowFault::MissingField { row, .. }
            | RowFault::InvalidDate { row, .. }
            | RowFault::InvalidNumber { row, .. } => *row,
        }
    }

    /// Returns the column at fault.
    pub fn field(&self) -> Field {
        match self {
            RowFault::MissingField { field, .. } | RowFault::InvalidNumber { field, .. } => *field,
            RowFault::InvalidDate { .. } => Field::Date,
        }
    }

    /// Returns a short label for the fault kind, used in metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RowFault::MissingField { .. } => "missing_field",
            RowFault::InvalidDate { .. } => "invalid_date",
            RowFault::InvalidNumber { .. } => "invalid_number",
        }
    }
}

/// Date of a sale, kept at two precisions.
///
/// `day` is the calendar day read from the first ten characters of the raw
/// value. `instant` is the full timestamp, absent when the rest of the value
/// is not a timestamp any known format describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordDate {
    instant: Option<NaiveDateTime>,
    day: NaiveDate,
}

impl RecordDate {
    /// Parses a raw date value. Fails only when the leading day is invalid.
    ///
    /// The instant accepts RFC 3339 and `+hhmm` offsets (normalised to UTC),
    /// `YYYY-MM-DDTHH:MM[:SS[.f]]`, `YYYY-MM-DD HH:MM[:SS[.f]]` and a bare
    /// `YYYY-MM-DD` (taken at midnight).
    pub fn parse(raw: &str) -> Option<Self> {
        let prefix: String = raw.chars().take(10).collect();
        let day = NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").ok()?;
        Some(Self {
            instant: parse_instant(raw),
            day,
        })
    }

    /// Returns the full timestamp, if the raw value held one.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.instant
    }

    /// Returns the truncated calendar day.
    pub fn day(&self) -> NaiveDate {
        self.day
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.naive_utc());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parses a count the permissive way: surrounding whitespace and a leading
/// `+` are ignored, then the leading run of ASCII digits is taken.
///
/// `"12abc"` yields 12 and `"3.9"` yields 3. No leading digit, a minus sign
/// or overflow yields `None`.
pub fn parse_count(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    unsigned[..digits_len].parse().ok()
}

/// A fully typed sale record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    pub date: RecordDate,
    pub department: String,
    pub software: String,
    pub seats: u64,
    pub amount: u64,
}

impl SaleRecord {
    /// Coerces a raw row, failing on the first fault.
    pub fn parse(row: usize, raw: &RawSaleRecord) -> Result<Self, RowFault> {
        Self::parse_with(row, raw, Err)
    }

    /// Coerces a raw row, handing numeric faults to `on_numeric_fault`.
    ///
    /// The callback either supplies a replacement value or returns the fault
    /// to fail the row. Faults in date, department or software always fail.
    pub fn parse_with(
        row: usize,
        raw: &RawSaleRecord,
        mut on_numeric_fault: impl FnMut(RowFault) -> Result<u64, RowFault>,
    ) -> Result<Self, RowFault> {
        let raw_date = required(row, Field::Date, raw.date.as_deref())?;
        let date = RecordDate::parse(raw_date).ok_or_else(|| RowFault::InvalidDate {
            row,
            raw: raw_date.to_string(),
        })?;
        let department = required(row, Field::Department, raw.department.as_deref())?;
        let software = required(row, Field::Software, raw.software.as_deref())?;

        let seats =
            count(row, Field::Seats, raw.seats.as_deref()).or_else(&mut on_numeric_fault)?;
        let amount =
            count(row, Field::Amount, raw.amount.as_deref()).or_else(&mut on_numeric_fault)?;

        Ok(Self {
            date,
            department: department.to_string(),
            software: software.to_string(),
            seats,
            amount,
        })
    }
}

fn required(row: usize, field: Field, value: Option<&str>) -> Result<&str, RowFault> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RowFault::MissingField { row, field }),
    }
}

fn count(row: usize, field: Field, value: Option<&str>) -> Result<u64, RowFault> {
    let raw = required(row, field, value)?;
    parse_count(raw).ok_or_else(|| RowFault::InvalidNumber {
        row,
        field,
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parse_count_is_permissive() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count(" 7 "), Some(7));
        assert_eq!(parse_count("+5"), Some(5));
        assert_eq!(parse_count("12abc"), Some(12));
        assert_eq!(parse_count("3.9"), Some(3));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("99999999999999999999999"), None);
    }

    #[test]
    fn record_date_bare_day_is_midnight() {
        let date = RecordDate::parse("2023-01-05").unwrap();
        assert_eq!(date.day(), day("2023-01-05"));
        assert_eq!(date.instant(), day("2023-01-05").and_hms_opt(0, 0, 0));
    }

    #[test]
    fn record_date_keeps_time_of_day() {
        let date = RecordDate::parse("2023-01-05 14:30:00").unwrap();
        assert_eq!(date.day(), day("2023-01-05"));
        assert_eq!(date.instant(), day("2023-01-05").and_hms_opt(14, 30, 0));

        let iso = RecordDate::parse("2023-01-05T14:30:00.250").unwrap();
        assert_eq!(iso.day(), day("2023-01-05"));
    }

    #[test]
    fn record_date_rfc3339_truncates_day_before_offset() {
        let date = RecordDate::parse("2023-01-05T23:30:00-05:00").unwrap();
        assert_eq!(date.day(), day("2023-01-05"));
        assert_eq!(date.instant(), day("2023-01-06").and_hms_opt(4, 30, 0));
    }

    #[test]
    fn record_date_accepts_minute_precision_and_compact_offsets() {
        for raw in ["2023-01-05T10:00", "2023-01-05 10:00", "2023-01-05T10:00:00.000+0000"] {
            let date = RecordDate::parse(raw).unwrap();
            assert_eq!(date.day(), day("2023-01-05"), "{raw}");
            assert_eq!(date.instant(), day("2023-01-05").and_hms_opt(10, 0, 0), "{raw}");
        }
    }

    #[test]
    fn record_date_keeps_day_when_time_is_unreadable() {
        let date = RecordDate::parse("2023-01-05 at noon").unwrap();
        assert_eq!(date.day(), day("2023-01-05"));
        assert_eq!(date.instant(), None);
    }

    #[test]
    fn record_date_rejects_garbage() {
        assert!(RecordDate::parse("yesterday").is_none());
        assert!(RecordDate::parse("2023-13-01").is_none());
        assert!(RecordDate::parse("").is_none());
    }

    #[test]
    fn parse_accepts_complete_row() {
        let raw = RawSaleRecord::new("2023-01-05", "Sales", "X", "3", "30");
        let record = SaleRecord::parse(1, &raw).unwrap();
        assert_eq!(record.department, "Sales");
        assert_eq!(record.software, "X");
        assert_eq!(record.seats, 3);
        assert_eq!(record.amount, 30);
        assert_eq!(record.date.day(), day("2023-01-05"));
    }

    #[test]
    fn parse_reports_missing_field_with_row() {
        let raw = RawSaleRecord {
            department: None,
            ..RawSaleRecord::new("2023-01-05", "Sales", "X", "3", "30")
        };
        let fault = SaleRecord::parse(4, &raw).unwrap_err();
        assert_eq!(
            fault,
            RowFault::MissingField {
                row: 4,
                field: Field::Department
            }
        );
        assert_eq!(fault.row(), 4);
    }

    #[test]
    fn parse_reports_invalid_date() {
        let raw = RawSaleRecord::new("soon", "Sales", "X", "3", "30");
        let fault = SaleRecord::parse(2, &raw).unwrap_err();
        assert_eq!(fault.field(), Field::Date);
        assert_eq!(fault.kind(), "invalid_date");
    }

    #[test]
    fn parse_with_fills_numeric_faults() {
        let raw = RawSaleRecord::new("2023-01-05", "Sales", "X", "n/a", "oops");
        let mut faults = Vec::new();
        let record = SaleRecord::parse_with(1, &raw, |fault| {
            faults.push(fault);
            Ok(0)
        })
        .unwrap();

        assert_eq!(record.seats, 0);
        assert_eq!(record.amount, 0);
        assert_eq!(faults.len(), 2);
        assert_eq!(faults[0].field(), Field::Seats);
        assert_eq!(faults[1].field(), Field::Amount);
    }

    #[test]
    fn parse_with_never_fills_identity_faults() {
        let raw = RawSaleRecord {
            software: Some(String::new()),
            ..RawSaleRecord::new("2023-01-05", "Sales", "X", "3", "30")
        };
        let result = SaleRecord::parse_with(1, &raw, |_| Ok(0));
        assert!(matches!(
            result,
            Err(RowFault::MissingField {
                field: Field::Software,
                ..
            })
        ));
    }
}
