use std::collections::BTreeMap;

use chrono::Datelike;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::record::SaleRecord;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Seats sold per month, keyed by month number (1 = January).
///
/// Only months with at least one sale are present. Serialises as an object
/// keyed by English month name, in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlySales {
    months: BTreeMap<u32, u64>,
}

impl MonthlySales {
    /// Seats sold in the month called `name`, if any were sold.
    pub fn get(&self, name: &str) -> Option<u64> {
        let month = MONTH_NAMES.iter().position(|m| *m == name)? as u32 + 1;
        self.months.get(&month).copied()
    }

    /// Iterates `(month name, seats)` in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.months
            .iter()
            .map(|(&month, &seats)| (MONTH_NAMES[(month - 1) as usize], seats))
    }

    /// Seats sold over the whole year, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.months.values().fold(0, |sum, &seats| sum.saturating_add(seats))
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

impl Serialize for MonthlySales {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.months.len()))?;
        for (name, seats) in self.iter() {
            map.serialize_entry(name, &seats)?;
        }
        map.end()
    }
}

/// Sums seats of `software` per month of `year`.
///
/// Records without a readable timestamp are left out.
pub fn monthly_sales(records: &[SaleRecord], software: &str, year: i32) -> MonthlySales {
    let mut months = BTreeMap::new();
    for record in records.iter().filter(|r| r.software == software) {
        let Some(instant) = record.date.instant() else {
            continue;
        };
        if instant.year() != year {
            continue;
        }
        let seats = months.entry(instant.month()).or_insert(0u64);
        *seats = seats.saturating_add(record.seats);
    }
    MonthlySales { months }
}

#[cfg(test)]
mod tests {
    use record_store::RawSaleRecord;

    use super::*;

    fn record(date: &str, software: &str, seats: &str) -> SaleRecord {
        SaleRecord::parse(1, &RawSaleRecord::new(date, "Sales", software, seats, "0")).unwrap()
    }

    #[test]
    fn groups_seats_by_month() {
        let records = vec![
            record("2023-01-05", "X", "3"),
            record("2023-01-20", "X", "2"),
            record("2023-03-01", "X", "7"),
            record("2023-03-02", "Y", "100"),
            record("2022-03-02", "X", "100"),
        ];
        let sales = monthly_sales(&records, "X", 2023);

        assert_eq!(sales.get("January"), Some(5));
        assert_eq!(sales.get("March"), Some(7));
        assert_eq!(sales.get("February"), None);
        assert_eq!(sales.total(), 12);
        assert_eq!(sales.len(), 2);
    }

    #[test]
    fn minute_precision_counts_and_unreadable_time_does_not() {
        let records = vec![
            record("2023-01-05T10:00", "X", "3"),
            record("2023-01-06 10:00", "X", "2"),
            record("2023-01-07 at noon", "X", "100"),
        ];
        let sales = monthly_sales(&records, "X", 2023);
        assert_eq!(sales.get("January"), Some(5));
    }

    #[test]
    fn total_saturates() {
        let max = u64::MAX.to_string();
        let records = vec![record("2023-01-05", "X", &max), record("2023-02-05", "X", &max)];
        assert_eq!(monthly_sales(&records, "X", 2023).total(), u64::MAX);
    }

    #[test]
    fn unknown_software_is_empty() {
        let records = vec![record("2023-01-05", "X", "3")];
        assert!(monthly_sales(&records, "Nope", 2023).is_empty());
    }

    #[test]
    fn serializes_month_names_in_calendar_order() {
        let records = vec![
            record("2023-12-05", "X", "1"),
            record("2023-02-05", "X", "2"),
        ];
        let json = serde_json::to_string(&monthly_sales(&records, "X", 2023)).unwrap();
        assert_eq!(json, r#"{"February":2,"December":1}"#);
    }
}
