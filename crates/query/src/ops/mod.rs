//! The four aggregate operations, as pure functions over typed records.
//!
//! Each function performs one full scan of the slice it is given and keeps
//! no state between calls.

mod count;
mod monthly;
mod percentage;
mod rank;

use std::collections::HashMap;

use common::DateRange;

use crate::options::DateMode;
use crate::record::SaleRecord;

pub use count::count_by_date_range_and_department;
pub use monthly::{MONTH_NAMES, MonthlySales, monthly_sales};
pub use percentage::{DepartmentBreakdown, DepartmentShare, SoftwareShare, percentage_by_department};
pub use rank::{rank_by_metric, ranking};

/// Tests a record against a range for ranking and the department breakdown.
///
/// Under `AsSourced` a record without a readable timestamp never matches.
fn in_range(record: &SaleRecord, range: &DateRange, mode: DateMode) -> bool {
    match mode {
        DateMode::AsSourced => record
            .date
            .instant()
            .is_some_and(|instant| range.contains_instant(instant)),
        DateMode::Day => range.contains_day(record.date.day()),
    }
}

/// Running totals keyed by name, remembering first-encounter order.
#[derive(Debug, Default)]
struct OrderedTotals {
    index: HashMap<String, usize>,
    totals: Vec<(String, u64)>,
}

impl OrderedTotals {
    fn add(&mut self, key: &str, value: u64) {
        match self.index.get(key) {
            Some(&i) => self.totals[i].1 = self.totals[i].1.saturating_add(value),
            None => {
                self.index.insert(key.to_string(), self.totals.len());
                self.totals.push((key.to_string(), value));
            }
        }
    }

    /// Sum over every key, widened so that it cannot overflow.
    fn total(&self) -> u128 {
        self.totals.iter().map(|(_, v)| u128::from(*v)).sum()
    }

    fn into_vec(self) -> Vec<(String, u64)> {
        self.totals
    }
}
