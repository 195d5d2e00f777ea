use common::DateRange;

use crate::record::SaleRecord;

/// Counts records sold by `department` on a day inside `range`.
///
/// Dates are compared at day granularity whatever time the record carries.
pub fn count_by_date_range_and_department(
    records: &[SaleRecord],
    range: &DateRange,
    department: &str,
) -> usize {
    records
        .iter()
        .filter(|r| range.contains_day(r.date.day()) && r.department == department)
        .count()
}
