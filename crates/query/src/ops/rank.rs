use common::{DateRange, Metric};

use super::{OrderedTotals, in_range};
use crate::options::DateMode;
use crate::record::SaleRecord;
use crate::{QueryError, Result};

/// Totals `metric` per software inside `range`, highest first.
///
/// Equal totals keep the order in which each software was first seen.
pub fn ranking(
    records: &[SaleRecord],
    range: &DateRange,
    metric: Metric,
    mode: DateMode,
) -> Vec<(String, u64)> {
    let mut totals = OrderedTotals::default();
    for record in records.iter().filter(|r| in_range(r, range, mode)) {
        let value = match metric {
            Metric::Quantity => record.seats,
            Metric::Price => record.amount,
        };
        totals.add(&record.software, value);
    }

    let mut ranked = totals.into_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Returns the software at 1-based rank `n` of [`ranking`].
pub fn rank_by_metric(
    records: &[SaleRecord],
    range: &DateRange,
    metric: Metric,
    n: i64,
    mode: DateMode,
) -> Result<String> {
    let mut ranked = ranking(records, range, metric, mode);
    let available = ranked.len();

    let index = usize::try_from(n)
        .ok()
        .filter(|&n| n >= 1 && n <= available)
        .ok_or(QueryError::InvalidRank { n, available })?;

    Ok(ranked.swap_remove(index - 1).0)
}
