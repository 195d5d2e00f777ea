//! Query engine: load, coerce, aggregate.

use common::{DateRange, Metric};
use record_store::RecordLoader;

use crate::Result;
use crate::ops::{self, DepartmentBreakdown, MonthlySales};
use crate::options::QueryOptions;
use crate::record_set::RecordSet;

/// Answers aggregate queries over the records its loader provides.
///
/// Every operation loads the full record set afresh, so concurrent queries
/// share nothing but the loader.
pub struct QueryEngine<L: RecordLoader> {
    loader: L,
    options: QueryOptions,
}

impl<L: RecordLoader> QueryEngine<L> {
    /// Creates an engine over `loader`.
    pub fn new(loader: L, options: QueryOptions) -> Self {
        Self { loader, options }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// Loads and coerces a fresh record set.
    pub async fn record_set(&self) -> Result<RecordSet> {
        let raw = self.loader.load().await?;
        let set = RecordSet::build(&raw, self.options.fault_policy)?;
        tracing::debug!(
            records = set.len(),
            dropped = set.dropped(),
            zero_filled = set.zero_filled(),
            "record set built"
        );
        Ok(set)
    }

    /// Counts records of `department` dated inside `range`.
    #[tracing::instrument(skip(self))]
    pub async fn count_by_date_range_and_department(
        &self,
        range: DateRange,
        department: &str,
    ) -> Result<usize> {
        let start = std::time::Instant::now();
        let set = self.record_set().await?;
        let count = ops::count_by_date_range_and_department(set.records(), &range, department);
        observe("count_by_date_range_and_department", start);
        Ok(count)
    }

    /// Returns the software at rank `n` (1-based) by total `metric` inside `range`.
    #[tracing::instrument(skip(self))]
    pub async fn rank_by_metric(&self, range: DateRange, metric: Metric, n: i64) -> Result<String> {
        let start = std::time::Instant::now();
        let set = self.record_set().await?;
        let mode = self.options.date_mode;
        let software = ops::rank_by_metric(set.records(), &range, metric, n, mode);
        observe("rank_by_metric", start);
        software
    }

    /// Computes per-department seat shares inside `range`.
    #[tracing::instrument(skip(self))]
    pub async fn percentage_by_department(&self, range: DateRange) -> Result<DepartmentBreakdown> {
        let start = std::time::Instant::now();
        let set = self.record_set().await?;
        let mode = self.options.date_mode;
        let breakdown = ops::percentage_by_department(set.records(), &range, mode);
        observe("percentage_by_department", start);
        Ok(breakdown)
    }

    /// Sums seats of `software` per month of `year`.
    #[tracing::instrument(skip(self))]
    pub async fn monthly_sales(&self, software: &str, year: i32) -> Result<MonthlySales> {
        let start = std::time::Instant::now();
        let set = self.record_set().await?;
        let sales = ops::monthly_sales(set.records(), software, year);
        observe("monthly_sales", start);
        Ok(sales)
    }
}

fn observe(operation: &'static str, start: std::time::Instant) {
    let duration = start.elapsed().as_secs_f64();
    metrics::counter!("queries_total", "operation" => operation).increment(1);
    metrics::histogram!("query_duration_seconds", "operation" => operation).record(duration);
    tracing::debug!(operation, duration, "query answered");
}
