//! The per-query record set.

use record_store::RawSaleRecord;

use crate::options::FaultPolicy;
use crate::record::{RowFault, SaleRecord};
use crate::{QueryError, Result};

/// Coerced records for a single query, in storage order.
///
/// Built fresh for each query and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<SaleRecord>,
    dropped: usize,
    zero_filled: usize,
}

impl RecordSet {
    /// Coerces raw rows under `policy`.
    ///
    /// Fails with [`QueryError::RowFault`] only when `policy` is `Abort`.
    pub fn build(raw: &[RawSaleRecord], policy: FaultPolicy) -> Result<Self> {
        let mut set = RecordSet {
            records: Vec::with_capacity(raw.len()),
            ..Default::default()
        };

        for (index, raw_record) in raw.iter().enumerate() {
            let row = index + 1;
            let parsed = match policy {
                FaultPolicy::ZeroFill => SaleRecord::parse_with(row, raw_record, |fault| {
                    note_fault(&fault, policy);
                    set.zero_filled += 1;
                    Ok(0)
                }),
                FaultPolicy::Skip | FaultPolicy::Abort => SaleRecord::parse(row, raw_record),
            };

            match parsed {
                Ok(record) => set.records.push(record),
                Err(fault) if policy == FaultPolicy::Abort => {
                    note_fault(&fault, policy);
                    return Err(QueryError::RowFault(fault));
                }
                Err(fault) => {
                    note_fault(&fault, policy);
                    set.dropped += 1;
                }
            }
        }

        Ok(set)
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of raw rows dropped for faults.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of numeric fields replaced with 0.
    pub fn zero_filled(&self) -> usize {
        self.zero_filled
    }
}

fn note_fault(fault: &RowFault, policy: FaultPolicy) {
    metrics::counter!("row_faults_total", "kind" => fault.kind()).increment(1);
    tracing::warn!(row = fault.row(), %fault, %policy, "faulty sale record");
}
