use std::collections::HashMap;

use common::DateRange;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{OrderedTotals, in_range};
use crate::options::DateMode;
use crate::record::SaleRecord;

/// One software's share of its department's seats.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareShare {
    pub software: String,
    pub item_count: u64,
    /// Percentage with two decimals, e.g. `"60.00"`.
    pub percentage: String,
}

/// Seat shares of every software sold by one department.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DepartmentShare {
    pub department: String,
    pub items: Vec<SoftwareShare>,
}

impl DepartmentShare {
    pub fn total_seats(&self) -> u128 {
        self.items.iter().map(|i| u128::from(i.item_count)).sum()
    }
}

/// Per-department seat shares, in first-encounter order.
///
/// Serialises as an object keyed by department name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DepartmentBreakdown {
    departments: Vec<DepartmentShare>,
}

impl DepartmentBreakdown {
    pub fn get(&self, department: &str) -> Option<&DepartmentShare> {
        self.departments.iter().find(|d| d.department == department)
    }

    pub fn departments(&self) -> &[DepartmentShare] {
        &self.departments
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

impl Serialize for DepartmentBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.departments.len()))?;
        for share in &self.departments {
            map.serialize_entry(&share.department, share)?;
        }
        map.end()
    }
}

/// Computes each software's percentage of its department's seats inside `range`.
///
/// Departments with no matching record are absent. A department whose
/// seats total zero reports `"0.00"` for every software.
pub fn percentage_by_department(
    records: &[SaleRecord],
    range: &DateRange,
    mode: DateMode,
) -> DepartmentBreakdown {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sold: Vec<(&str, OrderedTotals)> = Vec::new();

    for record in records.iter().filter(|r| in_range(r, range, mode)) {
        let slot = *index.entry(record.department.as_str()).or_insert_with(|| {
            sold.push((record.department.as_str(), OrderedTotals::default()));
            sold.len() - 1
        });
        sold[slot].1.add(&record.software, record.seats);
    }

    let departments = sold
        .into_iter()
        .map(|(department, totals)| {
            let total = totals.total();
            let items = totals
                .into_vec()
                .into_iter()
                .map(|(software, item_count)| SoftwareShare {
                    software,
                    item_count,
                    percentage: format_percentage(item_count, total),
                })
                .collect();
            DepartmentShare {
                department: department.to_string(),
                items,
            }
        })
        .collect();

    DepartmentBreakdown { departments }
}

fn format_percentage(count: u64, total: u128) -> String {
    let percentage = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };
    format!("{percentage:.2}")
}
