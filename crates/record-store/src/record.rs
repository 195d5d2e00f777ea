use serde::{Deserialize, Serialize};

/// One row of the sales file, exactly as found in storage.
///
/// Every column is kept as its raw string; a column that is absent from the
/// header or empty in the row is `None`. Typing happens in the query engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSaleRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub software: Option<String>,
    #[serde(default)]
    pub seats: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

impl RawSaleRecord {
    /// Creates a record with every column present.
    pub fn new(
        date: impl Into<String>,
        department: impl Into<String>,
        software: impl Into<String>,
        seats: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date.into()),
            department: Some(department.into()),
            software: Some(software.into()),
            seats: Some(seats.into()),
            amount: Some(amount.into()),
        }
    }
}
