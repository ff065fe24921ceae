use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::billing::BillingEvent;

/// Sortable year-month grouping key.
///
/// Ordering is chronological (year first, then month). The human-readable
/// label is never used for ordering: "February 2025" sorts before
/// "January 2025" lexicographically, so ordering always goes through the
/// numeric key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Billing events grouped into one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub key: MonthKey,
    /// Human-readable "Month Year" label, e.g. "September 2025".
    pub label: String,
    /// Sum of `amount` over the contributing events.
    pub total: f64,
    pub events: Vec<BillingEvent>,
}
