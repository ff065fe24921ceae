//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types shared by the service layer, the CSV
//! export, and the HTTP API. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::models::billing::{BillingEvent, Milestone, ALL_SCOPES};
pub use crate::models::month::{MonthKey, MonthlyBucket};
pub use crate::models::scope::{Scope, ScopeError, VendorMatch, VendorRecord};
pub use crate::services::budget::BudgetLine;
pub use crate::services::ledger::{Ledger, LedgerRow, MonthlySummaryRow};

use serde::{Deserialize, Serialize};

/// Project identifier assigned during intake (e.g. "25-001").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectNumber(pub String);

impl ProjectNumber {
    pub fn new(value: impl Into<String>) -> Self {
        ProjectNumber(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectNumber {
    fn from(value: String) -> Self {
        ProjectNumber(value)
    }
}

impl From<&str> for ProjectNumber {
    fn from(value: &str) -> Self {
        ProjectNumber(value.to_string())
    }
}
