//! Service layer for business logic and orchestration.
//!
//! This module contains the deterministic engine that sits between the
//! parsed analyzer reports and the export/HTTP layers: lead-time extraction,
//! scope valuation, billing-schedule generation, monthly aggregation,
//! ledger rendering, and internal budgeting.

pub mod billing;

pub mod budget;

pub mod lead_times;

pub mod ledger;

pub mod monthly;

pub mod valuation;

pub use billing::{build_billing_events, generate};
pub use budget::generate_internal_budget;
pub use lead_times::extract_lead_times;
pub use ledger::Ledger;
pub use monthly::aggregate_by_month;
pub use valuation::estimate_scope_value;

#[cfg(test)]
#[path = "billing_tests.rs"]
mod billing_tests;
