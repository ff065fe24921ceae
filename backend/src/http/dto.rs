//! Data Transfer Objects for the HTTP API.
//!
//! The domain types already derive Serialize/Deserialize; this module adds
//! the request/response envelopes specific to the REST endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{BudgetLine, LedgerRow, MonthlySummaryRow, Scope};

/// Request body for the forecast-generation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub project_number: Option<String>,
    /// Project anchor date; the server's current date is used when absent.
    #[serde(default)]
    pub anchor_date: Option<NaiveDate>,
    pub scopes: Vec<Scope>,
}

/// Monthly totals without the per-event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTotalDto {
    pub month: String,
    pub total: f64,
    pub event_count: usize,
}

/// Response body for POST /v1/billing-schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingScheduleResponse {
    pub project_number: Option<String>,
    pub anchor_date: NaiveDate,
    pub total_billed: f64,
    pub events: Vec<LedgerRow>,
    pub monthly: Vec<MonthlyTotalDto>,
    pub monthly_summary: Vec<MonthlySummaryRow>,
}

/// Response body for POST /v1/budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub project_number: Option<String>,
    pub lines: Vec<BudgetLine>,
    pub total_cost: f64,
}

/// One entry of the scope valuation table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeValueEntry {
    pub category: String,
    pub value: f64,
}

/// Response body for GET /v1/scope-values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeValuesResponse {
    pub values: Vec<ScopeValueEntry>,
    pub default_value: f64,
}

/// Response body for GET /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
