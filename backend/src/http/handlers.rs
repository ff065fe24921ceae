//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{extract::State, Json};

use super::dto::{
    BillingScheduleResponse, BudgetResponse, ForecastRequest, HealthResponse, MonthlyTotalDto,
    ScopeValueEntry, ScopeValuesResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::billing;
use crate::services::budget;
use crate::services::valuation::{DEFAULT_SCOPE_VALUE, SCOPE_VALUES};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

// =============================================================================
// Forecast Generation
// =============================================================================

/// POST /v1/billing-schedule
///
/// Generate the month-by-month billing forecast for the supplied scopes.
/// When no anchor date is supplied the server's current date is used.
pub async fn generate_billing_schedule(
    Json(request): Json<ForecastRequest>,
) -> HandlerResult<BillingScheduleResponse> {
    let anchor_date = request
        .anchor_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let ledger = billing::generate(&request.scopes, anchor_date)?;

    let monthly = ledger
        .monthly
        .iter()
        .map(|bucket| MonthlyTotalDto {
            month: bucket.label.clone(),
            total: bucket.total,
            event_count: bucket.events.len(),
        })
        .collect();

    Ok(Json(BillingScheduleResponse {
        project_number: request.project_number,
        anchor_date,
        total_billed: ledger.total_billed(),
        events: ledger.detail_rows(),
        monthly,
        monthly_summary: ledger.summary_rows(),
    }))
}

/// POST /v1/budget
///
/// Generate the internal cost-code budget for the supplied scopes.
pub async fn generate_budget(
    Json(request): Json<ForecastRequest>,
) -> HandlerResult<BudgetResponse> {
    let lines = budget::generate_internal_budget(&request.scopes)?;
    let total_cost = budget::budget_total(&lines);

    Ok(Json(BudgetResponse {
        project_number: request.project_number,
        lines,
        total_cost,
    }))
}

// =============================================================================
// Reference Data
// =============================================================================

/// GET /v1/scope-values
///
/// Expose the scope valuation table used by the forecast.
pub async fn get_scope_values() -> HandlerResult<ScopeValuesResponse> {
    let values = SCOPE_VALUES
        .iter()
        .map(|(category, value)| ScopeValueEntry {
            category: category.to_string(),
            value: *value,
        })
        .collect();

    Ok(Json(ScopeValuesResponse {
        values,
        default_value: DEFAULT_SCOPE_VALUE,
    }))
}
