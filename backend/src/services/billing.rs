// ============================================================================
// Billing Schedule Generation
// ============================================================================
//
// Builds the predictive billing schedule: four dated milestones per scope
// whose dates chain off one another (only the first is anchored to the
// project start), plus a single project-wide retention line at the end.

use chrono::{Duration, NaiveDate};
use log::{debug, info};

use crate::models::{validate_scopes, BillingEvent, Milestone, Scope, ScopeError, ALL_SCOPES};
use crate::services::lead_times::extract_lead_times;
use crate::services::ledger::Ledger;
use crate::services::monthly::aggregate_by_month;
use crate::services::valuation::estimate_scope_value;

/// Weeks from the project anchor to the submittal milestone.
const SUBMITTAL_OFFSET_WEEKS: i64 = 2;
/// Weeks from material purchase to on-site storage.
const STORAGE_OFFSET_WEEKS: i64 = 2;
/// Weeks from storage to substantially-complete installation.
const INSTALL_OFFSET_WEEKS: i64 = 4;
/// Weeks from the last scheduled milestone to retention release.
const RETENTION_OFFSET_WEEKS: i64 = 8;

/// Lead time assumed when no vendor quoted one in weeks.
pub const DEFAULT_LEAD_TIME_WEEKS: i64 = 12;

/// Generate the full billing forecast for a project.
///
/// This is the engine's single entry point: it builds the date-sorted event
/// list and the monthly aggregate, and returns them as a [`Ledger`]. Given
/// the same scopes and anchor date it always produces the same ledger.
pub fn generate(scopes: &[Scope], anchor_date: NaiveDate) -> Result<Ledger, ScopeError> {
    let events = build_billing_events(scopes, anchor_date)?;
    let monthly = aggregate_by_month(&events);

    info!(
        "Generated {} billing events across {} months for {} scopes",
        events.len(),
        monthly.len(),
        scopes.len()
    );

    Ok(Ledger::new(events, monthly))
}

/// Build the complete billing event list, sorted by date ascending.
///
/// Per scope, the milestone dates form a dependency chain: submittals at
/// anchor + 2 weeks, materials purchased after the scope's worst-case vendor
/// lead time, storage 2 weeks later, installation 4 weeks after that. Each
/// date is computed from the previous milestone's date, never re-derived
/// from the anchor.
///
/// After the per-scope loop, exactly one Final Retention event is appended
/// at 8 weeks past the latest milestone, valued at 5% of the total project
/// value. With no scopes there is nothing to extend from, so the retention
/// line is skipped and the result is empty.
pub fn build_billing_events(
    scopes: &[Scope],
    anchor_date: NaiveDate,
) -> Result<Vec<BillingEvent>, ScopeError> {
    validate_scopes(scopes)?;

    let mut events = Vec::with_capacity(scopes.len() * 4 + 1);

    for scope in scopes {
        let scope_value = estimate_scope_value(scope);

        let lead_times = extract_lead_times(scope);
        let lead_time_weeks = match lead_times.iter().copied().max() {
            Some(weeks) => weeks,
            None => {
                debug!(
                    "No week-denominated lead times for scope {}; assuming {} weeks",
                    scope.scope_type, DEFAULT_LEAD_TIME_WEEKS
                );
                DEFAULT_LEAD_TIME_WEEKS
            }
        };

        let submittal_date = anchor_date + Duration::weeks(SUBMITTAL_OFFSET_WEEKS);
        events.push(scope_event(
            scope,
            Milestone::Submittals,
            submittal_date,
            scope_value,
            format!("Product data submitted for {}", scope.description),
        ));

        let purchase_date = submittal_date + Duration::weeks(lead_time_weeks);
        events.push(scope_event(
            scope,
            Milestone::MaterialsPurchased,
            purchase_date,
            scope_value,
            format!("Materials on order with {}-week lead time", lead_time_weeks),
        ));

        let storage_date = purchase_date + Duration::weeks(STORAGE_OFFSET_WEEKS);
        events.push(scope_event(
            scope,
            Milestone::MaterialsStored,
            storage_date,
            scope_value,
            "Materials received and secured on site".to_string(),
        ));

        let install_date = storage_date + Duration::weeks(INSTALL_OFFSET_WEEKS);
        events.push(scope_event(
            scope,
            Milestone::InstallationLabor,
            install_date,
            scope_value,
            format!("Installation of {} complete", scope.description),
        ));
    }

    // Retention is a single project-wide line against total project value,
    // not a per-scope closeout.
    if let Some(last_date) = events.iter().map(|event| event.date).max() {
        let project_value: f64 = scopes.iter().map(estimate_scope_value).sum();
        let milestone = Milestone::FinalRetention;

        events.push(BillingEvent {
            scope: ALL_SCOPES.to_string(),
            milestone,
            date: last_date + Duration::weeks(RETENTION_OFFSET_WEEKS),
            amount: project_value * f64::from(milestone.percentage()) / 100.0,
            percentage: milestone.percentage(),
            trigger: milestone.trigger().to_string(),
            notes: "Final retention release after punchlist completion".to_string(),
        });
    }

    // Stable sort: same-date events keep generation order.
    events.sort_by_key(|event| event.date);

    Ok(events)
}

fn scope_event(
    scope: &Scope,
    milestone: Milestone,
    date: NaiveDate,
    scope_value: f64,
    notes: String,
) -> BillingEvent {
    BillingEvent {
        scope: scope.scope_type.clone(),
        milestone,
        date,
        amount: scope_value * f64::from(milestone.percentage()) / 100.0,
        percentage: milestone.percentage(),
        trigger: milestone.trigger().to_string(),
        notes,
    }
}
