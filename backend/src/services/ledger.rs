use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{BillingEvent, Milestone, MonthlyBucket};

/// Row of the event-detail section with a whole-project running total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRow {
    /// "Month Year" label of the event's date.
    pub month: String,
    pub date: NaiveDate,
    pub scope: String,
    pub milestone: Milestone,
    pub amount: f64,
    /// Sum of all amounts from the first row through this one.
    pub cumulative: f64,
    pub trigger: String,
    pub notes: String,
}

/// Row of the monthly-summary section with its own running total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummaryRow {
    pub month: String,
    pub total: f64,
    pub cumulative: f64,
}

/// Full billing forecast: the date-sorted event list plus the monthly
/// aggregate derived from it.
///
/// Both row renderings scan the same events, so the final cumulative of
/// [`Ledger::detail_rows`] always equals the final cumulative of
/// [`Ledger::summary_rows`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub events: Vec<BillingEvent>,
    pub monthly: Vec<MonthlyBucket>,
}

impl Ledger {
    pub fn new(events: Vec<BillingEvent>, monthly: Vec<MonthlyBucket>) -> Self {
        Ledger { events, monthly }
    }

    /// Event-detail rows in date order with a project-wide running total.
    pub fn detail_rows(&self) -> Vec<LedgerRow> {
        let mut cumulative = 0.0;

        self.events
            .iter()
            .map(|event| {
                cumulative += event.amount;
                LedgerRow {
                    month: event.date.format("%B %Y").to_string(),
                    date: event.date,
                    scope: event.scope.clone(),
                    milestone: event.milestone,
                    amount: event.amount,
                    cumulative,
                    trigger: event.trigger.clone(),
                    notes: event.notes.clone(),
                }
            })
            .collect()
    }

    /// Monthly summary rows in chronological order with an independent
    /// running total.
    pub fn summary_rows(&self) -> Vec<MonthlySummaryRow> {
        let mut cumulative = 0.0;

        self.monthly
            .iter()
            .map(|bucket| {
                cumulative += bucket.total;
                MonthlySummaryRow {
                    month: bucket.label.clone(),
                    total: bucket.total,
                    cumulative,
                }
            })
            .collect()
    }

    /// Total billed over the whole forecast.
    pub fn total_billed(&self) -> f64 {
        self.events.iter().map(|event| event.amount).sum()
    }
}
