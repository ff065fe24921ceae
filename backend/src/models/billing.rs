use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scope label carried by the single project-wide retention event.
pub const ALL_SCOPES: &str = "ALL SCOPES";

/// Billable milestone kinds, in per-scope generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Milestone {
    #[serde(rename = "General Conditions / Submittals")]
    Submittals,
    #[serde(rename = "Materials Purchased")]
    MaterialsPurchased,
    #[serde(rename = "Materials Stored on Site")]
    MaterialsStored,
    #[serde(rename = "Installation Labor")]
    InstallationLabor,
    #[serde(rename = "Final Retention")]
    FinalRetention,
}

impl Milestone {
    /// Display label used in reports and CSV output.
    pub fn label(&self) -> &'static str {
        match self {
            Milestone::Submittals => "General Conditions / Submittals",
            Milestone::MaterialsPurchased => "Materials Purchased",
            Milestone::MaterialsStored => "Materials Stored on Site",
            Milestone::InstallationLabor => "Installation Labor",
            Milestone::FinalRetention => "Final Retention",
        }
    }

    /// Billing percentage for this milestone kind.
    ///
    /// The four per-scope milestones bill 95% of each scope's value; the
    /// remaining retention line bills 5% of the *total project* value, once,
    /// rather than closing each scope out to 100%. That asymmetry is the
    /// billing policy, not an accounting error.
    pub fn percentage(&self) -> u8 {
        match self {
            Milestone::Submittals => 12,
            Milestone::MaterialsPurchased => 55,
            Milestone::MaterialsStored => 10,
            Milestone::InstallationLabor => 18,
            Milestone::FinalRetention => 5,
        }
    }

    /// Condition that justifies billing this milestone.
    pub fn trigger(&self) -> &'static str {
        match self {
            Milestone::Submittals => "Submittal package complete",
            Milestone::MaterialsPurchased => "Purchase order issued and materials ordered",
            Milestone::MaterialsStored => "Materials delivered and stored",
            Milestone::InstallationLabor => "Installation substantially complete",
            Milestone::FinalRetention => "Project substantial completion",
        }
    }
}

impl std::fmt::Display for Milestone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single dated, valued line item of the billing forecast.
///
/// Events are immutable once built. The full set is sorted by date with a
/// stable sort, so same-date events keep their generation order (scope
/// iteration order, then milestone order, with the retention line last).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingEvent {
    /// Originating scope's type label, or [`ALL_SCOPES`] for retention.
    pub scope: String,
    pub milestone: Milestone,
    pub date: NaiveDate,
    pub amount: f64,
    /// Generating percentage of the milestone; fixed policy, never derived
    /// from `amount`.
    pub percentage: u8,
    pub trigger: String,
    pub notes: String,
}
