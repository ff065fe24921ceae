use serde::{Deserialize, Serialize};

/// A vendor matched to one of a scope's material categories.
///
/// Only `lead_time` participates in schedule generation; the remaining
/// fields are carried through for reporting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorRecord {
    #[serde(rename = "vendor", default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    /// Vendor-quoted lead time, free text (e.g. "8 weeks", "2-3 days").
    #[serde(default)]
    pub lead_time: String,
}

/// Vendors matched to one material category of a scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorMatch {
    #[serde(default)]
    pub material_category: String,
    #[serde(default)]
    pub vendors: Vec<VendorRecord>,
}

/// One identified scope of work from the scope analysis report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scope {
    /// Short category label, e.g. "STOREFRONT" or "CURTAIN WALL".
    #[serde(default)]
    pub scope_type: String,
    /// Free-text description used in milestone notes.
    #[serde(default)]
    pub description: String,
    /// Raw requirements blob from the analyzer; opaque to the engine.
    #[serde(default)]
    pub requirements: serde_json::Value,
    #[serde(default)]
    pub critical_notes: String,
    /// Vendor match groups; empty when no vendor data is available.
    #[serde(default)]
    pub matched_vendors: Vec<VendorMatch>,
}

/// Validation failure for scope records coming from the analyzer.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error("scope record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// Check the invariants the scheduling engine relies on.
///
/// `scope_type` and `description` must be non-empty. Everything else may be
/// missing and degrades to documented defaults downstream, so upstream
/// data-quality problems surface here rather than as silent defaults.
pub fn validate_scopes(scopes: &[Scope]) -> Result<(), ScopeError> {
    for (index, scope) in scopes.iter().enumerate() {
        if scope.scope_type.trim().is_empty() {
            return Err(ScopeError::MissingField {
                index,
                field: "scope_type",
            });
        }
        if scope.description.trim().is_empty() {
            return Err(ScopeError::MissingField {
                index,
                field: "description",
            });
        }
    }
    Ok(())
}
