// ============================================================================
// Scope Analysis Parsing
// ============================================================================
//
// The scope analyzer writes its findings either as a full report wrapper
// ({"project_number": ..., "scope_analysis": {"scopes": [...]}}) or as a
// flat scope list ({"scopes": [...]}). Both shapes are accepted.

use anyhow::{Context, Result};
use std::path::Path;

use crate::api::ProjectNumber;
use crate::models::{validate_scopes, Scope};

#[derive(serde::Deserialize)]
struct ScopeAnalysisReport {
    #[serde(default)]
    project_number: Option<String>,
    #[serde(default)]
    scope_analysis: Option<ScopeList>,
    #[serde(default)]
    scopes: Vec<Scope>,
}

#[derive(serde::Deserialize)]
struct ScopeList {
    #[serde(default)]
    scopes: Vec<Scope>,
}

/// Parsed scope analysis report with input checksum.
#[derive(Debug, Clone)]
pub struct ScopeAnalysis {
    pub project_number: Option<ProjectNumber>,
    /// SHA-256 of the raw report JSON, used for project identity.
    pub checksum: String,
    pub scopes: Vec<Scope>,
}

fn validate_input_report(json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Invalid scope analysis JSON")?;
    let object = value
        .as_object()
        .context("Scope analysis must be a JSON object")?;
    if !object.contains_key("scopes") && !object.contains_key("scope_analysis") {
        anyhow::bail!("Missing required 'scopes' field");
    }
    Ok(())
}

/// Parse a scope analysis report from a JSON string.
///
/// Scope records are validated against the engine invariants before being
/// returned, so data-quality problems surface here rather than deep inside
/// schedule generation.
pub fn parse_scope_analysis_str(json: &str) -> Result<ScopeAnalysis> {
    validate_input_report(json)?;

    let report: ScopeAnalysisReport =
        serde_json::from_str(json).context("Failed to deserialize scope analysis JSON")?;

    // Prefer the wrapper form; fall back to the flat scope list.
    let scopes = match report.scope_analysis {
        Some(inner) if !inner.scopes.is_empty() => inner.scopes,
        _ => report.scopes,
    };

    validate_scopes(&scopes).context("Scope analysis failed validation")?;

    Ok(ScopeAnalysis {
        project_number: report.project_number.map(ProjectNumber::new),
        checksum: compute_input_checksum(json),
        scopes,
    })
}

/// Parse a scope analysis report from a file on disk.
pub fn parse_scope_analysis_file(path: &Path) -> Result<ScopeAnalysis> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scope analysis file {}", path.display()))?;
    parse_scope_analysis_str(&json)
}

/// Compute a checksum for the raw report JSON.
fn compute_input_checksum(json: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}
