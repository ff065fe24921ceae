use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

#[derive(Debug, Default, serde::Deserialize)]
struct ContractAnalysis {
    #[serde(default)]
    schedule: ContractSchedule,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ContractSchedule {
    #[serde(default)]
    start_date: Option<String>,
}

/// Extract the project start date from a contract analysis report.
///
/// Returns `Ok(None)` when the report carries no start date or the value
/// does not parse as `YYYY-MM-DD`. Choosing a fallback anchor (typically
/// "today") is the caller's responsibility, not the parser's.
pub fn parse_start_date_str(json: &str) -> Result<Option<NaiveDate>> {
    let analysis: ContractAnalysis =
        serde_json::from_str(json).context("Invalid contract analysis JSON")?;

    Ok(analysis
        .schedule
        .start_date
        .and_then(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok()))
}

/// Extract the project start date from a contract analysis file.
///
/// A missing report file is not an error; contract analysis may simply not
/// have run yet for this project.
pub fn parse_start_date_file(path: &Path) -> Result<Option<NaiveDate>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read contract analysis file {}", path.display()))?;
    parse_start_date_str(&json)
}
