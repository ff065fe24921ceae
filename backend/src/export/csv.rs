use anyhow::{Context, Result};
use std::path::Path;

use crate::services::budget::{budget_total, BudgetLine};
use crate::services::ledger::Ledger;

/// Format a dollar amount with comma grouping, e.g. `$82,500.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Render the two-section billing schedule CSV.
///
/// Section one is the event detail with a project-wide running cumulative;
/// section two is the monthly summary with its own cumulative.
pub fn billing_schedule_csv(ledger: &Ledger) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record([
        "Month",
        "Date",
        "Scope",
        "Milestone",
        "Amount",
        "Cumulative",
        "Trigger",
        "Notes",
    ])?;

    for row in ledger.detail_rows() {
        writer.write_record(&[
            row.month.clone(),
            row.date.format("%Y-%m-%d").to_string(),
            row.scope.clone(),
            row.milestone.to_string(),
            format_currency(row.amount),
            format_currency(row.cumulative),
            row.trigger.clone(),
            row.notes.clone(),
        ])?;
    }

    writer.write_record([""])?;
    writer.write_record(["MONTHLY SUMMARY"])?;
    writer.write_record(["Month", "Total Billing", "Cumulative"])?;

    for row in ledger.summary_rows() {
        writer.write_record(&[
            row.month.clone(),
            format_currency(row.total),
            format_currency(row.cumulative),
        ])?;
    }

    finish(writer)
}

/// Render the internal budget CSV with a trailing total row.
pub fn budget_csv(lines: &[BudgetLine]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record([
        "Cost Code",
        "Description",
        "Unit",
        "Quantity",
        "Unit Cost",
        "Total Cost",
        "Category",
        "Notes",
    ])?;

    for line in lines {
        writer.write_record(&[
            line.code.clone(),
            line.description.clone(),
            line.unit.clone(),
            format!("{}", line.quantity),
            format_currency(line.unit_cost),
            format_currency(line.total_cost),
            line.category.clone(),
            line.notes.clone(),
        ])?;
    }

    writer.write_record([""])?;
    writer.write_record(&[
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        "TOTAL:".to_string(),
        format_currency(budget_total(lines)),
    ])?;

    finish(writer)
}

/// Write the billing schedule CSV to disk.
pub fn write_billing_schedule_csv(ledger: &Ledger, path: &Path) -> Result<()> {
    let rendered = billing_schedule_csv(ledger)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write billing schedule to {}", path.display()))
}

/// Write the internal budget CSV to disk.
pub fn write_budget_csv(lines: &[BudgetLine], path: &Path) -> Result<()> {
    let rendered = budget_csv(lines)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write budget to {}", path.display()))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("Failed to flush CSV writer: {}", err))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Scope, VendorMatch, VendorRecord};
    use crate::services::billing::generate;
    use crate::services::budget::generate_internal_budget;
    use chrono::NaiveDate;

    fn sample_ledger() -> Ledger {
        let scopes = vec![Scope {
            scope_type: "STOREFRONT".to_string(),
            description: "Lobby storefront".to_string(),
            matched_vendors: vec![VendorMatch {
                vendors: vec![VendorRecord {
                    lead_time: "8 weeks".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }];
        generate(&scopes, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(1_234.5), "$1,234.50");
        assert_eq!(format_currency(82_500.0), "$82,500.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-1_234.56), "-$1,234.56");
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        assert_eq!(format_currency(10.005), "$10.01");
        assert_eq!(format_currency(10.004), "$10.00");
    }

    #[test]
    fn test_billing_schedule_sections() {
        let csv = billing_schedule_csv(&sample_ledger()).unwrap();

        assert!(csv.starts_with("Month,Date,Scope,Milestone,Amount,Cumulative,Trigger,Notes"));
        assert!(csv.contains("MONTHLY SUMMARY"));
        assert!(csv.contains("Month,Total Billing,Cumulative"));
        assert!(csv.contains("2025-01-15"));
        assert!(csv.contains("\"$18,000.00\""));
        assert!(csv.contains("ALL SCOPES"));
    }

    #[test]
    fn test_budget_csv_has_total_row() {
        let scopes = vec![Scope {
            scope_type: "MIRRORS".to_string(),
            description: "Restroom mirrors".to_string(),
            ..Default::default()
        }];
        let lines = generate_internal_budget(&scopes).unwrap();
        let csv = budget_csv(&lines).unwrap();

        assert!(csv.starts_with("Cost Code,Description,Unit,Quantity"));
        assert!(csv.contains("TOTAL:"));
        assert!(csv.contains("GLASS_SPECIALTY"));
    }

    #[test]
    fn test_write_billing_schedule_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("25-001_billing_schedule.csv");

        write_billing_schedule_csv(&sample_ledger(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("MONTHLY SUMMARY"));
    }
}
