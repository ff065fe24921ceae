//! CSV rendering of engine outputs.
//!
//! Persistence lives outside the scheduling core: these writers take the
//! in-memory ledger and budget rows and serialize them the way the PM
//! team's spreadsheets expect them (currency as "$12,345.67", dates as
//! "2025-09-03", months as "September 2025").

pub mod csv;

pub use csv::{
    billing_schedule_csv, budget_csv, format_currency, write_billing_schedule_csv,
    write_budget_csv,
};
