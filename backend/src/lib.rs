//! # Glazing PM Rust Backend
//!
//! Deterministic forecasting engine for commercial glazing project management.
//!
//! This crate turns the output of the upstream contract and scope analyzers
//! (identified scopes of work with matched vendors and quoted lead times)
//! into a month-by-month billing forecast: dated, dollar-valued milestones
//! per scope, a monthly aggregate, and a running cumulative ledger. It also
//! derives an internal cost-code budget from the same scope list. The
//! optional HTTP layer exposes the engine as a REST API for the frontend.
//!
//! ## Features
//!
//! - **Input Parsing**: Deserialize scope-analysis and contract-analysis
//!   reports from JSON
//! - **Billing Schedule**: Chained milestone dates driven by vendor lead
//!   times, with fixed billing percentages per milestone
//! - **Monthly Aggregation**: Calendar-month rollup that reconciles exactly
//!   with the event list
//! - **Budgeting**: Scope-to-cost-code dispatch for internal budgets
//! - **CSV Export**: Spreadsheet-ready rendering of ledgers and budgets
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated DTO surface shared across layers
//! - [`models`]: Domain types (scopes, billing events, month keys)
//! - [`parsing`]: Parsers for the analyzer reports the engine consumes
//! - [`services`]: Business logic (scheduling, aggregation, budgeting)
//! - [`export`]: CSV rendering of engine outputs
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod export;
pub mod models;

pub mod parsing;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
