//! Parsers for the analyzer reports the engine consumes.
//!
//! The contract analyzer and scope analyzer run upstream and write their
//! findings as JSON. These parsers turn those reports into domain types,
//! validating the invariants the engine relies on.

pub mod contract;
pub mod scope_analysis;

pub use contract::{parse_start_date_file, parse_start_date_str};
pub use scope_analysis::{parse_scope_analysis_file, parse_scope_analysis_str, ScopeAnalysis};
