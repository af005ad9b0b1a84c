//! Output of payroll results.
//!
//! Plain-text lines for the console and a serializable report for JSON
//! output.

mod format;
mod payroll_report;

pub use format::{format_average_line, format_currency, format_percent, format_summary};
pub use payroll_report::PayrollReport;
