//! Employee file loading.
//!
//! Reads the whole employee file in one pass and runs every line through
//! [`parse_record`]. Rejected lines are logged and counted, never fatal.
//! Lines end at `\r\n`, a lone `\r` or a lone `\n`.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::parser::parse_record;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// The outcome of loading an employee file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Accepted employees, in file order.
    pub employees: Vec<Employee>,
    /// Number of lines that produced no employee.
    pub skipped: usize,
}

/// Parses employee records from in-memory text.
///
/// # Examples
///
/// ```
/// use weekly_pay::config::PayrollConfig;
/// use weekly_pay::input::parse_employees;
///
/// let content = "1,Alice,111,1000\n3,Jane,SIN1\n5,Bob,555,20,45\n";
/// let report = parse_employees(content, &PayrollConfig::default());
///
/// assert_eq!(report.employees.len(), 2);
/// assert_eq!(report.skipped, 1);
/// ```
pub fn parse_employees(content: &str, config: &PayrollConfig) -> LoadReport {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut report = LoadReport::default();

    for (index, line) in split_lines(content).enumerate() {
        match parse_record(line, config) {
            Ok(employee) => report.employees.push(employee),
            Err(rejection) => {
                debug!(line = index + 1, reason = %rejection, "Skipping employee record");
                report.skipped += 1;
            }
        }
    }

    report
}

/// Splits text into lines at `\r\n`, `\r` or `\n`.
///
/// A terminator at the very end does not start another line, and empty
/// text has no lines. Unlike [`str::lines`], a lone `\r` ends a line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(content).filter(|text| !text.is_empty());

    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\r', '\n']) {
            Some(end) => {
                let terminator = if text[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[end + terminator..]).filter(|next| !next.is_empty());
                Some(&text[..end])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Loads employees from a file.
///
/// # Returns
///
/// Returns the accepted employees and the skipped count, or an error if
/// the file does not exist or is not valid UTF-8 text.
pub fn load_employees<P: AsRef<Path>>(path: P, config: &PayrollConfig) -> PayrollResult<LoadReport> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PayrollError::InputNotFound {
            path: path_str.clone(),
        },
        _ => PayrollError::InputReadError {
            path: path_str.clone(),
            message: e.to_string(),
        },
    })?;

    let report = parse_employees(&content, config);
    info!(
        path = %path_str,
        accepted = report.employees.len(),
        skipped = report.skipped,
        "Loaded employee file"
    );

    Ok(report)
}
