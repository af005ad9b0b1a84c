//! Serializable payroll report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::calculation::PayrollSummary;
use crate::input::LoadReport;

/// The complete result of one payroll run, suitable for JSON output.
///
/// # Example
///
/// ```
/// use weekly_pay::config::PayrollConfig;
/// use weekly_pay::input::parse_employees;
/// use weekly_pay::report::PayrollReport;
///
/// let load = parse_employees("1,Alice,111,1000\n", &PayrollConfig::default());
/// let report = PayrollReport::new("inline", &load);
///
/// assert_eq!(report.summary.employee_count, 1);
/// assert_eq!(report.skipped_records, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the calculator that produced the report.
    pub engine_version: String,
    /// Where the employees were read from.
    pub source: String,
    /// Number of records that produced no employee.
    pub skipped_records: usize,
    /// Statistics over the accepted employees.
    pub summary: PayrollSummary,
}

impl PayrollReport {
    /// Builds a report from a completed load.
    pub fn new(source: impl Into<String>, load: &LoadReport) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.into(),
            skipped_records: load.skipped,
            summary: PayrollSummary::from_employees(&load.employees),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use crate::input::parse_employees;

    fn sample_load() -> LoadReport {
        parse_employees(
            "1,Alice,111,1000\n5,Bob,555,20,45\n3,Jane,SIN1\n",
            &PayrollConfig::default(),
        )
    }

    #[test]
    fn test_report_carries_load_counts() {
        let report = PayrollReport::new("res/employees.txt", &sample_load());

        assert_eq!(report.source, "res/employees.txt");
        assert_eq!(report.skipped_records, 1);
        assert_eq!(report.summary.employee_count, 2);
        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_reports_get_distinct_ids() {
        let load = sample_load();
        let first = PayrollReport::new("a", &load);
        let second = PayrollReport::new("a", &load);
        assert_ne!(first.report_id, second.report_id);
    }

    #[test]
    fn test_report_serialization() {
        let report = PayrollReport::new("res/employees.txt", &sample_load());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["source"], "res/employees.txt");
        assert_eq!(json["skipped_records"], 1);
        assert_eq!(json["summary"]["employee_count"], 2);
        assert_eq!(
            json["summary"]["lowest_paid_salaried_employee"]["name"],
            "Alice"
        );
        assert!(json["report_id"].is_string());
        assert!(json["generated_at"].is_string());
    }
}
