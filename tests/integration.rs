//! Integration tests for the weekly pay calculator.
//!
//! This test suite covers the full load-and-aggregate flow:
//! - Loading the sample employee file
//! - Skipping malformed records
//! - Average, extremal and category statistics
//! - Custom configuration
//! - Report output
//! - Error cases

use rust_decimal::Decimal;
use std::str::FromStr;

use weekly_pay::calculation::{
    PayrollSummary, average_weekly_pay, category_percentages, highest_paid_wage_employee,
    lowest_paid_salaried_employee,
};
use weekly_pay::config::{ConfigLoader, PayrollConfig};
use weekly_pay::error::PayrollError;
use weekly_pay::input::{LoadReport, load_employees, parse_employees};
use weekly_pay::models::EmployeeCategory;
use weekly_pay::report::{PayrollReport, format_average_line, format_summary};

// =============================================================================
// Test Helpers
// =============================================================================

const SAMPLE_FILE: &str = "./res/employees.txt";

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn load_sample() -> LoadReport {
    load_employees(SAMPLE_FILE, &PayrollConfig::default()).expect("Failed to load sample file")
}

fn parse(content: &str) -> LoadReport {
    parse_employees(content, &PayrollConfig::default())
}

// =============================================================================
// SECTION 1: Sample File
// =============================================================================

#[test]
fn test_sample_file_accepts_well_formed_records() {
    let load = load_sample();

    let names: Vec<&str> = load.employees.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec![
            "Alice Martin",
            "Brian Chen",
            "Carla Diaz",
            "Dev Patel",
            "Emma Stone",
            "Grace Lee",
            "Hugo Weber",
            "Ivy Nguyen",
        ]
    );
    assert_eq!(load.skipped, 4);
}

#[test]
fn test_sample_file_weekly_pay_per_employee() {
    let load = load_sample();
    let pays: Vec<Decimal> = load.employees.iter().map(|e| e.weekly_pay()).collect();

    assert_eq!(
        pays,
        vec![
            dec("1250.00"),
            dec("980.50"),
            dec("1035.00"), // 40 x 22.50 + 4 x 22.50 x 1.5
            dec("684.00"),
            dec("393.75"),
            dec("1100.00"),
            dec("960.00"),
            dec("672.00"), // part-time, no overtime at 42 hours
        ]
    );
}

#[test]
fn test_sample_file_average_weekly_pay() {
    let load = load_sample();

    // 7075.25 / 8
    assert_eq!(average_weekly_pay(&load.employees), dec("884.40625"));
    assert_eq!(
        format_average_line(average_weekly_pay(&load.employees)),
        "Average Weekly Pay: $884.41"
    );
}

#[test]
fn test_sample_file_extremal_employees() {
    let load = load_sample();

    let highest = highest_paid_wage_employee(&load.employees).unwrap();
    assert_eq!(highest.name(), "Carla Diaz");
    assert_eq!(highest.weekly_pay(), dec("1035"));

    let lowest = lowest_paid_salaried_employee(&load.employees).unwrap();
    assert_eq!(lowest.name(), "Brian Chen");
    assert_eq!(lowest.weekly_pay(), dec("980.50"));
}

#[test]
fn test_sample_file_category_percentages() {
    let load = load_sample();
    let fractions = category_percentages(&load.employees);

    assert_eq!(fractions[&EmployeeCategory::Salaried], dec("0.375"));
    assert_eq!(fractions[&EmployeeCategory::Wage], dec("0.375"));
    assert_eq!(fractions[&EmployeeCategory::PartTime], dec("0.25"));
}

#[test]
fn test_sample_file_summary_text() {
    let load = load_sample();
    let summary = PayrollSummary::from_employees(&load.employees);

    let expected = "\
Average Weekly Pay: $884.41
Total Weekly Pay: $7075.25
Employees Loaded: 8
Records Skipped: 4
Highest Paid Wage Employee: Carla Diaz (ID 5) $1035.00
Lowest Paid Salaried Employee: Brian Chen (ID 1) $980.50
Category Percentages:
  Salaried: 37.50%
  Wage: 37.50%
  PartTime: 25.00%
";
    assert_eq!(format_summary(&summary, load.skipped), expected);
}

// =============================================================================
// SECTION 2: Malformed Records
// =============================================================================

#[test]
fn test_three_field_line_does_not_change_aggregate() {
    let with_bad = parse("1,Alice,111,1000\n3,Jane,SIN1\n5,Bob,555,20,45\n");
    let without_bad = parse("1,Alice,111,1000\n5,Bob,555,20,45\n");

    assert_eq!(with_bad.employees, without_bad.employees);
    assert_eq!(average_weekly_pay(&with_bad.employees), dec("975"));
    assert_eq!(with_bad.skipped, 1);
}

#[test]
fn test_out_of_range_ids_produce_no_employee() {
    let load = parse("10,Ten,111,20,40\n-1,Minus,222,1000\n");
    assert!(load.employees.is_empty());
    assert_eq!(load.skipped, 2);
    assert_eq!(average_weekly_pay(&load.employees), Decimal::ZERO);
}

#[test]
fn test_all_malformed_file_has_empty_statistics() {
    let load = parse("garbage\n,,,\n1,NoSalary,111,\n");
    let summary = PayrollSummary::from_employees(&load.employees);

    assert_eq!(load.skipped, 3);
    assert_eq!(summary.average_weekly_pay, Decimal::ZERO);
    assert!(summary.category_percentages.is_empty());
    assert!(summary.highest_paid_wage_employee.is_none());
}

#[test]
fn test_amounts_near_decimal_limits() {
    let load = parse(
        "\
1,Big,111,50000000000000000000000000000
2,Bigger,222,50000000000000000000000000000
5,Huge,555,79228162514264337593543950335,2
8,Sci,888,1e3,40
6,Bob,666,20,45
",
    );
    let summary = PayrollSummary::from_employees(&load.employees);

    assert_eq!(load.employees.len(), 3);
    assert_eq!(load.skipped, 2);
    assert_eq!(summary.total_weekly_pay, None);
    // (5e28 + 5e28 + 950) / 3, up to rounding of the per-employee shares
    let expected = dec("33333333333333333333333333650");
    assert!((summary.average_weekly_pay - expected).abs() <= Decimal::TWO);

    let text = format_summary(&summary, load.skipped);
    assert!(text.contains("Total Weekly Pay: out of range\n"));
    assert!(text.contains("Highest Paid Wage Employee: Bob (ID 6) $950.00\n"));
}

// =============================================================================
// SECTION 3: Configuration
// =============================================================================

#[test]
fn test_shipped_config_matches_defaults() {
    let config = ConfigLoader::load("./config/payroll.yaml")
        .unwrap()
        .into_config();
    assert_eq!(config, PayrollConfig::default());

    let load = load_employees(SAMPLE_FILE, &config).unwrap();
    assert_eq!(load, load_sample());
}

#[test]
fn test_custom_config_changes_classification() {
    let config: PayrollConfig = serde_yaml::from_str(
        r#"
delimiter: ";"
categories:
  salaried: { min: 100, max: 199 }
  wage: { min: 200, max: 299 }
  part_time: { min: 300, max: 399 }
"#,
    )
    .unwrap();
    let config = ConfigLoader::from_config(config).unwrap().into_config();

    let load = parse_employees("101;Ann;1;900\n250;Ben;2;20;45\n1;Old;3;800\n", &config);
    assert_eq!(load.employees.len(), 2);
    assert_eq!(load.skipped, 1);
    assert_eq!(load.employees[1].category(), EmployeeCategory::Wage);
    assert_eq!(average_weekly_pay(&load.employees), dec("925"));
}

// =============================================================================
// SECTION 4: Report
// =============================================================================

#[test]
fn test_json_report_for_sample_file() {
    let load = load_sample();
    let report = PayrollReport::new(SAMPLE_FILE, &load);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["source"], SAMPLE_FILE);
    assert_eq!(json["skipped_records"], 4);
    assert_eq!(json["summary"]["employee_count"], 8);
    assert_eq!(
        json["summary"]["highest_paid_wage_employee"]["name"],
        "Carla Diaz"
    );
    assert_eq!(
        json["summary"]["highest_paid_wage_employee"]["compensation"]["category"],
        "Wage"
    );

    let average = json["summary"]["average_weekly_pay"].as_str().unwrap();
    assert_eq!(dec(average), dec("884.40625"));
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[test]
fn test_missing_employee_file() {
    let result = load_employees("./res/does_not_exist.txt", &PayrollConfig::default());
    assert!(matches!(result, Err(PayrollError::InputNotFound { .. })));
}

#[test]
fn test_missing_config_file() {
    let result = ConfigLoader::load("./config/does_not_exist.yaml");
    assert!(matches!(result, Err(PayrollError::ConfigNotFound { .. })));
}
