//! Record parsing functionality.
//!
//! This module turns one line of the employee file into an [`Employee`] or
//! explains why the line was rejected.
//!
//! ## Record Layout
//!
//! ```text
//! employeeID,name,sin,field3[,field4]
//! ```
//!
//! - `field3` is the salary (salaried) or hourly rate (wage and part-time)
//! - `field4` is the hours worked, required for wage and part-time only

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculation::calculate_weekly_pay;
use crate::config::PayrollConfig;
use crate::models::{Compensation, Employee, EmployeeCategory};

/// The fewest fields a record may have.
pub const MIN_FIELDS: usize = 4;

const ID_FIELD: usize = 0;
const NAME_FIELD: usize = 1;
const SIN_FIELD: usize = 2;
const AMOUNT_FIELD: usize = 3;
const HOURS_FIELD: usize = 4;

/// The reason a record produced no employee.
///
/// Rejections are not failures of the payroll run; the loader counts and
/// logs them and moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordRejection {
    /// The line has fewer than [`MIN_FIELDS`] fields.
    #[error("expected at least 4 fields, found {found}")]
    TooFewFields {
        /// The number of fields present.
        found: usize,
    },

    /// The first field is not an integer.
    #[error("employee ID '{value}' is not an integer")]
    InvalidEmployeeId {
        /// The raw field value.
        value: String,
    },

    /// The employee ID is not in any category range.
    #[error("employee ID {employee_id} is not in any category range")]
    UnclassifiedId {
        /// The parsed employee ID.
        employee_id: i32,
    },

    /// A field required by the employee's category is absent.
    #[error("missing field {index}")]
    MissingField {
        /// The zero-based index of the missing field.
        index: usize,
    },

    /// A monetary or hours field is not a decimal number.
    #[error("{field} '{value}' is not a decimal number")]
    InvalidDecimal {
        /// The name of the field.
        field: &'static str,
        /// The raw field value.
        value: String,
    },

    /// The employee's weekly pay is too large to represent.
    #[error("weekly pay for employee {employee_id} is out of range")]
    PayOverflow {
        /// The parsed employee ID.
        employee_id: i32,
    },
}

/// Parses a single record into an employee.
///
/// Fields are split on the configured delimiter. Numeric fields may carry
/// surrounding whitespace; the name and SIN are kept exactly as written.
/// Decimal fields are plain numbers: an optional leading sign, digits and at
/// most one decimal point. Fields beyond those the category needs are ignored.
/// A record whose weekly pay cannot be represented is rejected.
///
/// # Examples
///
/// ```
/// use weekly_pay::config::PayrollConfig;
/// use weekly_pay::input::{parse_record, RecordRejection};
/// use weekly_pay::models::EmployeeCategory;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
///
/// let employee = parse_record("6,Bob,987654321,20,45", &config).unwrap();
/// assert_eq!(employee.category(), EmployeeCategory::Wage);
/// assert_eq!(employee.weekly_pay(), Decimal::from(950));
///
/// assert_eq!(
///     parse_record("3,Jane,SIN1", &config),
///     Err(RecordRejection::TooFewFields { found: 3 })
/// );
/// ```
pub fn parse_record(line: &str, config: &PayrollConfig) -> Result<Employee, RecordRejection> {
    let fields: Vec<&str> = line.split(config.delimiter).collect();

    if fields.len() < MIN_FIELDS {
        return Err(RecordRejection::TooFewFields {
            found: fields.len(),
        });
    }

    let employee_id = parse_employee_id(fields[ID_FIELD])?;
    let name = fields[NAME_FIELD];
    let sin = fields[SIN_FIELD];

    let category = config
        .classify(employee_id)
        .ok_or(RecordRejection::UnclassifiedId { employee_id })?;

    let compensation = match category {
        EmployeeCategory::Salaried => Compensation::Salaried {
            salary: parse_decimal(&fields, AMOUNT_FIELD, "salary")?,
        },
        EmployeeCategory::Wage => {
            let (hourly_rate, work_hours) = parse_hourly(&fields)?;
            Compensation::Wage {
                hourly_rate,
                work_hours,
            }
        }
        EmployeeCategory::PartTime => {
            let (hourly_rate, work_hours) = parse_hourly(&fields)?;
            Compensation::PartTime {
                hourly_rate,
                work_hours,
            }
        }
    };

    if calculate_weekly_pay(&compensation).is_none() {
        return Err(RecordRejection::PayOverflow { employee_id });
    }

    Ok(Employee::new(employee_id, name, sin, compensation))
}

fn parse_employee_id(raw: &str) -> Result<i32, RecordRejection> {
    raw.trim()
        .parse()
        .map_err(|_| RecordRejection::InvalidEmployeeId {
            value: raw.to_string(),
        })
}

fn parse_hourly(fields: &[&str]) -> Result<(Decimal, Decimal), RecordRejection> {
    let hourly_rate = parse_decimal(fields, AMOUNT_FIELD, "hourly rate")?;
    let work_hours = parse_decimal(fields, HOURS_FIELD, "work hours")?;
    Ok((hourly_rate, work_hours))
}

fn parse_decimal(
    fields: &[&str],
    index: usize,
    field: &'static str,
) -> Result<Decimal, RecordRejection> {
    let raw = fields
        .get(index)
        .ok_or(RecordRejection::MissingField { index })?;

    let invalid = || RecordRejection::InvalidDecimal {
        field,
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    if !is_plain_decimal(trimmed) {
        return Err(invalid());
    }
    Decimal::from_str(trimmed).map_err(|_| invalid())
}

/// Accepts `[+-]digits[.digits]`. `Decimal::from_str` alone also takes
/// exponents and `_` separators.
fn is_plain_decimal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    !(whole.is_empty() && fraction.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
