//! Employee model and related types.
//!
//! This module defines the [`Employee`] entity, the [`Compensation`] sum type
//! carrying the variant-specific pay fields, and the [`EmployeeCategory`]
//! used to group employees for reporting.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_weekly_pay;

/// The pay category an employee belongs to.
///
/// The category is decided by the employee ID range when a record is parsed
/// and is never stored separately from the [`Compensation`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmployeeCategory {
    /// Paid a fixed weekly salary.
    Salaried,
    /// Paid hourly with time-and-a-half beyond 40 hours.
    Wage,
    /// Paid hourly with no overtime premium.
    PartTime,
}

impl EmployeeCategory {
    /// All categories, in reporting order.
    pub const ALL: [EmployeeCategory; 3] = [
        EmployeeCategory::Salaried,
        EmployeeCategory::Wage,
        EmployeeCategory::PartTime,
    ];

    /// Returns the display name of the category.
    pub fn name(self) -> &'static str {
        match self {
            EmployeeCategory::Salaried => "Salaried",
            EmployeeCategory::Wage => "Wage",
            EmployeeCategory::PartTime => "PartTime",
        }
    }
}

impl fmt::Display for EmployeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variant-specific pay fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum Compensation {
    /// A fixed weekly salary.
    Salaried {
        /// The weekly salary.
        salary: Decimal,
    },
    /// Hourly pay with overtime.
    Wage {
        /// The hourly rate.
        hourly_rate: Decimal,
        /// Hours worked this week.
        work_hours: Decimal,
    },
    /// Hourly pay without overtime.
    PartTime {
        /// The hourly rate.
        hourly_rate: Decimal,
        /// Hours worked this week.
        work_hours: Decimal,
    },
}

impl Compensation {
    /// Returns the category this compensation belongs to.
    pub fn category(&self) -> EmployeeCategory {
        match self {
            Compensation::Salaried { .. } => EmployeeCategory::Salaried,
            Compensation::Wage { .. } => EmployeeCategory::Wage,
            Compensation::PartTime { .. } => EmployeeCategory::PartTime,
        }
    }
}

/// An employee read from the payroll file.
///
/// Employees are built once while loading and are read-only afterwards.
///
/// # Examples
///
/// ```
/// use weekly_pay::models::{Employee, EmployeeCategory};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::wage(5, "Bob", "987654321", Decimal::from(20), Decimal::from(45));
/// assert_eq!(employee.category(), EmployeeCategory::Wage);
/// assert_eq!(employee.weekly_pay(), Decimal::from(950));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    employee_id: i32,
    name: String,
    social_insurance_number: String,
    compensation: Compensation,
}

impl Employee {
    /// Creates an employee from its common fields and compensation.
    pub fn new(
        employee_id: i32,
        name: impl Into<String>,
        social_insurance_number: impl Into<String>,
        compensation: Compensation,
    ) -> Self {
        Self {
            employee_id,
            name: name.into(),
            social_insurance_number: social_insurance_number.into(),
            compensation,
        }
    }

    /// Creates a salaried employee.
    pub fn salaried(
        employee_id: i32,
        name: impl Into<String>,
        social_insurance_number: impl Into<String>,
        salary: Decimal,
    ) -> Self {
        Self::new(
            employee_id,
            name,
            social_insurance_number,
            Compensation::Salaried { salary },
        )
    }

    /// Creates a wage employee.
    pub fn wage(
        employee_id: i32,
        name: impl Into<String>,
        social_insurance_number: impl Into<String>,
        hourly_rate: Decimal,
        work_hours: Decimal,
    ) -> Self {
        Self::new(
            employee_id,
            name,
            social_insurance_number,
            Compensation::Wage {
                hourly_rate,
                work_hours,
            },
        )
    }

    /// Creates a part-time employee.
    pub fn part_time(
        employee_id: i32,
        name: impl Into<String>,
        social_insurance_number: impl Into<String>,
        hourly_rate: Decimal,
        work_hours: Decimal,
    ) -> Self {
        Self::new(
            employee_id,
            name,
            social_insurance_number,
            Compensation::PartTime {
                hourly_rate,
                work_hours,
            },
        )
    }

    /// The employee ID.
    pub fn employee_id(&self) -> i32 {
        self.employee_id
    }

    /// The employee name, exactly as it appeared in the record.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The social insurance number, exactly as it appeared in the record.
    pub fn social_insurance_number(&self) -> &str {
        &self.social_insurance_number
    }

    /// The variant-specific pay fields.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// The pay category of this employee.
    pub fn category(&self) -> EmployeeCategory {
        self.compensation.category()
    }

    /// Returns true if the employee is paid a wage with overtime.
    pub fn is_wage(&self) -> bool {
        self.category() == EmployeeCategory::Wage
    }

    /// Returns true if the employee is paid a fixed salary.
    pub fn is_salaried(&self) -> bool {
        self.category() == EmployeeCategory::Salaried
    }

    /// Computes the pay for one week of work.
    ///
    /// Pay that does not fit in a `Decimal` saturates to `Decimal::MAX`, or to
    /// `Decimal::MIN` when negative. The record parser rejects such employees,
    /// so only hand-built values can reach that case.
    pub fn weekly_pay(&self) -> Decimal {
        match calculate_weekly_pay(&self.compensation) {
            Some(breakdown) => breakdown.total,
            None if self.pay_is_negative() => Decimal::MIN,
            None => Decimal::MAX,
        }
    }

    fn pay_is_negative(&self) -> bool {
        match self.compensation {
            Compensation::Salaried { salary } => salary.is_sign_negative(),
            Compensation::Wage {
                hourly_rate,
                work_hours,
            }
            | Compensation::PartTime {
                hourly_rate,
                work_hours,
            } => hourly_rate.is_sign_negative() != work_hours.is_sign_negative(),
        }
    }
}
