//! Weekly pay calculation functionality.
//!
//! This module computes the weekly pay for each compensation variant.
//!
//! ## Rate Structure
//!
//! - **Salaried:** the weekly salary, regardless of hours.
//! - **Wage:** the hourly rate for the first 40 hours, 150% of it beyond.
//! - **Part-time:** the hourly rate for every hour, with no overtime premium.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Compensation;

/// Hours per week paid at the ordinary rate before overtime applies.
pub const OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The multiplier applied to the hourly rate for overtime hours (150%).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The result of a weekly pay calculation.
///
/// Hours are zero for salaried employees, whose pay does not depend on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours paid at the ordinary rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Pay for ordinary hours, or the salary.
    pub regular_pay: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Total weekly pay (regular plus overtime).
    pub total: Decimal,
}

/// Calculates the weekly pay for a compensation variant.
///
/// Returns `None` when the pay, or any intermediate amount, is too large to
/// represent as a `Decimal`.
///
/// # Examples
///
/// ```
/// use weekly_pay::calculation::calculate_weekly_pay;
/// use weekly_pay::models::Compensation;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_weekly_pay(&Compensation::Wage {
///     hourly_rate: Decimal::from(20),
///     work_hours: Decimal::from(45),
/// })
/// .unwrap();
///
/// assert_eq!(breakdown.regular_hours, Decimal::from(40));
/// assert_eq!(breakdown.overtime_hours, Decimal::from(5));
/// assert_eq!(breakdown.total, Decimal::from(950));
///
/// let overflowing = calculate_weekly_pay(&Compensation::PartTime {
///     hourly_rate: Decimal::MAX,
///     work_hours: Decimal::TWO,
/// });
/// assert!(overflowing.is_none());
/// ```
pub fn calculate_weekly_pay(compensation: &Compensation) -> Option<PayBreakdown> {
    let breakdown = match *compensation {
        Compensation::Salaried { salary } => PayBreakdown {
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            regular_pay: salary,
            overtime_pay: Decimal::ZERO,
            total: salary,
        },
        Compensation::Wage {
            hourly_rate,
            work_hours,
        } => {
            let overtime_hours = work_hours
                .checked_sub(OVERTIME_THRESHOLD_HOURS)?
                .max(Decimal::ZERO);
            let regular_hours = work_hours.checked_sub(overtime_hours)?;
            let regular_pay = regular_hours.checked_mul(hourly_rate)?;
            let overtime_pay = overtime_hours
                .checked_mul(hourly_rate)?
                .checked_mul(OVERTIME_MULTIPLIER)?;

            PayBreakdown {
                regular_hours,
                overtime_hours,
                regular_pay,
                overtime_pay,
                total: regular_pay.checked_add(overtime_pay)?,
            }
        }
        Compensation::PartTime {
            hourly_rate,
            work_hours,
        } => {
            let regular_pay = hourly_rate.checked_mul(work_hours)?;

            PayBreakdown {
                regular_hours: work_hours,
                overtime_hours: Decimal::ZERO,
                regular_pay,
                overtime_pay: Decimal::ZERO,
                total: regular_pay,
            }
        }
    };

    Some(breakdown)
}
