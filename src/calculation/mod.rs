//! Calculation logic for the weekly pay calculator.
//!
//! This module contains the per-variant weekly pay calculation and the
//! aggregate statistics computed over a whole payroll: average pay,
//! extremal employees and category percentages.

mod aggregate;
mod weekly_pay;

pub use aggregate::{
    PayrollSummary, average_weekly_pay, category_percentages, highest_paid_wage_employee,
    lowest_paid_salaried_employee, total_weekly_pay,
};
pub use weekly_pay::{
    OVERTIME_MULTIPLIER, OVERTIME_THRESHOLD_HOURS, PayBreakdown, calculate_weekly_pay,
};
