//! Payroll statistics over a sequence of employees.
//!
//! Every function takes the employees in file order. Lookups that pick an
//! extremal employee keep the first one encountered when pay is tied.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Employee, EmployeeCategory};

/// Returns the average weekly pay, or zero when there are no employees.
///
/// # Examples
///
/// ```
/// use weekly_pay::calculation::average_weekly_pay;
/// use weekly_pay::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employees = vec![
///     Employee::salaried(1, "Alice", "111", Decimal::from(1000)),
///     Employee::wage(5, "Bob", "555", Decimal::from(20), Decimal::from(45)),
/// ];
/// assert_eq!(average_weekly_pay(&employees), Decimal::from(975));
/// assert_eq!(average_weekly_pay(&[]), Decimal::ZERO);
/// ```
pub fn average_weekly_pay(employees: &[Employee]) -> Decimal {
    if employees.is_empty() {
        return Decimal::ZERO;
    }

    let count = Decimal::from(employees.len());
    match total_weekly_pay(employees) {
        Some(total) => total / count,
        // The average of representable amounts is itself representable.
        None => employees
            .iter()
            .map(|e| e.weekly_pay() / count)
            .fold(Decimal::ZERO, Decimal::saturating_add),
    }
}

/// Returns the sum of weekly pay across all employees, or `None` when the
/// sum is too large to represent.
pub fn total_weekly_pay(employees: &[Employee]) -> Option<Decimal> {
    employees
        .iter()
        .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.weekly_pay()))
}

/// Returns the wage employee with the highest weekly pay.
pub fn highest_paid_wage_employee(employees: &[Employee]) -> Option<&Employee> {
    first_extremal(employees.iter().filter(|e| e.is_wage()), |candidate, best| {
        candidate > best
    })
}

/// Returns the salaried employee with the lowest weekly pay.
pub fn lowest_paid_salaried_employee(employees: &[Employee]) -> Option<&Employee> {
    first_extremal(
        employees.iter().filter(|e| e.is_salaried()),
        |candidate, best| candidate < best,
    )
}

/// Replaces the current pick only when `beats` holds strictly, so the
/// earliest employee wins a tie.
fn first_extremal<'a>(
    employees: impl Iterator<Item = &'a Employee>,
    beats: impl Fn(Decimal, Decimal) -> bool,
) -> Option<&'a Employee> {
    employees
        .map(|employee| (employee, employee.weekly_pay()))
        .reduce(|best, candidate| {
            if beats(candidate.1, best.1) {
                candidate
            } else {
                best
            }
        })
        .map(|(employee, _)| employee)
}

/// Returns the fraction of employees in each category.
///
/// Only categories with at least one employee appear. An empty input yields
/// an empty map rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use weekly_pay::calculation::category_percentages;
/// use weekly_pay::models::{Employee, EmployeeCategory};
/// use rust_decimal::Decimal;
///
/// let employees = vec![
///     Employee::salaried(1, "Alice", "111", Decimal::from(900)),
///     Employee::salaried(2, "Ann", "222", Decimal::from(950)),
///     Employee::wage(5, "Bob", "555", Decimal::from(20), Decimal::from(40)),
/// ];
/// let fractions = category_percentages(&employees);
///
/// assert_eq!(fractions[&EmployeeCategory::Salaried].round_dp(4), Decimal::new(6667, 4));
/// assert_eq!(fractions[&EmployeeCategory::Wage].round_dp(4), Decimal::new(3333, 4));
/// assert!(!fractions.contains_key(&EmployeeCategory::PartTime));
/// ```
pub fn category_percentages(employees: &[Employee]) -> BTreeMap<EmployeeCategory, Decimal> {
    if employees.is_empty() {
        return BTreeMap::new();
    }

    let mut counts: BTreeMap<EmployeeCategory, usize> = BTreeMap::new();
    for employee in employees {
        *counts.entry(employee.category()).or_default() += 1;
    }

    let total = Decimal::from(employees.len());
    counts
        .into_iter()
        .map(|(category, count)| (category, Decimal::from(count) / total))
        .collect()
}

/// All payroll statistics for one set of employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollSummary {
    /// Number of employees included.
    pub employee_count: usize,
    /// Sum of weekly pay, absent when it does not fit in a `Decimal`.
    pub total_weekly_pay: Option<Decimal>,
    /// Average weekly pay (zero when there are no employees).
    pub average_weekly_pay: Decimal,
    /// The best-paid wage employee, if any.
    pub highest_paid_wage_employee: Option<Employee>,
    /// The lowest-paid salaried employee, if any.
    pub lowest_paid_salaried_employee: Option<Employee>,
    /// Fraction of employees per category.
    pub category_percentages: BTreeMap<EmployeeCategory, Decimal>,
}

impl PayrollSummary {
    /// Computes every statistic for the given employees.
    pub fn from_employees(employees: &[Employee]) -> Self {
        Self {
            employee_count: employees.len(),
            total_weekly_pay: total_weekly_pay(employees),
            average_weekly_pay: average_weekly_pay(employees),
            highest_paid_wage_employee: highest_paid_wage_employee(employees).cloned(),
            lowest_paid_salaried_employee: lowest_paid_salaried_employee(employees).cloned(),
            category_percentages: category_percentages(employees),
        }
    }
}
