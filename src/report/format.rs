//! Console formatting for payroll results.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::PayrollSummary;
use crate::models::Employee;

/// Rounds to cents, half away from zero, always keeping two decimal places.
fn to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats a monetary amount as dollars and cents.
///
/// # Examples
///
/// ```
/// use weekly_pay::report::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(7425, 1)), "$742.50");
/// assert_eq!(format_currency(Decimal::new(884_40625, 5)), "$884.41");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", to_cents(amount))
}

/// Formats a fraction in `[0, 1]` as a percentage with two decimals.
pub fn format_percent(fraction: Decimal) -> String {
    format!("{}%", to_cents(fraction * Decimal::ONE_HUNDRED))
}

/// Formats the average weekly pay line printed by default.
///
/// # Examples
///
/// ```
/// use weekly_pay::report::format_average_line;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_average_line(Decimal::from(975)), "Average Weekly Pay: $975.00");
/// ```
pub fn format_average_line(average: Decimal) -> String {
    format!("Average Weekly Pay: {}", format_currency(average))
}

fn format_employee(employee: Option<&Employee>) -> String {
    match employee {
        Some(e) => format!(
            "{} (ID {}) {}",
            e.name(),
            e.employee_id(),
            format_currency(e.weekly_pay())
        ),
        None => "none".to_string(),
    }
}

/// Formats every statistic in a summary, one per line.
///
/// A total too large to represent is shown as `out of range`.
pub fn format_summary(summary: &PayrollSummary, skipped: usize) -> String {
    let total = summary
        .total_weekly_pay
        .map_or_else(|| "out of range".to_string(), format_currency);

    let mut lines = vec![
        format_average_line(summary.average_weekly_pay),
        format!("Total Weekly Pay: {}", total),
        format!("Employees Loaded: {}", summary.employee_count),
        format!("Records Skipped: {}", skipped),
        format!(
            "Highest Paid Wage Employee: {}",
            format_employee(summary.highest_paid_wage_employee.as_ref())
        ),
        format!(
            "Lowest Paid Salaried Employee: {}",
            format_employee(summary.lowest_paid_salaried_employee.as_ref())
        ),
        "Category Percentages:".to_string(),
    ];

    if summary.category_percentages.is_empty() {
        lines.push("  none".to_string());
    }
    lines.extend(
        summary
            .category_percentages
            .iter()
            .map(|(category, fraction)| format!("  {}: {}", category, format_percent(*fraction))),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
