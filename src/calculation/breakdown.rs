//! Breakdown assembly and rendering.
//!
//! [`BreakdownBuilder`] numbers lines as calculation steps append them.
//! [`render_breakdown`] turns a finished result into the text shown on the
//! salary review screen and in reports.

use rust_decimal::Decimal;

use crate::models::{BreakdownLine, PayrollResult, round_currency};

/// Collects breakdown lines in order, numbering them from 1.
#[derive(Debug, Default)]
pub struct BreakdownBuilder {
    lines: Vec<BreakdownLine>,
}

impl BreakdownBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line, assigning it the next line number.
    pub fn push(&mut self, mut line: BreakdownLine) {
        line.line_number = self.lines.len() as u32 + 1;
        self.lines.push(line);
    }

    /// Number of lines appended so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no lines were appended.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the finished lines.
    pub fn finish(self) -> Vec<BreakdownLine> {
        self.lines
    }
}

/// Formats a money amount to exactly two decimal places without a symbol.
///
/// ```
/// use farm_payroll::calculation::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::new(1000, 0)), "1000.00");
/// assert_eq!(format_amount(Decimal::from_str("230.7692307").unwrap()), "230.77");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_currency(amount);
    rounded.rescale(2);
    rounded.to_string()
}

/// Formats a money amount with a currency symbol, sign first.
///
/// ```
/// use farm_payroll::calculation::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(-50, 0), "$"), "-$50.00");
/// assert_eq!(format_money(Decimal::new(160, 0), ""), "160.00");
/// ```
pub fn format_money(amount: Decimal, currency_symbol: &str) -> String {
    if amount.is_sign_negative() && !round_currency(amount).is_zero() {
        format!("-{}{}", currency_symbol, format_amount(amount.abs()))
    } else {
        format!("{}{}", currency_symbol, format_amount(amount.abs()))
    }
}

/// Formats hours, days or multipliers without trailing zeros.
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Renders a result's breakdown as numbered text lines.
///
/// Each line reads `"{n}. {label}: {amount} ({reasoning})"`; lines without an
/// amount show only the reasoning.
///
/// ```
/// use farm_payroll::calculation::{compute_hourly_pay, render_breakdown};
/// use farm_payroll::models::{AttendanceRecord, AttendanceStatus, HourlyCompensation};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord::new(
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     AttendanceStatus::Present,
/// )];
/// let result = compute_hourly_pay(&HourlyCompensation::new(Decimal::new(20, 0)), &records, &[]).unwrap();
///
/// let text = render_breakdown(&result, "$");
/// assert!(text.lines().last().unwrap().contains("Net payable: $160.00"));
/// ```
pub fn render_breakdown(result: &PayrollResult, currency_symbol: &str) -> String {
    result
        .breakdown
        .iter()
        .map(|line| render_line(line, currency_symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &BreakdownLine, currency_symbol: &str) -> String {
    match (line.amount, line.reasoning.is_empty()) {
        (Some(amount), true) => format!(
            "{}. {}: {}",
            line.line_number,
            line.label,
            format_money(amount, currency_symbol)
        ),
        (Some(amount), false) => format!(
            "{}. {}: {} ({})",
            line.line_number,
            line.label,
            format_money(amount, currency_symbol),
            line.reasoning
        ),
        (None, _) => format!("{}. {}: {}", line.line_number, line.label, line.reasoning),
    }
}
