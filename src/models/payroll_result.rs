//! Payroll result models.
//!
//! This module contains [`PayrollResult`] and the structures it is built
//! from: the itemized [`BreakdownLine`]s, the [`AttendanceSummary`] and any
//! [`PayrollWarning`]s raised while netting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{AttendanceStatus, CompensationBasis};

/// Warning code for a result whose net payable is below zero.
pub const NEGATIVE_NET_PAYABLE: &str = "NEGATIVE_NET_PAYABLE";

/// Rounds a currency amount to two decimal places, midpoint away from zero.
///
/// Calculations keep full precision; this is applied only when a figure
/// leaves the engine as text or as a payment record.
///
/// ```
/// use farm_payroll::models::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("230.765").unwrap()), Decimal::from_str("230.77").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("-0.125").unwrap()), Decimal::from_str("-0.13").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The role a breakdown line plays in the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownKind {
    /// An input rate or a rate derived from one.
    RateInput,
    /// Day and hour counts for one attendance status.
    AttendanceTally,
    /// Pay for regular hours.
    RegularSubtotal,
    /// Pay for overtime hours.
    OvertimeSubtotal,
    /// One signed contribution to a salaried gross figure.
    GrossComponent,
    /// Total gross earned.
    GrossTotal,
    /// Payments already made in the period.
    PriorPayments,
    /// A single deduction.
    Deduction,
    /// Final amount owed.
    NetTotal,
    /// Flag raised when the net payable is below zero.
    NegativeBalance,
}

/// One line of an itemized payroll breakdown.
///
/// `amount` is the signed contribution of the line: deductions and prior
/// payments carry negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Sequential, 1-based position in the breakdown.
    pub line_number: u32,
    /// What this line represents.
    pub kind: BreakdownKind,
    /// Short human-readable label.
    pub label: String,
    /// Days or hours the line counts, when relevant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    /// Rate applied to the quantity, when relevant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// Signed money amount, when the line carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// How the line was derived.
    pub reasoning: String,
}

impl BreakdownLine {
    /// Starts a line with no figures. The line number is assigned when the
    /// line is appended to a breakdown.
    pub fn new(kind: BreakdownKind, label: impl Into<String>) -> Self {
        Self {
            line_number: 0,
            kind,
            label: label.into(),
            quantity: None,
            rate: None,
            amount: None,
            reasoning: String::new(),
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the rate.
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the signed amount.
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the reasoning text.
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }
}

/// Per-status day counts and hour totals for the records of one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days marked Present.
    pub present_days: u32,
    /// Days marked Half-Day.
    pub half_days: u32,
    /// Days marked Overtime.
    pub overtime_days: u32,
    /// Days marked Absent.
    pub absent_days: u32,
    /// Regular hours credited (hourly basis only, zero otherwise).
    pub regular_hours: Decimal,
    /// Overtime hours credited (hourly basis only, zero otherwise).
    pub overtime_hours: Decimal,
}

impl AttendanceSummary {
    /// Number of days recorded with the given status.
    pub fn days(&self, status: AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present_days,
            AttendanceStatus::HalfDay => self.half_days,
            AttendanceStatus::Overtime => self.overtime_days,
            AttendanceStatus::Absent => self.absent_days,
        }
    }

    /// Increments the day count for the given status.
    pub fn record_day(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present_days += 1,
            AttendanceStatus::HalfDay => self.half_days += 1,
            AttendanceStatus::Overtime => self.overtime_days += 1,
            AttendanceStatus::Absent => self.absent_days += 1,
        }
    }

    /// Total number of records counted.
    pub fn total_days(&self) -> u32 {
        self.present_days + self.half_days + self.overtime_days + self.absent_days
    }
}

/// A condition that does not stop the calculation but needs attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The outcome of one payroll calculation.
///
/// `net_payable == gross_earned - total_deductions` holds exactly. For
/// salaried results `total_deductions` includes `prior_payments`.
///
/// # Example
///
/// ```
/// use farm_payroll::calculation::compute_hourly_pay;
/// use farm_payroll::models::{AttendanceRecord, AttendanceStatus, HourlyCompensation};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let compensation = HourlyCompensation::new(Decimal::new(20, 0));
/// let records = vec![AttendanceRecord::new(
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     AttendanceStatus::Present,
/// )];
///
/// let result = compute_hourly_pay(&compensation, &records, &[]).unwrap();
/// assert_eq!(result.gross_earned, Decimal::new(160, 0));
/// assert_eq!(result.net_payable, Decimal::new(160, 0));
/// assert!(!result.is_negative_balance());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The compensation basis used.
    pub basis: CompensationBasis,
    /// Earnings before prior payments and deductions.
    pub gross_earned: Decimal,
    /// Payments already made in the period (always zero for hourly).
    pub prior_payments: Decimal,
    /// Everything subtracted from gross.
    pub total_deductions: Decimal,
    /// Amount still owed; may be negative.
    pub net_payable: Decimal,
    /// Attendance counts behind the figures.
    pub attendance: AttendanceSummary,
    /// Conditions needing attention.
    pub warnings: Vec<PayrollWarning>,
    /// Ordered, itemized derivation of the figures.
    pub breakdown: Vec<BreakdownLine>,
}

impl PayrollResult {
    /// Returns true when more was deducted than earned.
    pub fn is_negative_balance(&self) -> bool {
        self.net_payable < Decimal::ZERO
    }

    /// Returns the breakdown lines of the given kind, in order.
    pub fn lines_of_kind(&self, kind: BreakdownKind) -> impl Iterator<Item = &BreakdownLine> {
        self.breakdown.iter().filter(move |line| line.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_line(line_number: u32, kind: BreakdownKind, amount: Option<Decimal>) -> BreakdownLine {
        BreakdownLine {
            line_number,
            kind,
            label: "Test".to_string(),
            quantity: None,
            rate: None,
            amount,
            reasoning: String::new(),
        }
    }

    fn create_result(net: Decimal) -> PayrollResult {
        PayrollResult {
            basis: CompensationBasis::Hourly,
            gross_earned: dec("100"),
            prior_payments: Decimal::ZERO,
            total_deductions: dec("100") - net,
            net_payable: net,
            attendance: AttendanceSummary::default(),
            warnings: vec![],
            breakdown: vec![
                create_line(1, BreakdownKind::GrossTotal, Some(dec("100"))),
                create_line(2, BreakdownKind::Deduction, Some(net - dec("100"))),
                create_line(3, BreakdownKind::NetTotal, Some(net)),
            ],
        }
    }

    #[test]
    fn test_round_currency_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("1.004")), dec("1.00"));
        assert_eq!(round_currency(dec("-1.005")), dec("-1.01"));
        assert_eq!(round_currency(dec("1000")), dec("1000"));
    }

    #[test]
    fn test_negative_balance_detection() {
        assert!(create_result(dec("-0.01")).is_negative_balance());
        assert!(!create_result(Decimal::ZERO).is_negative_balance());
        assert!(!create_result(dec("40")).is_negative_balance());
    }

    #[test]
    fn test_lines_of_kind_filters_in_order() {
        let result = create_result(dec("40"));
        let deductions: Vec<_> = result.lines_of_kind(BreakdownKind::Deduction).collect();
        assert_eq!(deductions.len(), 1);
        assert_eq!(deductions[0].line_number, 2);
    }

    #[test]
    fn test_attendance_summary_counts() {
        let mut summary = AttendanceSummary::default();
        summary.record_day(AttendanceStatus::Present);
        summary.record_day(AttendanceStatus::Present);
        summary.record_day(AttendanceStatus::HalfDay);
        summary.record_day(AttendanceStatus::Absent);
        assert_eq!(summary.days(AttendanceStatus::Present), 2);
        assert_eq!(summary.days(AttendanceStatus::HalfDay), 1);
        assert_eq!(summary.days(AttendanceStatus::Overtime), 0);
        assert_eq!(summary.days(AttendanceStatus::Absent), 1);
        assert_eq!(summary.total_days(), 4);
    }

    #[test]
    fn test_breakdown_line_skips_empty_optionals() {
        let line = create_line(1, BreakdownKind::RateInput, None);
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"kind\":\"rate_input\""));
        assert!(!json.contains("quantity"));
        assert!(!json.contains("amount"));
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = create_result(dec("-25.50"));
        let json = serde_json::to_string(&result).unwrap();
        let parsed: PayrollResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
