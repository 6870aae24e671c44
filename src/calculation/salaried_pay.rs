//! Salaried pay calculation.
//!
//! This module computes gross and net pay for staff on a yearly salary under
//! one of two explicitly selected day conventions:
//!
//! - [`DayConvention::WorkingDays260`] builds gross up from a daily salary of
//!   `yearly / 260` per attended day.
//! - [`DayConvention::ThirtyDayMonth`] starts from the monthly salary and
//!   takes off `(yearly / 12) / 30` per absent day and half that per half-day.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, BreakdownKind, BreakdownLine,
    CompensationBasis, DayConvention, Deduction, PayPeriod, PayrollResult, SalariedCompensation,
};

use super::aggregation::{days_label, push_day_count_lines, summarize_days};
use super::breakdown::{BreakdownBuilder, format_amount};
use super::netting::net_pay;
use super::rates::{SalariedRates, resolve_salaried_rates};
use super::validation::{
    in_range, validate_deductions, validate_period, validate_prior_payments, validate_records,
    validate_salaried_compensation,
};

/// Calculates pay for salaried staff over one pay period.
///
/// This function calculates pay by:
/// 1. Validating the compensation, the period, every record (which must lie
///    inside the period), prior payments and deductions
/// 2. Deriving the daily (and, for thirty-day months, monthly) salary
/// 3. Counting days per attendance status
/// 4. Building gross earned under the selected convention
/// 5. Subtracting prior payments and deductions
///
/// Overtime records count as a full attended day. Their overtime hours are
/// not paid separately.
///
/// # Arguments
///
/// * `compensation` - The yearly salary and partial-month policy
/// * `period` - The inclusive pay period
/// * `records` - Attendance records for one staff member within `period`
/// * `prior_payments` - Total already paid to the staff member in `period`
/// * `deductions` - Amounts to subtract from gross pay
/// * `convention` - How a yearly salary maps to days
///
/// # Returns
///
/// Returns a `PayrollResult` whose `total_deductions` includes
/// `prior_payments`, or `InvalidInput` if any input check fails.
///
/// # Examples
///
/// ```
/// use farm_payroll::calculation::compute_salaried_pay;
/// use farm_payroll::models::{
///     AttendanceRecord, AttendanceStatus, DayConvention, PayPeriod, SalariedCompensation,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 6, d).unwrap();
/// let period = PayPeriod::new(day(1), day(30));
/// let records = vec![
///     AttendanceRecord::new(day(3), AttendanceStatus::Absent),
///     AttendanceRecord::new(day(4), AttendanceStatus::Absent),
///     AttendanceRecord::new(day(5), AttendanceStatus::HalfDay),
/// ];
///
/// let result = compute_salaried_pay(
///     &SalariedCompensation::new(Decimal::new(360000, 0)),
///     &period,
///     &records,
///     Decimal::ZERO,
///     &[],
///     DayConvention::ThirtyDayMonth,
/// )
/// .unwrap();
/// assert_eq!(result.gross_earned, Decimal::new(27500, 0));
/// ```
pub fn compute_salaried_pay(
    compensation: &SalariedCompensation,
    period: &PayPeriod,
    records: &[AttendanceRecord],
    prior_payments: Decimal,
    deductions: &[Deduction],
    convention: DayConvention,
) -> EngineResult<PayrollResult> {
    validate_salaried_compensation(compensation)?;
    validate_period(period)?;
    validate_records(records, Some(period))?;
    validate_prior_payments(prior_payments)?;
    validate_deductions(deductions)?;
    let rates = resolve_salaried_rates(compensation, period, convention)?;

    let mut builder = BreakdownBuilder::new();

    // Step 1: Rate derivation
    rates.push_rate_lines(&mut builder);

    // Step 2: Attendance summary
    let attendance = summarize_days(records);
    push_day_count_lines(&attendance, &mut builder);

    // Step 3: Gross earned derivation
    // Only the thirty-day-month convention derives a period base
    let gross_earned = match rates.period_base {
        None => push_attended_day_components(&rates, &attendance, &mut builder)?,
        Some(base) => push_monthly_base_components(&rates, base, &attendance, &mut builder)?,
    };
    builder.push(
        BreakdownLine::new(BreakdownKind::GrossTotal, "Gross earned")
            .with_amount(gross_earned)
            .with_reasoning(format!("{} to {}", period.from, period.to)),
    );

    // Step 4: Prior payments, deductions and net
    let netting = net_pay(gross_earned, prior_payments, deductions)?;
    netting.push_lines(deductions, true, &mut builder);

    Ok(PayrollResult {
        basis: CompensationBasis::Salaried(convention),
        gross_earned,
        prior_payments: netting.prior_payments,
        total_deductions: netting.total_deductions,
        net_payable: netting.net_payable,
        attendance,
        warnings: netting.warning().into_iter().collect(),
        breakdown: builder.finish(),
    })
}

/// 260-day convention: each attended day earns its share of the daily salary.
fn push_attended_day_components(
    rates: &SalariedRates,
    attendance: &AttendanceSummary,
    builder: &mut BreakdownBuilder,
) -> EngineResult<Decimal> {
    let mut gross = Decimal::ZERO;

    for status in AttendanceStatus::ALL {
        let days = attendance.days(status);
        let (rate, note) = match status {
            AttendanceStatus::Present => (rates.daily_salary, ""),
            AttendanceStatus::HalfDay => (rates.half_day_salary(), ""),
            AttendanceStatus::Overtime => (
                rates.daily_salary,
                "; paid as full days, overtime hours not paid separately",
            ),
            AttendanceStatus::Absent => (Decimal::ZERO, ""),
        };
        let amount = in_range(Decimal::from(days).checked_mul(rate), "yearly_salary")?;
        gross = in_range(gross.checked_add(amount), "yearly_salary")?;

        builder.push(
            BreakdownLine::new(BreakdownKind::GrossComponent, format!("{} pay", status.label()))
                .with_quantity(Decimal::from(days))
                .with_rate(rate)
                .with_amount(amount)
                .with_reasoning(format!("{} x {}{}", days_label(days), format_amount(rate), note)),
        );
    }

    Ok(gross)
}

/// Thirty-day-month convention: the period base less absences and half-days.
fn push_monthly_base_components(
    rates: &SalariedRates,
    base: Decimal,
    attendance: &AttendanceSummary,
    builder: &mut BreakdownBuilder,
) -> EngineResult<Decimal> {
    builder.push(
        BreakdownLine::new(BreakdownKind::GrossComponent, "Base salary")
            .with_amount(base)
            .with_reasoning(format!(
                "present and overtime days ({}) are included in the base",
                days_label(attendance.present_days + attendance.overtime_days)
            )),
    );

    let absent_days = Decimal::from(attendance.absent_days);
    let absent_penalty = in_range(absent_days.checked_mul(rates.daily_salary), "yearly_salary")?;
    builder.push(
        BreakdownLine::new(BreakdownKind::GrossComponent, "Absence deduction")
            .with_quantity(absent_days)
            .with_rate(rates.daily_salary)
            .with_amount(-absent_penalty)
            .with_reasoning(format!(
                "{} x {}",
                days_label(attendance.absent_days),
                format_amount(rates.daily_salary)
            )),
    );

    let half_days = Decimal::from(attendance.half_days);
    let half_day_penalty = in_range(
        half_days.checked_mul(rates.half_day_salary()),
        "yearly_salary",
    )?;
    builder.push(
        BreakdownLine::new(BreakdownKind::GrossComponent, "Half-day deduction")
            .with_quantity(half_days)
            .with_rate(rates.half_day_salary())
            .with_amount(-half_day_penalty)
            .with_reasoning(format!(
                "{} x {}",
                days_label(attendance.half_days),
                format_amount(rates.half_day_salary())
            )),
    );

    in_range(
        base.checked_sub(absent_penalty)
            .and_then(|rest| rest.checked_sub(half_day_penalty)),
        "yearly_salary",
    )
}
