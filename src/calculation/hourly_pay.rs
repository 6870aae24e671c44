//! Hourly pay calculation.
//!
//! This module computes gross and net pay for staff paid by the hour, with
//! overtime hours paid at a multiple of the hourly rate.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, BreakdownKind, BreakdownLine, CompensationBasis, Deduction,
    HourlyCompensation, PayrollResult,
};

use super::aggregation::aggregate_hours;
use super::breakdown::{BreakdownBuilder, format_amount, format_quantity};
use super::netting::net_pay;
use super::rates::push_hourly_rate_lines;
use super::validation::{
    in_range, validate_deductions, validate_hourly_compensation, validate_records,
};

/// Calculates pay for hourly staff.
///
/// This function calculates pay by:
/// 1. Validating the compensation, every record and every deduction
/// 2. Resolving the regular and overtime hours of each record
/// 3. Pricing regular hours at the hourly rate and overtime hours at the
///    overtime rate
/// 4. Subtracting deductions from the gross
///
/// # Arguments
///
/// * `compensation` - The hourly rate parameters
/// * `records` - Attendance records for one staff member
/// * `deductions` - Amounts to subtract from gross pay
///
/// # Returns
///
/// Returns a `PayrollResult` whose `prior_payments` is always zero, or
/// `InvalidInput` if:
/// - The hourly rate or standard day is not positive
/// - A record has negative hours, or two records share a date
/// - A deduction is negative
/// - A rate, hour total or amount is too large to represent
///
/// # Examples
///
/// ```
/// use farm_payroll::calculation::compute_hourly_pay;
/// use farm_payroll::models::{AttendanceRecord, AttendanceStatus, HourlyCompensation};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let compensation = HourlyCompensation::new(Decimal::new(20, 0));
/// let records = vec![
///     AttendanceRecord::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), AttendanceStatus::Overtime)
///         .with_overtime_hours(Decimal::new(2, 0)),
/// ];
///
/// let result = compute_hourly_pay(&compensation, &records, &[]).unwrap();
/// assert_eq!(result.gross_earned, Decimal::new(220, 0));
/// ```
pub fn compute_hourly_pay(
    compensation: &HourlyCompensation,
    records: &[AttendanceRecord],
    deductions: &[Deduction],
) -> EngineResult<PayrollResult> {
    validate_hourly_compensation(compensation)?;
    validate_records(records, None)?;
    validate_deductions(deductions)?;

    let overtime_rate = in_range(compensation.overtime_rate(), "overtime_rate_multiplier")?;
    let mut builder = BreakdownBuilder::new();

    // Step 1: Echo rate inputs
    push_hourly_rate_lines(compensation, overtime_rate, &mut builder);

    // Step 2: Tally days and hours per status
    let aggregation = aggregate_hours(records, compensation)?;
    aggregation.push_tally_lines(&mut builder);

    // Step 3: Price regular and overtime hours
    let regular_pay = in_range(
        aggregation.regular_hours.checked_mul(compensation.hourly_rate),
        "hourly_rate",
    )?;
    let overtime_pay = in_range(
        aggregation.overtime_hours.checked_mul(overtime_rate),
        "overtime_hours",
    )?;
    let gross_earned = in_range(regular_pay.checked_add(overtime_pay), "hourly_rate")?;

    builder.push(
        BreakdownLine::new(BreakdownKind::RegularSubtotal, "Regular pay")
            .with_quantity(aggregation.regular_hours)
            .with_rate(compensation.hourly_rate)
            .with_amount(regular_pay)
            .with_reasoning(format!(
                "{} hours x {}",
                format_quantity(aggregation.regular_hours),
                format_amount(compensation.hourly_rate)
            )),
    );
    builder.push(
        BreakdownLine::new(BreakdownKind::OvertimeSubtotal, "Overtime pay")
            .with_quantity(aggregation.overtime_hours)
            .with_rate(overtime_rate)
            .with_amount(overtime_pay)
            .with_reasoning(format!(
                "{} hours x {}",
                format_quantity(aggregation.overtime_hours),
                format_amount(overtime_rate)
            )),
    );
    builder.push(
        BreakdownLine::new(BreakdownKind::GrossTotal, "Gross earned")
            .with_amount(gross_earned)
            .with_reasoning(format!(
                "{} regular + {} overtime",
                format_amount(regular_pay),
                format_amount(overtime_pay)
            )),
    );

    // Step 4: Net against deductions
    let netting = net_pay(gross_earned, Decimal::ZERO, deductions)?;
    netting.push_lines(deductions, false, &mut builder);

    Ok(PayrollResult {
        basis: CompensationBasis::Hourly,
        gross_earned,
        prior_payments: netting.prior_payments,
        total_deductions: netting.total_deductions,
        net_payable: netting.net_payable,
        attendance: aggregation.summary(),
        warnings: netting.warning().into_iter().collect(),
        breakdown: builder.finish(),
    })
}
