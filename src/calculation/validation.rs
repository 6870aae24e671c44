//! Input validation for payroll calculations.
//!
//! Every check here runs before any arithmetic. A calculation either passes
//! all of them or fails with [`EngineError::InvalidInput`] and computes
//! nothing.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Deduction, HourlyCompensation, PayPeriod, SalariedCompensation};

/// Checks the rate parameters of an hourly basis.
pub fn validate_hourly_compensation(compensation: &HourlyCompensation) -> EngineResult<()> {
    if compensation.hourly_rate <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "hourly_rate",
            format!("must be greater than zero, got {}", compensation.hourly_rate),
        ));
    }
    if compensation.standard_work_hours_per_day <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "standard_work_hours_per_day",
            format!(
                "must be greater than zero, got {}",
                compensation.standard_work_hours_per_day
            ),
        ));
    }
    if let Some(hours) = compensation.half_day_hours.filter(|h| *h < Decimal::ZERO) {
        return Err(EngineError::invalid_input(
            "half_day_hours",
            format!("must not be negative, got {}", hours),
        ));
    }
    if compensation.overtime_rate_multiplier < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "overtime_rate_multiplier",
            format!(
                "must not be negative, got {}",
                compensation.overtime_rate_multiplier
            ),
        ));
    }
    Ok(())
}

/// Checks the salary of a salaried basis.
pub fn validate_salaried_compensation(compensation: &SalariedCompensation) -> EngineResult<()> {
    if compensation.yearly_salary <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "yearly_salary",
            format!("must be greater than zero, got {}", compensation.yearly_salary),
        ));
    }
    Ok(())
}

/// Checks that the period bounds are in order.
pub fn validate_period(period: &PayPeriod) -> EngineResult<()> {
    if !period.is_ordered() {
        return Err(EngineError::invalid_input(
            "pay_period",
            format!("from ({}) is after to ({})", period.from, period.to),
        ));
    }
    Ok(())
}

/// Checks hours, date uniqueness and, when a period is given, that every
/// record falls inside it.
pub fn validate_records(records: &[AttendanceRecord], period: Option<&PayPeriod>) -> EngineResult<()> {
    let mut seen_dates = HashSet::with_capacity(records.len());

    for record in records {
        if let Some(hours) = record.hours_worked.filter(|h| *h < Decimal::ZERO) {
            return Err(EngineError::invalid_input(
                "hours_worked",
                format!("record on {} has negative hours worked ({})", record.date, hours),
            ));
        }
        if let Some(hours) = record.overtime_hours.filter(|h| *h < Decimal::ZERO) {
            return Err(EngineError::invalid_input(
                "overtime_hours",
                format!("record on {} has negative overtime hours ({})", record.date, hours),
            ));
        }
        if let Some(period) = period.filter(|p| !p.contains_date(record.date)) {
            return Err(EngineError::invalid_input(
                "attendance",
                format!(
                    "record on {} is outside the pay period {} to {}",
                    record.date, period.from, period.to
                ),
            ));
        }
        if !seen_dates.insert(record.date) {
            return Err(EngineError::invalid_input(
                "attendance",
                format!("more than one record on {}", record.date),
            ));
        }
    }

    Ok(())
}

/// Checks that no deduction is negative.
pub fn validate_deductions(deductions: &[Deduction]) -> EngineResult<()> {
    if let Some(deduction) = deductions.iter().find(|d| d.amount < Decimal::ZERO) {
        return Err(EngineError::invalid_input(
            "deductions",
            format!(
                "deduction '{}' has a negative amount ({})",
                deduction.description, deduction.amount
            ),
        ));
    }
    Ok(())
}

/// Checks that the prior payment total is not negative.
pub fn validate_prior_payments(prior_payments: Decimal) -> EngineResult<()> {
    if prior_payments < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "prior_payments",
            format!("must not be negative, got {}", prior_payments),
        ));
    }
    Ok(())
}

/// Turns the result of a checked [`Decimal`] operation into a value, or into
/// [`EngineError::InvalidInput`] for `field` when the operation overflowed.
pub(crate) fn in_range(value: Option<Decimal>, field: &str) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::invalid_input(field, "amount out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn march() -> PayPeriod {
        PayPeriod::new(date(1), date(31))
    }

    fn field_of(error: EngineError) -> String {
        match error {
            EngineError::InvalidInput { field, .. } => field,
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_in_range_passes_value_through() {
        assert_eq!(in_range(Some(dec("12.5")), "hourly_rate").unwrap(), dec("12.5"));
    }

    #[test]
    fn test_in_range_reports_overflow_on_field() {
        let error = in_range(Decimal::MAX.checked_mul(Decimal::TWO), "yearly_salary").unwrap_err();
        assert!(error.to_string().contains("amount out of range"));
        assert_eq!(field_of(error), "yearly_salary");
    }

    #[test]
    fn test_zero_hourly_rate_rejected() {
        let compensation = HourlyCompensation::new(Decimal::ZERO);
        let error = validate_hourly_compensation(&compensation).unwrap_err();
        assert_eq!(field_of(error), "hourly_rate");
    }

    #[test]
    fn test_negative_hourly_rate_rejected() {
        let compensation = HourlyCompensation::new(dec("-1"));
        assert!(validate_hourly_compensation(&compensation).is_err());
    }

    #[test]
    fn test_zero_standard_day_rejected() {
        let mut compensation = HourlyCompensation::new(dec("20"));
        compensation.standard_work_hours_per_day = Decimal::ZERO;
        let error = validate_hourly_compensation(&compensation).unwrap_err();
        assert_eq!(field_of(error), "standard_work_hours_per_day");
    }

    #[test]
    fn test_negative_half_day_override_rejected() {
        let mut compensation = HourlyCompensation::new(dec("20"));
        compensation.half_day_hours = Some(dec("-4"));
        let error = validate_hourly_compensation(&compensation).unwrap_err();
        assert_eq!(field_of(error), "half_day_hours");
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let mut compensation = HourlyCompensation::new(dec("20"));
        compensation.overtime_rate_multiplier = dec("-1.5");
        let error = validate_hourly_compensation(&compensation).unwrap_err();
        assert_eq!(field_of(error), "overtime_rate_multiplier");
    }

    #[test]
    fn test_valid_hourly_compensation_accepted() {
        assert!(validate_hourly_compensation(&HourlyCompensation::new(dec("28.85"))).is_ok());
    }

    #[test]
    fn test_zero_yearly_salary_rejected() {
        let error = validate_salaried_compensation(&SalariedCompensation::new(Decimal::ZERO)).unwrap_err();
        assert_eq!(field_of(error), "yearly_salary");
    }

    #[test]
    fn test_inverted_period_rejected() {
        let error = validate_period(&PayPeriod::new(date(10), date(9))).unwrap_err();
        assert_eq!(field_of(error), "pay_period");
    }

    #[test]
    fn test_single_day_period_accepted() {
        assert!(validate_period(&PayPeriod::new(date(10), date(10))).is_ok());
    }

    #[test]
    fn test_negative_hours_worked_rejected() {
        let records = vec![AttendanceRecord::new(date(2), AttendanceStatus::Present).with_hours_worked(dec("-1"))];
        let error = validate_records(&records, None).unwrap_err();
        assert_eq!(field_of(error), "hours_worked");
    }

    #[test]
    fn test_negative_overtime_hours_rejected() {
        let records =
            vec![AttendanceRecord::new(date(2), AttendanceStatus::Overtime).with_overtime_hours(dec("-2"))];
        let error = validate_records(&records, None).unwrap_err();
        assert_eq!(field_of(error), "overtime_hours");
    }

    #[test]
    fn test_record_outside_period_rejected() {
        let records = vec![AttendanceRecord::new(
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            AttendanceStatus::Present,
        )];
        let error = validate_records(&records, Some(&march())).unwrap_err();
        assert_eq!(field_of(error), "attendance");
    }

    #[test]
    fn test_records_on_period_bounds_accepted() {
        let records = vec![
            AttendanceRecord::new(date(1), AttendanceStatus::Present),
            AttendanceRecord::new(date(31), AttendanceStatus::Absent),
        ];
        assert!(validate_records(&records, Some(&march())).is_ok());
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let records = vec![
            AttendanceRecord::new(date(5), AttendanceStatus::Present),
            AttendanceRecord::new(date(5), AttendanceStatus::HalfDay),
        ];
        let error = validate_records(&records, None).unwrap_err();
        assert_eq!(field_of(error), "attendance");
    }

    #[test]
    fn test_negative_deduction_rejected() {
        let deductions = vec![Deduction::new("Refund", dec("-10"))];
        let error = validate_deductions(&deductions).unwrap_err();
        assert_eq!(field_of(error), "deductions");
    }

    #[test]
    fn test_zero_deduction_accepted() {
        assert!(validate_deductions(&[Deduction::new("Nothing", Decimal::ZERO)]).is_ok());
    }

    #[test]
    fn test_negative_prior_payments_rejected() {
        let error = validate_prior_payments(dec("-0.01")).unwrap_err();
        assert_eq!(field_of(error), "prior_payments");
    }
}
