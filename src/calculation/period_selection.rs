//! Pay-period selection over the record-store ledgers.
//!
//! The calculators reject any record outside the period. These helpers do
//! the caller-side filtering: they pick one staff member's entries whose
//! date falls inside the inclusive period.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, PayPeriod, Payment, StaffAttendance};

use super::validation::in_range;

/// Selects a staff member's attendance within a period, ordered by date.
///
/// ```
/// use farm_payroll::calculation::select_attendance;
/// use farm_payroll::models::{AttendanceStatus, PayPeriod, StaffAttendance};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
/// let entry = |id: &str, staff: &str, d| StaffAttendance {
///     id: id.to_string(),
///     staff_id: staff.to_string(),
///     date: day(d),
///     status: AttendanceStatus::Present,
///     hours_worked: None,
///     overtime_hours: None,
/// };
/// let ledger = vec![entry("a1", "1", 9), entry("a2", "2", 9), entry("a3", "1", 2)];
///
/// let records = select_attendance("1", &PayPeriod::new(day(1), day(31)), &ledger);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].date, day(2));
/// ```
pub fn select_attendance(
    staff_id: &str,
    period: &PayPeriod,
    ledger: &[StaffAttendance],
) -> Vec<AttendanceRecord> {
    let mut records: Vec<AttendanceRecord> = ledger
        .iter()
        .filter(|entry| entry.staff_id == staff_id && period.contains_date(entry.date))
        .map(StaffAttendance::to_record)
        .collect();
    records.sort_by_key(|record| record.date);
    records
}

/// Sums the payments made to a staff member within a period.
///
/// Fails with `InvalidInput` when the sum overflows.
pub fn total_prior_payments(
    staff_id: &str,
    period: &PayPeriod,
    payments: &[Payment],
) -> EngineResult<Decimal> {
    let total = payments
        .iter()
        .filter(|payment| payment.staff_id == staff_id && period.contains_date(payment.date))
        .try_fold(Decimal::ZERO, |sum, payment| sum.checked_add(payment.amount));
    in_range(total, "payments")
}
