//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod compensation;
mod ledger;
mod pay_period;
mod payroll_result;
mod statement;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use compensation::{
    CompensationBasis, DAYS_PER_MONTH, DEFAULT_OVERTIME_RATE_MULTIPLIER,
    DEFAULT_STANDARD_WORK_HOURS_PER_DAY, DayConvention, HourlyCompensation, MONTHS_PER_YEAR,
    PartialMonthPolicy, SalariedCompensation, WORKING_DAYS_PER_YEAR,
};
pub use ledger::{Deduction, Payment, Staff, StaffAttendance};
pub use pay_period::PayPeriod;
pub use payroll_result::{
    AttendanceSummary, BreakdownKind, BreakdownLine, NEGATIVE_NET_PAYABLE, PayrollResult,
    PayrollWarning, round_currency,
};
pub use statement::PayrollStatement;
