//! Attendance models.
//!
//! This module defines [`AttendanceStatus`] and [`AttendanceRecord`], the
//! per-day inputs consumed by payroll calculation.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The attendance status recorded for one staff member on one day.
///
/// Serialized exactly as the record store writes them: `"Present"`,
/// `"Absent"`, `"Half-Day"` and `"Overtime"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// A full working day.
    Present,
    /// No work and no pay.
    Absent,
    /// Half of a working day.
    #[serde(rename = "Half-Day")]
    HalfDay,
    /// A full working day plus extra hours at the overtime rate.
    Overtime,
}

impl AttendanceStatus {
    /// All statuses in the order breakdowns list them.
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::HalfDay,
        AttendanceStatus::Overtime,
        AttendanceStatus::Absent,
    ];

    /// The label used in records and breakdowns.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::HalfDay => "Half-Day",
            AttendanceStatus::Overtime => "Overtime",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One attendance entry for a single staff member on a single day.
///
/// # Example
///
/// ```
/// use farm_payroll::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord::new(
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     AttendanceStatus::Overtime,
/// )
/// .with_overtime_hours(Decimal::new(2, 0));
///
/// assert_eq!(record.overtime_hours, Some(Decimal::new(2, 0)));
/// assert_eq!(record.hours_worked, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day of the record.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Hours worked, overriding the standard day for Present/Overtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<Decimal>,
    /// Extra hours paid at the overtime rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<Decimal>,
}

impl AttendanceRecord {
    /// Creates a record with no hour overrides.
    pub fn new(date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            date,
            status,
            hours_worked: None,
            overtime_hours: None,
        }
    }

    /// Sets the hours worked override.
    pub fn with_hours_worked(mut self, hours: Decimal) -> Self {
        self.hours_worked = Some(hours);
        self
    }

    /// Sets the overtime hours.
    pub fn with_overtime_hours(mut self, hours: Decimal) -> Self {
        self.overtime_hours = Some(hours);
        self
    }
}
