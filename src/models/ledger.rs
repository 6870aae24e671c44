//! Record-store models.
//!
//! These mirror the collections kept by the farm record store: staff,
//! attendance entries keyed by staff id, payments already disbursed and
//! deductions supplied for a calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, AttendanceStatus};

/// A staff member, used for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job role (e.g., "Field Worker").
    #[serde(default)]
    pub role: String,
}

/// An attendance entry as stored in the ledger, tagged with its staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAttendance {
    /// Unique identifier for the entry.
    pub id: String,
    /// The staff member this entry belongs to.
    pub staff_id: String,
    /// The calendar day of the entry.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Hours worked, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<Decimal>,
    /// Overtime hours, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<Decimal>,
}

impl StaffAttendance {
    /// Strips the ledger identifiers, leaving the calculation input.
    pub fn to_record(&self) -> AttendanceRecord {
        AttendanceRecord {
            date: self.date,
            status: self.status,
            hours_worked: self.hours_worked,
            overtime_hours: self.overtime_hours,
        }
    }
}

/// Money disbursed to a staff member.
///
/// # Example
///
/// ```
/// use farm_payroll::models::Payment;
///
/// let json = r#"{"id": "pay1", "staff_id": "1", "amount": 5000, "date": "2026-03-10"}"#;
/// let payment: Payment = serde_json::from_str(json).unwrap();
/// assert_eq!(payment.notes, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier for the payment.
    pub id: String,
    /// The staff member who was paid.
    pub staff_id: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Day the payment was made.
    pub date: NaiveDate,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A named, fixed-amount reduction to pay, unrelated to attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// What the deduction is for (e.g., "Advance").
    pub description: String,
    /// Amount to subtract.
    pub amount: Decimal,
}

impl Deduction {
    /// Creates a deduction.
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}
