//! Attendance aggregation.
//!
//! Resolves each attendance record to the hours it is worth under an hourly
//! basis and accumulates those hours, together with per-status day counts,
//! into the figures the pay calculations consume.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, BreakdownKind, BreakdownLine,
    HourlyCompensation,
};

use super::breakdown::{BreakdownBuilder, format_quantity};
use super::validation::in_range;

/// Hours credited by one attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHours {
    /// Hours paid at the regular rate.
    pub regular: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime: Decimal,
}

/// Resolves the hours one record is worth.
///
/// - Present: `hours_worked`, or the standard day.
/// - Half-Day: the half-day override, or half the standard day.
/// - Overtime: base hours as for Present, plus `overtime_hours` (default 0).
/// - Absent: nothing.
///
/// ```
/// use farm_payroll::calculation::resolve_hours;
/// use farm_payroll::models::{AttendanceRecord, AttendanceStatus, HourlyCompensation};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let compensation = HourlyCompensation::new(Decimal::new(20, 0));
/// let record = AttendanceRecord::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), AttendanceStatus::Overtime)
///     .with_overtime_hours(Decimal::new(2, 0));
///
/// let hours = resolve_hours(&record, &compensation);
/// assert_eq!(hours.regular, Decimal::new(8, 0));
/// assert_eq!(hours.overtime, Decimal::new(2, 0));
/// ```
pub fn resolve_hours(record: &AttendanceRecord, compensation: &HourlyCompensation) -> ResolvedHours {
    let full_day = record
        .hours_worked
        .unwrap_or(compensation.standard_work_hours_per_day);

    match record.status {
        AttendanceStatus::Present => ResolvedHours {
            regular: full_day,
            overtime: Decimal::ZERO,
        },
        AttendanceStatus::HalfDay => ResolvedHours {
            regular: compensation.effective_half_day_hours(),
            overtime: Decimal::ZERO,
        },
        AttendanceStatus::Overtime => ResolvedHours {
            regular: full_day,
            overtime: record.overtime_hours.unwrap_or(Decimal::ZERO),
        },
        AttendanceStatus::Absent => ResolvedHours {
            regular: Decimal::ZERO,
            overtime: Decimal::ZERO,
        },
    }
}

/// Days and hours accumulated for one attendance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTally {
    /// The status tallied.
    pub status: AttendanceStatus,
    /// Number of records with this status.
    pub days: u32,
    /// Regular hours from those records.
    pub regular_hours: Decimal,
    /// Overtime hours from those records.
    pub overtime_hours: Decimal,
}

impl StatusTally {
    fn empty(status: AttendanceStatus) -> Self {
        Self {
            status,
            days: 0,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
        }
    }
}

/// Hours accumulated over every record of an hourly calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursAggregation {
    /// One tally per status, in [`AttendanceStatus::ALL`] order.
    pub tallies: [StatusTally; 4],
    /// Total regular hours.
    pub regular_hours: Decimal,
    /// Total overtime hours.
    pub overtime_hours: Decimal,
}

impl HoursAggregation {
    /// The tally for one status.
    pub fn tally(&self, status: AttendanceStatus) -> &StatusTally {
        &self.tallies[tally_slot(status)]
    }

    /// Day counts and hour totals for the result.
    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary {
            present_days: self.tally(AttendanceStatus::Present).days,
            half_days: self.tally(AttendanceStatus::HalfDay).days,
            overtime_days: self.tally(AttendanceStatus::Overtime).days,
            absent_days: self.tally(AttendanceStatus::Absent).days,
            regular_hours: self.regular_hours,
            overtime_hours: self.overtime_hours,
        }
    }

    /// Appends one attendance-tally line per status, in fixed order.
    pub fn push_tally_lines(&self, builder: &mut BreakdownBuilder) {
        for tally in &self.tallies {
            let reasoning = match tally.status {
                AttendanceStatus::Overtime => format!(
                    "{}, {} base hours + {} overtime hours",
                    days_label(tally.days),
                    format_quantity(tally.regular_hours),
                    format_quantity(tally.overtime_hours)
                ),
                _ => format!(
                    "{}, {} hours",
                    days_label(tally.days),
                    format_quantity(tally.regular_hours)
                ),
            };
            builder.push(
                BreakdownLine::new(BreakdownKind::AttendanceTally, tally.status.label())
                    .with_quantity(Decimal::from(tally.days))
                    .with_reasoning(reasoning),
            );
        }
    }
}

/// Position of a status in [`AttendanceStatus::ALL`] and in
/// [`HoursAggregation::tallies`].
fn tally_slot(status: AttendanceStatus) -> usize {
    match status {
        AttendanceStatus::Present => 0,
        AttendanceStatus::HalfDay => 1,
        AttendanceStatus::Overtime => 2,
        AttendanceStatus::Absent => 3,
    }
}

/// Accumulates the hours of every record under an hourly basis.
///
/// Fails with `InvalidInput` when a running total overflows.
pub fn aggregate_hours(
    records: &[AttendanceRecord],
    compensation: &HourlyCompensation,
) -> EngineResult<HoursAggregation> {
    let mut tallies = AttendanceStatus::ALL.map(StatusTally::empty);
    let mut regular_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;

    for record in records {
        let hours = resolve_hours(record, compensation);
        regular_hours = in_range(regular_hours.checked_add(hours.regular), "hours_worked")?;
        overtime_hours = in_range(overtime_hours.checked_add(hours.overtime), "overtime_hours")?;

        // Non-negative hours keep each tally below the totals checked above
        let tally = &mut tallies[tally_slot(record.status)];
        tally.days += 1;
        tally.regular_hours += hours.regular;
        tally.overtime_hours += hours.overtime;
    }

    Ok(HoursAggregation {
        tallies,
        regular_hours,
        overtime_hours,
    })
}

/// Counts days per status without resolving hours (salaried bases).
pub fn summarize_days(records: &[AttendanceRecord]) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    for record in records {
        summary.record_day(record.status);
    }
    summary
}

/// Appends one attendance-tally line per status with day counts only.
pub fn push_day_count_lines(summary: &AttendanceSummary, builder: &mut BreakdownBuilder) {
    for status in AttendanceStatus::ALL {
        let days = summary.days(status);
        builder.push(
            BreakdownLine::new(BreakdownKind::AttendanceTally, status.label())
                .with_quantity(Decimal::from(days))
                .with_reasoning(days_label(days)),
        );
    }
}

pub(crate) fn days_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}
