//! Compensation models.
//!
//! A staff member is paid either by the hour ([`HourlyCompensation`]) or by a
//! yearly salary ([`SalariedCompensation`]). The caller picks the basis for
//! each calculation; it is never inferred from which fields happen to be set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard working hours in a full day when no override is configured.
pub const DEFAULT_STANDARD_WORK_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Overtime multiplier when none is configured (time and a half).
pub const DEFAULT_OVERTIME_RATE_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Working days per year under [`DayConvention::WorkingDays260`].
pub const WORKING_DAYS_PER_YEAR: Decimal = Decimal::from_parts(260, 0, 0, false, 0);

/// Months per year under [`DayConvention::ThirtyDayMonth`].
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Days per month under [`DayConvention::ThirtyDayMonth`].
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

fn default_standard_work_hours() -> Decimal {
    DEFAULT_STANDARD_WORK_HOURS_PER_DAY
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_RATE_MULTIPLIER
}

/// Pay basis for staff paid by the hour.
///
/// # Example
///
/// ```
/// use farm_payroll::models::HourlyCompensation;
/// use rust_decimal::Decimal;
///
/// let compensation = HourlyCompensation::new(Decimal::new(20, 0));
/// assert_eq!(compensation.standard_work_hours_per_day, Decimal::new(8, 0));
/// assert_eq!(compensation.effective_half_day_hours(), Decimal::new(4, 0));
/// assert_eq!(compensation.overtime_rate(), Some(Decimal::new(30, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCompensation {
    /// Pay per regular hour.
    pub hourly_rate: Decimal,
    /// Hours in a full working day, used when a record has no `hours_worked`.
    #[serde(default = "default_standard_work_hours")]
    pub standard_work_hours_per_day: Decimal,
    /// Hours credited for a half day, if different from half the standard day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_day_hours: Option<Decimal>,
    /// Multiplier applied to the hourly rate for overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_rate_multiplier: Decimal,
}

impl HourlyCompensation {
    /// Creates an hourly basis with the default day length and multiplier.
    pub fn new(hourly_rate: Decimal) -> Self {
        Self {
            hourly_rate,
            standard_work_hours_per_day: DEFAULT_STANDARD_WORK_HOURS_PER_DAY,
            half_day_hours: None,
            overtime_rate_multiplier: DEFAULT_OVERTIME_RATE_MULTIPLIER,
        }
    }

    /// Hours credited for a half day: the override, or half the standard day.
    pub fn effective_half_day_hours(&self) -> Decimal {
        self.half_day_hours
            .unwrap_or(self.standard_work_hours_per_day / Decimal::TWO)
    }

    /// Pay per overtime hour, or `None` if the product overflows.
    pub fn overtime_rate(&self) -> Option<Decimal> {
        self.hourly_rate.checked_mul(self.overtime_rate_multiplier)
    }
}

/// What a thirty-day-month calculation does when the period is not one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialMonthPolicy {
    /// Scale the monthly salary by `period_days / 30`.
    #[default]
    ProRate,
    /// Refuse the calculation.
    Reject,
}

/// Pay basis for staff on a yearly salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariedCompensation {
    /// Salary per year.
    pub yearly_salary: Decimal,
    /// Handling of periods other than one calendar month under
    /// [`DayConvention::ThirtyDayMonth`].
    #[serde(default)]
    pub partial_month: PartialMonthPolicy,
}

impl SalariedCompensation {
    /// Creates a salaried basis with the default partial-month policy.
    pub fn new(yearly_salary: Decimal) -> Self {
        Self {
            yearly_salary,
            partial_month: PartialMonthPolicy::default(),
        }
    }
}

/// How a yearly salary is broken down into a daily salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayConvention {
    /// `daily = yearly / 260`; each attended day earns one daily salary.
    #[serde(rename = "working_days_260")]
    WorkingDays260,
    /// `monthly = yearly / 12`, `daily = monthly / 30`; the month is earned
    /// in full and absences are subtracted from it.
    #[serde(rename = "thirty_day_month")]
    ThirtyDayMonth,
}

impl DayConvention {
    /// The name used in configuration and breakdowns.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayConvention::WorkingDays260 => "working_days_260",
            DayConvention::ThirtyDayMonth => "thirty_day_month",
        }
    }
}

/// Which compensation basis produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationBasis {
    /// Paid per hour.
    Hourly,
    /// Paid from a yearly salary under the given day convention.
    Salaried(DayConvention),
}
