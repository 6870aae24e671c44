//! Compensation-model resolution.
//!
//! Turns a compensation basis into the rates a calculation applies: the
//! hourly and overtime rates for hourly staff, and the daily, monthly and
//! period-base figures for salaried staff under a [`DayConvention`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BreakdownKind, BreakdownLine, DAYS_PER_MONTH, DayConvention, HourlyCompensation,
    MONTHS_PER_YEAR, PartialMonthPolicy, PayPeriod, SalariedCompensation, WORKING_DAYS_PER_YEAR,
};

use super::aggregation::days_label;
use super::breakdown::{BreakdownBuilder, format_amount, format_quantity};
use super::validation::in_range;

/// Appends the rate inputs of an hourly basis, echoed for the breakdown.
///
/// `overtime_rate` is the already-priced [`HourlyCompensation::overtime_rate`].
pub fn push_hourly_rate_lines(
    compensation: &HourlyCompensation,
    overtime_rate: Decimal,
    builder: &mut BreakdownBuilder,
) {
    builder.push(
        BreakdownLine::new(BreakdownKind::RateInput, "Hourly rate")
            .with_rate(compensation.hourly_rate)
            .with_reasoning(format!("{} per hour", format_amount(compensation.hourly_rate))),
    );

    builder.push(
        BreakdownLine::new(BreakdownKind::RateInput, "Standard work hours per day")
            .with_quantity(compensation.standard_work_hours_per_day)
            .with_reasoning(format!(
                "{} hours",
                format_quantity(compensation.standard_work_hours_per_day)
            )),
    );

    let half_day = compensation.effective_half_day_hours();
    let source = if compensation.half_day_hours.is_some() {
        "configured"
    } else {
        "half of the standard day"
    };
    builder.push(
        BreakdownLine::new(BreakdownKind::RateInput, "Half-day hours")
            .with_quantity(half_day)
            .with_reasoning(format!("{} hours ({})", format_quantity(half_day), source)),
    );

    builder.push(
        BreakdownLine::new(BreakdownKind::RateInput, "Overtime rate")
            .with_quantity(compensation.overtime_rate_multiplier)
            .with_rate(overtime_rate)
            .with_reasoning(format!(
                "{} x {} = {} per overtime hour",
                format_quantity(compensation.overtime_rate_multiplier),
                format_amount(compensation.hourly_rate),
                format_amount(overtime_rate)
            )),
    );
}

/// Rates derived from a yearly salary for one pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalariedRates {
    /// The convention the rates were derived under.
    pub convention: DayConvention,
    /// The yearly salary they were derived from.
    pub yearly_salary: Decimal,
    /// `yearly / 12`, thirty-day-month convention only.
    pub monthly_salary: Option<Decimal>,
    /// Salary for one day.
    pub daily_salary: Decimal,
    /// Amount the period starts from before absences, thirty-day-month only.
    pub period_base: Option<Decimal>,
    /// Days in the pay period.
    pub period_days: u32,
    /// True when `period_base` was scaled for a period other than one month.
    pub pro_rated: bool,
}

/// Derives daily and monthly salary figures for a period.
///
/// Under [`DayConvention::ThirtyDayMonth`] a single-month period starts from
/// the full monthly salary. Any other length is scaled by `period_days / 30`
/// or refused, according to the basis' [`PartialMonthPolicy`].
///
/// # Example
///
/// ```
/// use farm_payroll::calculation::resolve_salaried_rates;
/// use farm_payroll::models::{DayConvention, PayPeriod, SalariedCompensation};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
/// );
/// let compensation = SalariedCompensation::new(Decimal::new(360000, 0));
///
/// let rates = resolve_salaried_rates(&compensation, &period, DayConvention::ThirtyDayMonth).unwrap();
/// assert_eq!(rates.monthly_salary, Some(Decimal::new(30000, 0)));
/// assert_eq!(rates.daily_salary, Decimal::new(1000, 0));
/// assert_eq!(rates.period_base, Some(Decimal::new(30000, 0)));
/// ```
pub fn resolve_salaried_rates(
    compensation: &SalariedCompensation,
    period: &PayPeriod,
    convention: DayConvention,
) -> EngineResult<SalariedRates> {
    let yearly_salary = compensation.yearly_salary;
    let period_days = period.day_count();

    match convention {
        DayConvention::WorkingDays260 => Ok(SalariedRates {
            convention,
            yearly_salary,
            monthly_salary: None,
            daily_salary: yearly_salary / WORKING_DAYS_PER_YEAR,
            period_base: None,
            period_days,
            pro_rated: false,
        }),
        DayConvention::ThirtyDayMonth => {
            let monthly_salary = yearly_salary / MONTHS_PER_YEAR;
            let daily_salary = monthly_salary / DAYS_PER_MONTH;

            let (period_base, pro_rated) = if period.is_single_month() {
                (monthly_salary, false)
            } else {
                match compensation.partial_month {
                    PartialMonthPolicy::ProRate => {
                        let scaled = in_range(
                            monthly_salary.checked_mul(Decimal::from(period_days)),
                            "yearly_salary",
                        )?;
                        (scaled / DAYS_PER_MONTH, true)
                    }
                    PartialMonthPolicy::Reject => {
                        return Err(EngineError::invalid_input(
                            "pay_period",
                            format!(
                                "{} to {} is not a single calendar month",
                                period.from, period.to
                            ),
                        ));
                    }
                }
            };

            Ok(SalariedRates {
                convention,
                yearly_salary,
                monthly_salary: Some(monthly_salary),
                daily_salary,
                period_base: Some(period_base),
                period_days,
                pro_rated,
            })
        }
    }
}

impl SalariedRates {
    /// Half of the daily salary.
    pub fn half_day_salary(&self) -> Decimal {
        self.daily_salary / Decimal::TWO
    }

    /// Appends the rate derivation lines for the breakdown.
    pub fn push_rate_lines(&self, builder: &mut BreakdownBuilder) {
        builder.push(
            BreakdownLine::new(BreakdownKind::RateInput, "Yearly salary")
                .with_rate(self.yearly_salary)
                .with_reasoning(format!(
                    "{} per year, {} convention",
                    format_amount(self.yearly_salary),
                    self.convention.as_str()
                )),
        );

        match self.monthly_salary {
            None => {
                builder.push(
                    BreakdownLine::new(BreakdownKind::RateInput, "Daily salary")
                        .with_rate(self.daily_salary)
                        .with_reasoning(format!(
                            "{} / {} working days = {}",
                            format_amount(self.yearly_salary),
                            WORKING_DAYS_PER_YEAR,
                            format_amount(self.daily_salary)
                        )),
                );
            }
            Some(monthly) => {
                builder.push(
                    BreakdownLine::new(BreakdownKind::RateInput, "Monthly salary")
                        .with_rate(monthly)
                        .with_reasoning(format!(
                            "{} / {} months = {}",
                            format_amount(self.yearly_salary),
                            MONTHS_PER_YEAR,
                            format_amount(monthly)
                        )),
                );
                builder.push(
                    BreakdownLine::new(BreakdownKind::RateInput, "Daily salary")
                        .with_rate(self.daily_salary)
                        .with_reasoning(format!(
                            "{} / {} days = {}",
                            format_amount(monthly),
                            DAYS_PER_MONTH,
                            format_amount(self.daily_salary)
                        )),
                );
                if let Some(base) = self.period_base {
                    let reasoning = if self.pro_rated {
                        format!(
                            "{} x {} / {} = {} (period is not a single month)",
                            format_amount(monthly),
                            days_label(self.period_days),
                            DAYS_PER_MONTH,
                            format_amount(base)
                        )
                    } else {
                        format!("one calendar month = {}", format_amount(base))
                    };
                    builder.push(
                        BreakdownLine::new(BreakdownKind::RateInput, "Period base")
                            .with_quantity(Decimal::from(self.period_days))
                            .with_rate(base)
                            .with_reasoning(reasoning),
                    );
                }
            }
        }
    }
}
