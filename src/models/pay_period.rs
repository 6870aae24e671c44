//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type, the inclusive calendar range
//! over which attendance and earnings are aggregated.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Latest day of a month that can start a single-month period.
const LAST_MONTHLY_ANCHOR_DAY: u32 = 28;

/// An inclusive `[from, to]` range of calendar days.
///
/// # Example
///
/// ```
/// use farm_payroll::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     from: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     to: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()));
/// assert_eq!(period.day_count(), 30);
/// assert!(period.is_single_month());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period (inclusive).
    pub from: NaiveDate,
    /// The last day of the period (inclusive).
    pub to: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period from its bounds. Bounds are not validated here.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both bounds.
    ///
    /// ```
    /// use farm_payroll::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::new(
    ///     NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
    /// );
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap())); // from
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap())); // to
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Returns true when `from` is not after `to`.
    pub fn is_ordered(&self) -> bool {
        self.from <= self.to
    }

    /// Number of calendar days in the period, counting both bounds.
    ///
    /// Returns zero for an inverted period.
    pub fn day_count(&self) -> u32 {
        if !self.is_ordered() {
            return 0;
        }
        ((self.to - self.from).num_days() + 1) as u32
    }

    /// Returns true when the period covers exactly one month.
    ///
    /// That is the case when `from` falls on day 1 to 28 of its month and
    /// `to` is the day before the same day of the next month: 1 March to
    /// 31 March, or 15 January to 14 February. A period starting on the
    /// 29th, 30th or 31st is never a single month.
    pub fn is_single_month(&self) -> bool {
        // Every month has a 28th, so adding a month to these anchors never clamps
        if self.from.day() > LAST_MONTHLY_ANCHOR_DAY {
            return false;
        }
        self.from
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .is_some_and(|last| last == self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_date_within_period() {
        let period = PayPeriod::new(date(2026, 1, 13), date(2026, 1, 26));
        assert!(period.contains_date(date(2026, 1, 15)));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = PayPeriod::new(date(2026, 1, 13), date(2026, 1, 26));
        assert!(!period.contains_date(date(2026, 1, 27)));
        assert!(!period.contains_date(date(2026, 1, 12)));
    }

    #[test]
    fn test_contains_bounds() {
        let period = PayPeriod::new(date(2026, 1, 13), date(2026, 1, 26));
        assert!(period.contains_date(period.from));
        assert!(period.contains_date(period.to));
    }

    #[test]
    fn test_day_count_is_inclusive() {
        assert_eq!(PayPeriod::new(date(2026, 1, 1), date(2026, 1, 1)).day_count(), 1);
        assert_eq!(PayPeriod::new(date(2026, 1, 1), date(2026, 1, 31)).day_count(), 31);
        assert_eq!(PayPeriod::new(date(2026, 2, 1), date(2026, 3, 17)).day_count(), 45);
    }

    #[test]
    fn test_day_count_of_inverted_period_is_zero() {
        let period = PayPeriod::new(date(2026, 2, 1), date(2026, 1, 1));
        assert!(!period.is_ordered());
        assert_eq!(period.day_count(), 0);
    }

    #[test]
    fn test_calendar_month_is_single_month() {
        assert!(PayPeriod::new(date(2026, 6, 1), date(2026, 6, 30)).is_single_month());
        assert!(PayPeriod::new(date(2026, 2, 1), date(2026, 2, 28)).is_single_month());
        assert!(PayPeriod::new(date(2028, 2, 1), date(2028, 2, 29)).is_single_month());
    }

    #[test]
    fn test_mid_month_anniversary_is_single_month() {
        assert!(PayPeriod::new(date(2026, 1, 15), date(2026, 2, 14)).is_single_month());
    }

    #[test]
    fn test_month_end_anchors_are_never_single_month() {
        // Adding a month to these dates would clamp to the end of February
        assert!(!PayPeriod::new(date(2026, 1, 31), date(2026, 2, 27)).is_single_month());
        assert!(!PayPeriod::new(date(2026, 1, 31), date(2026, 2, 28)).is_single_month());
        assert!(!PayPeriod::new(date(2026, 1, 30), date(2026, 2, 27)).is_single_month());
        assert!(!PayPeriod::new(date(2026, 1, 29), date(2026, 2, 28)).is_single_month());
        assert!(!PayPeriod::new(date(2026, 3, 31), date(2026, 4, 30)).is_single_month());
    }

    #[test]
    fn test_twenty_eighth_anchor_is_single_month() {
        assert!(PayPeriod::new(date(2026, 2, 28), date(2026, 3, 27)).is_single_month());
        assert!(PayPeriod::new(date(2026, 1, 28), date(2026, 2, 27)).is_single_month());
        assert!(!PayPeriod::new(date(2026, 2, 28), date(2026, 3, 31)).is_single_month());
    }

    #[test]
    fn test_each_end_date_pairs_with_one_start_date() {
        let to = date(2026, 2, 27);
        let starts: Vec<u32> = (1..=31)
            .filter(|d| PayPeriod::new(date(2026, 1, *d), to).is_single_month())
            .collect();
        assert_eq!(starts, vec![28]);
    }

    #[test]
    fn test_other_lengths_are_not_single_month() {
        assert!(!PayPeriod::new(date(2026, 6, 1), date(2026, 6, 29)).is_single_month());
        assert!(!PayPeriod::new(date(2026, 6, 1), date(2026, 7, 1)).is_single_month());
        assert!(!PayPeriod::new(date(2026, 6, 1), date(2026, 7, 31)).is_single_month());
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{"from": "2026-01-13", "to": "2026-01-26"}"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.from, date(2026, 1, 13));
        assert_eq!(period.to, date(2026, 1, 26));
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = PayPeriod::new(date(2026, 1, 13), date(2026, 1, 26));
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"from\":\"2026-01-13\""));
        assert!(json.contains("\"to\":\"2026-01-26\""));
    }
}
