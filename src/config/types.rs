//! Configuration types for payroll defaults.
//!
//! This module contains the strongly-typed structures deserialized from
//! `payroll.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{
    DEFAULT_OVERTIME_RATE_MULTIPLIER, DEFAULT_STANDARD_WORK_HOURS_PER_DAY, DayConvention,
    PartialMonthPolicy,
};

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_standard_work_hours() -> Decimal {
    DEFAULT_STANDARD_WORK_HOURS_PER_DAY
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_RATE_MULTIPLIER
}

fn default_day_convention() -> DayConvention {
    DayConvention::WorkingDays260
}

/// Identifying information about the farm.
#[derive(Debug, Clone, Deserialize)]
pub struct FarmSettings {
    /// The farm's display name.
    pub name: String,
    /// Symbol prefixed to money amounts in rendered breakdowns.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Defaults applied to hourly calculations that omit them.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyDefaults {
    /// Hours in a full working day.
    #[serde(default = "default_standard_work_hours")]
    pub standard_work_hours_per_day: Decimal,
    /// Overtime multiplier of the hourly rate.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_rate_multiplier: Decimal,
}

impl Default for HourlyDefaults {
    fn default() -> Self {
        Self {
            standard_work_hours_per_day: DEFAULT_STANDARD_WORK_HOURS_PER_DAY,
            overtime_rate_multiplier: DEFAULT_OVERTIME_RATE_MULTIPLIER,
        }
    }
}

/// Defaults applied to salaried calculations that omit them.
#[derive(Debug, Clone, Deserialize)]
pub struct SalariedDefaults {
    /// Day convention used when a request does not name one.
    #[serde(default = "default_day_convention")]
    pub day_convention: DayConvention,
    /// Partial-month policy used when a request does not name one.
    #[serde(default)]
    pub partial_month: PartialMonthPolicy,
}

impl Default for SalariedDefaults {
    fn default() -> Self {
        Self {
            day_convention: default_day_convention(),
            partial_month: PartialMonthPolicy::default(),
        }
    }
}

/// The complete payroll configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Farm identification.
    pub farm: FarmSettings,
    /// Hourly defaults.
    #[serde(default)]
    pub hourly: HourlyDefaults,
    /// Salaried defaults.
    #[serde(default)]
    pub salaried: SalariedDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_full_config_deserializes() {
        let yaml = r#"
farm:
  name: "Green Acres Farm"
  currency_symbol: "$"
hourly:
  standard_work_hours_per_day: 9
  overtime_rate_multiplier: 2
salaried:
  day_convention: thirty_day_month
  partial_month: reject
"#;
        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.farm.name, "Green Acres Farm");
        assert_eq!(config.farm.currency_symbol, "$");
        assert_eq!(config.hourly.standard_work_hours_per_day, Decimal::new(9, 0));
        assert_eq!(config.hourly.overtime_rate_multiplier, Decimal::new(2, 0));
        assert_eq!(config.salaried.day_convention, DayConvention::ThirtyDayMonth);
        assert_eq!(config.salaried.partial_month, PartialMonthPolicy::Reject);
    }

    #[test]
    fn test_sections_default_when_omitted() {
        let yaml = "farm:\n  name: \"Small Holding\"\n";
        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.farm.currency_symbol, "₹");
        assert_eq!(config.hourly.standard_work_hours_per_day, Decimal::new(8, 0));
        assert_eq!(
            config.hourly.overtime_rate_multiplier,
            Decimal::from_str("1.5").unwrap()
        );
        assert_eq!(config.salaried.day_convention, DayConvention::WorkingDays260);
        assert_eq!(config.salaried.partial_month, PartialMonthPolicy::ProRate);
    }

    #[test]
    fn test_unknown_day_convention_fails() {
        let yaml = "farm:\n  name: \"X\"\nsalaried:\n  day_convention: fortnightly\n";
        assert!(serde_yaml::from_str::<PayrollConfig>(yaml).is_err());
    }
}
