//! Request types for the payroll calculation API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::models::{
    DayConvention, Deduction, HourlyCompensation, PartialMonthPolicy, PayPeriod, Payment,
    SalariedCompensation, Staff, StaffAttendance,
};

/// Request body for the `/payroll/calculate` endpoint.
///
/// Carries the staff member to pay, the compensation basis, and snapshots of
/// the record-store ledgers. The handler narrows the ledgers to the staff
/// member and pay period before calculating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The staff member to calculate pay for.
    pub staff_id: String,
    /// The staff roster; must contain `staff_id`.
    pub staff: Vec<Staff>,
    /// The pay period for the calculation.
    pub pay_period: PayPeriodRequest,
    /// How the staff member is paid.
    pub compensation: CompensationRequest,
    /// Attendance ledger, possibly spanning other staff and dates.
    #[serde(default)]
    pub attendance: Vec<StaffAttendance>,
    /// Payment ledger, possibly spanning other staff and dates.
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Deductions to apply to this calculation.
    #[serde(default)]
    pub deductions: Vec<Deduction>,
}

/// Pay period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The first day of the pay period (inclusive).
    pub from: NaiveDate,
    /// The last day of the pay period (inclusive).
    pub to: NaiveDate,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod::new(req.from, req.to)
    }
}

/// Compensation basis in a calculation request.
///
/// Parameters left out are filled from the payroll configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum CompensationRequest {
    /// Paid by the hour.
    Hourly {
        /// Pay per regular hour.
        hourly_rate: Decimal,
        /// Hours in a full working day.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        standard_work_hours_per_day: Option<Decimal>,
        /// Hours credited for a half day.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        half_day_hours: Option<Decimal>,
        /// Multiplier of the hourly rate for overtime hours.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overtime_rate_multiplier: Option<Decimal>,
    },
    /// Paid from a yearly salary.
    Salaried {
        /// Salary per year.
        yearly_salary: Decimal,
        /// How the salary maps to days.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        day_convention: Option<DayConvention>,
        /// Handling of periods other than one month.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        partial_month: Option<PartialMonthPolicy>,
    },
}

/// A compensation basis with every parameter settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCompensation {
    /// Hourly basis.
    Hourly(HourlyCompensation),
    /// Salaried basis with its day convention.
    Salaried(SalariedCompensation, DayConvention),
}

impl CompensationRequest {
    /// Fills omitted parameters from the configuration defaults.
    pub fn resolve(self, config: &ConfigLoader) -> ResolvedCompensation {
        match self {
            CompensationRequest::Hourly {
                hourly_rate,
                standard_work_hours_per_day,
                half_day_hours,
                overtime_rate_multiplier,
            } => {
                let defaults = config.hourly();
                ResolvedCompensation::Hourly(HourlyCompensation {
                    hourly_rate,
                    standard_work_hours_per_day: standard_work_hours_per_day
                        .unwrap_or(defaults.standard_work_hours_per_day),
                    half_day_hours,
                    overtime_rate_multiplier: overtime_rate_multiplier
                        .unwrap_or(defaults.overtime_rate_multiplier),
                })
            }
            CompensationRequest::Salaried {
                yearly_salary,
                day_convention,
                partial_month,
            } => {
                let defaults = config.salaried();
                ResolvedCompensation::Salaried(
                    SalariedCompensation {
                        yearly_salary,
                        partial_month: partial_month.unwrap_or(defaults.partial_month),
                    },
                    day_convention.unwrap_or(defaults.day_convention),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FarmSettings, HourlyDefaults, PayrollConfig, SalariedDefaults};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_config() -> ConfigLoader {
        ConfigLoader::from_config(PayrollConfig {
            farm: FarmSettings {
                name: "Test Farm".to_string(),
                currency_symbol: "$".to_string(),
            },
            hourly: HourlyDefaults {
                standard_work_hours_per_day: dec("9"),
                overtime_rate_multiplier: dec("2"),
            },
            salaried: SalariedDefaults {
                day_convention: DayConvention::ThirtyDayMonth,
                partial_month: PartialMonthPolicy::Reject,
            },
        })
    }

    #[test]
    fn test_deserialize_hourly_request() {
        let json = r#"{
            "staff_id": "1",
            "staff": [{"id": "1", "name": "John Doe", "role": "Field Worker"}],
            "pay_period": {"from": "2026-03-01", "to": "2026-03-15"},
            "compensation": {"basis": "hourly", "hourly_rate": 20},
            "attendance": [
                {"id": "a1", "staff_id": "1", "date": "2026-03-02", "status": "Present"},
                {"id": "a2", "staff_id": "1", "date": "2026-03-03", "status": "Overtime", "overtime_hours": 2}
            ],
            "deductions": [{"description": "Advance", "amount": 50}]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.staff_id, "1");
        assert_eq!(request.attendance.len(), 2);
        assert!(request.payments.is_empty());
        assert_eq!(request.deductions[0].amount, dec("50"));
        assert!(matches!(request.compensation, CompensationRequest::Hourly { .. }));
    }

    #[test]
    fn test_deserialize_salaried_request() {
        let json = r#"{
            "staff_id": "2",
            "staff": [{"id": "2", "name": "Jane Smith"}],
            "pay_period": {"from": "2026-06-01", "to": "2026-06-30"},
            "compensation": {"basis": "salaried", "yearly_salary": "360000", "day_convention": "thirty_day_month"}
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        match request.compensation {
            CompensationRequest::Salaried {
                yearly_salary,
                day_convention,
                partial_month,
            } => {
                assert_eq!(yearly_salary, dec("360000"));
                assert_eq!(day_convention, Some(DayConvention::ThirtyDayMonth));
                assert_eq!(partial_month, None);
            }
            other => panic!("Expected salaried compensation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_basis_is_rejected() {
        let json = r#"{"basis": "piecework", "rate_per_crate": 5}"#;
        assert!(serde_json::from_str::<CompensationRequest>(json).is_err());
    }

    #[test]
    fn test_hourly_resolution_uses_config_defaults() {
        let request = CompensationRequest::Hourly {
            hourly_rate: dec("20"),
            standard_work_hours_per_day: None,
            half_day_hours: None,
            overtime_rate_multiplier: None,
        };
        match request.resolve(&create_config()) {
            ResolvedCompensation::Hourly(compensation) => {
                assert_eq!(compensation.standard_work_hours_per_day, dec("9"));
                assert_eq!(compensation.overtime_rate_multiplier, dec("2"));
            }
            other => panic!("Expected hourly, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_parameters_override_config() {
        let request = CompensationRequest::Salaried {
            yearly_salary: dec("260000"),
            day_convention: Some(DayConvention::WorkingDays260),
            partial_month: Some(PartialMonthPolicy::ProRate),
        };
        assert_eq!(
            request.resolve(&create_config()),
            ResolvedCompensation::Salaried(
                SalariedCompensation::new(dec("260000")),
                DayConvention::WorkingDays260
            )
        );
    }

    #[test]
    fn test_pay_period_conversion() {
        let req = PayPeriodRequest {
            from: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        };
        let period: PayPeriod = req.into();
        assert_eq!(period.day_count(), 31);
    }
}
