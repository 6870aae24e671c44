//! Payroll statement model.
//!
//! A [`PayrollStatement`] wraps a [`PayrollResult`] with the identifiers and
//! timestamp of the request that produced it. The result itself stays free of
//! both so that identical inputs always compute identical results.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{PayPeriod, Payment, PayrollResult, round_currency};

/// A payroll result issued for one staff member and pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollStatement {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the statement was issued.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The staff member the statement is for.
    pub staff_id: String,
    /// The staff member's display name.
    pub staff_name: String,
    /// The pay period covered.
    pub pay_period: PayPeriod,
    /// The computed figures and breakdown.
    pub result: PayrollResult,
    /// The breakdown rendered as text.
    pub breakdown_text: String,
}

impl PayrollStatement {
    /// Builds the payment record that settles this statement.
    ///
    /// The amount is the net payable rounded to cents. A statement with
    /// nothing owed (zero or negative net payable) cannot be settled.
    ///
    /// # Example
    ///
    /// ```
    /// use farm_payroll::models::{
    ///     AttendanceSummary, CompensationBasis, PayPeriod, PayrollResult, PayrollStatement,
    /// };
    /// use chrono::{NaiveDate, Utc};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let period = PayPeriod::new(
    ///     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
    /// );
    /// let statement = PayrollStatement {
    ///     calculation_id: Uuid::new_v4(),
    ///     timestamp: Utc::now(),
    ///     engine_version: "0.1.0".to_string(),
    ///     staff_id: "1".to_string(),
    ///     staff_name: "John Doe".to_string(),
    ///     pay_period: period,
    ///     result: PayrollResult {
    ///         basis: CompensationBasis::Hourly,
    ///         gross_earned: Decimal::new(160, 0),
    ///         prior_payments: Decimal::ZERO,
    ///         total_deductions: Decimal::ZERO,
    ///         net_payable: Decimal::new(160, 0),
    ///         attendance: AttendanceSummary::default(),
    ///         warnings: vec![],
    ///         breakdown: vec![],
    ///     },
    ///     breakdown_text: String::new(),
    /// };
    ///
    /// let payment = statement.to_payment(period.to, None).unwrap();
    /// assert_eq!(payment.staff_id, "1");
    /// assert_eq!(payment.amount, Decimal::new(160, 0));
    /// ```
    pub fn to_payment(&self, date: NaiveDate, notes: Option<String>) -> EngineResult<Payment> {
        let amount = round_currency(self.result.net_payable);
        if amount <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "net_payable",
                format!("nothing to pay: net payable is {}", amount),
            ));
        }

        let notes = notes.or_else(|| {
            Some(format!(
                "Salary for {} to {} (calculation {})",
                self.pay_period.from, self.pay_period.to, self.calculation_id
            ))
        });

        Ok(Payment {
            id: Uuid::new_v4().to_string(),
            staff_id: self.staff_id.clone(),
            amount,
            date,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceSummary, CompensationBasis};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_statement(net: Decimal) -> PayrollStatement {
        PayrollStatement {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            staff_id: "2".to_string(),
            staff_name: "Jane Smith".to_string(),
            pay_period: PayPeriod::new(
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            ),
            result: PayrollResult {
                basis: CompensationBasis::Hourly,
                gross_earned: net,
                prior_payments: Decimal::ZERO,
                total_deductions: Decimal::ZERO,
                net_payable: net,
                attendance: AttendanceSummary::default(),
                warnings: vec![],
                breakdown: vec![],
            },
            breakdown_text: String::new(),
        }
    }

    #[test]
    fn test_payment_amount_is_rounded_to_cents() {
        let statement = create_statement(dec("3076.923076923"));
        let payment = statement
            .to_payment(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(), None)
            .unwrap();
        assert_eq!(payment.amount, dec("3076.92"));
        assert_eq!(payment.staff_id, "2");
    }

    #[test]
    fn test_payment_gets_default_notes_with_period() {
        let statement = create_statement(dec("100"));
        let payment = statement
            .to_payment(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(), None)
            .unwrap();
        let notes = payment.notes.unwrap();
        assert!(notes.contains("2026-03-01"));
        assert!(notes.contains("2026-03-31"));
    }

    #[test]
    fn test_payment_keeps_caller_notes() {
        let statement = create_statement(dec("100"));
        let payment = statement
            .to_payment(
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                Some("March wages".to_string()),
            )
            .unwrap();
        assert_eq!(payment.notes.as_deref(), Some("March wages"));
    }

    #[test]
    fn test_each_payment_gets_a_fresh_id() {
        let statement = create_statement(dec("100"));
        let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let first = statement.to_payment(date, None).unwrap();
        let second = statement.to_payment(date, None).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_negative_net_cannot_be_paid() {
        let statement = create_statement(dec("-50"));
        let result = statement.to_payment(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(), None);
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "net_payable"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_net_cannot_be_paid() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        assert!(create_statement(Decimal::ZERO).to_payment(date, None).is_err());
        // Rounds to zero cents
        assert!(create_statement(dec("0.004")).to_payment(date, None).is_err());
    }
}
