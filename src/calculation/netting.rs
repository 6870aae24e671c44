//! Deduction and payment netting.
//!
//! Subtracts prior payments and deductions from gross earnings. The net
//! figure is never clamped: a negative balance is returned as computed and
//! flagged with a breakdown line and a [`PayrollWarning`].

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    BreakdownKind, BreakdownLine, Deduction, NEGATIVE_NET_PAYABLE, PayrollWarning,
};

use super::breakdown::{BreakdownBuilder, format_amount};
use super::validation::in_range;

/// Figures produced by netting gross earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Netting {
    /// Gross earnings before any subtraction.
    pub gross_earned: Decimal,
    /// Payments already made in the period.
    pub prior_payments: Decimal,
    /// Sum of the deduction amounts.
    pub deductions_total: Decimal,
    /// `prior_payments + deductions_total`.
    pub total_deductions: Decimal,
    /// `gross_earned - total_deductions`.
    pub net_payable: Decimal,
}

/// Nets gross earnings against prior payments and deductions.
///
/// Fails with `InvalidInput` when the subtracted total overflows.
///
/// ```
/// use farm_payroll::calculation::net_pay;
/// use farm_payroll::models::Deduction;
/// use rust_decimal::Decimal;
///
/// let deductions = vec![Deduction::new("Advance", Decimal::new(700, 0))];
/// let netting = net_pay(Decimal::new(5500, 0), Decimal::new(5000, 0), &deductions).unwrap();
///
/// assert_eq!(netting.total_deductions, Decimal::new(5700, 0));
/// assert_eq!(netting.net_payable, Decimal::new(-200, 0));
/// ```
pub fn net_pay(
    gross_earned: Decimal,
    prior_payments: Decimal,
    deductions: &[Deduction],
) -> EngineResult<Netting> {
    let deductions_total = in_range(
        deductions
            .iter()
            .try_fold(Decimal::ZERO, |sum, d| sum.checked_add(d.amount)),
        "deductions",
    )?;
    let total_deductions = in_range(prior_payments.checked_add(deductions_total), "deductions")?;
    let net_payable = in_range(gross_earned.checked_sub(total_deductions), "deductions")?;

    Ok(Netting {
        gross_earned,
        prior_payments,
        deductions_total,
        total_deductions,
        net_payable,
    })
}

impl Netting {
    /// Returns true when more was subtracted than earned.
    pub fn is_negative(&self) -> bool {
        self.net_payable < Decimal::ZERO
    }

    /// The warning to attach to the result, if the balance is negative.
    pub fn warning(&self) -> Option<PayrollWarning> {
        self.is_negative().then(|| PayrollWarning {
            code: NEGATIVE_NET_PAYABLE.to_string(),
            message: format!(
                "Deductions of {} exceed gross earnings of {}; net payable is {}",
                format_amount(self.total_deductions),
                format_amount(self.gross_earned),
                format_amount(self.net_payable)
            ),
            severity: "high".to_string(),
        })
    }

    /// Appends the prior-payment line (when requested), one line per
    /// deduction, the net total and, if needed, the negative-balance flag.
    pub fn push_lines(
        &self,
        deductions: &[Deduction],
        include_prior_payments: bool,
        builder: &mut BreakdownBuilder,
    ) {
        if include_prior_payments {
            builder.push(
                BreakdownLine::new(BreakdownKind::PriorPayments, "Prior payments")
                    .with_amount(-self.prior_payments)
                    .with_reasoning("already paid in this period"),
            );
        }

        if deductions.is_empty() {
            builder.push(
                BreakdownLine::new(BreakdownKind::Deduction, "Deductions")
                    .with_amount(Decimal::ZERO)
                    .with_reasoning("no deductions"),
            );
        }
        for deduction in deductions {
            builder.push(
                BreakdownLine::new(BreakdownKind::Deduction, deduction.description.clone())
                    .with_amount(-deduction.amount),
            );
        }

        let reasoning = if include_prior_payments {
            format!(
                "{} - {} prior payments - {} deductions",
                format_amount(self.gross_earned),
                format_amount(self.prior_payments),
                format_amount(self.deductions_total)
            )
        } else {
            format!(
                "{} - {} deductions",
                format_amount(self.gross_earned),
                format_amount(self.deductions_total)
            )
        };
        builder.push(
            BreakdownLine::new(BreakdownKind::NetTotal, "Net payable")
                .with_amount(self.net_payable)
                .with_reasoning(reasoning),
        );

        if self.is_negative() {
            builder.push(
                BreakdownLine::new(BreakdownKind::NegativeBalance, "Negative balance")
                    .with_amount(self.net_payable)
                    .with_reasoning(format!(
                        "overpaid by {}; review before recording a payment",
                        format_amount(-self.net_payable)
                    )),
            );
        }
    }
}
