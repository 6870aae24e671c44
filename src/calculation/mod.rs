//! Calculation logic for the farm payroll engine.
//!
//! This module contains the hourly and salaried pay calculators and the
//! steps they are built from: input validation, compensation-model
//! resolution, attendance aggregation, deduction and payment netting, and
//! breakdown formatting. It also provides pay-period selection over the
//! record-store ledgers.
//!
//! Every function here is pure: no I/O, no clock, no shared state.

mod aggregation;
mod breakdown;
mod hourly_pay;
mod netting;
mod period_selection;
mod rates;
mod salaried_pay;
mod validation;

pub use aggregation::{
    HoursAggregation, ResolvedHours, StatusTally, aggregate_hours, push_day_count_lines,
    resolve_hours, summarize_days,
};
pub use breakdown::{BreakdownBuilder, format_amount, format_money, format_quantity, render_breakdown};
pub use hourly_pay::compute_hourly_pay;
pub use netting::{Netting, net_pay};
pub use period_selection::{select_attendance, total_prior_payments};
pub use rates::{SalariedRates, push_hourly_rate_lines, resolve_salaried_rates};
pub use salaried_pay::compute_salaried_pay;
pub use validation::{
    validate_deductions, validate_hourly_compensation, validate_period, validate_prior_payments,
    validate_records, validate_salaried_compensation,
};
