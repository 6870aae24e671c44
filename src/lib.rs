//! Deterministic payroll engine for farm staff
//!
//! This crate computes gross earnings, net payable and an itemized breakdown
//! for one staff member over one pay period, from attendance records, prior
//! payments and deductions. Staff are paid either by the hour or from a
//! yearly salary under an explicitly chosen day convention.
//!
//! The calculators in [`calculation`] are pure functions. [`api`] wraps them
//! in a JSON service that narrows the record-store ledgers to the requested
//! staff member and period and fills omitted parameters from [`config`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
