//! HTTP request handlers for the payroll calculation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_hourly_pay, compute_salaried_pay, render_breakdown, select_attendance,
    total_prior_payments, validate_period,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, PayrollStatement};

use super::request::{CalculationRequest, ResolvedCompensation};
use super::response::ApiError;
use super::state::AppState;

/// Version reported on every statement.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /payroll/calculate.
///
/// Accepts a calculation request and returns a [`PayrollStatement`].
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected request body"
            );
            return ApiError::from(rejection).into_response();
        }
    };

    let staff_id = request.staff_id.clone();
    let start_time = Instant::now();
    let statement = match perform_calculation(request, &state) {
        Ok(statement) => statement,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                staff_id = %staff_id,
                error = %err,
                "Payroll calculation rejected"
            );
            return ApiError::from(err).into_response();
        }
    };

    if statement.result.is_negative_balance() {
        warn!(
            correlation_id = %correlation_id,
            staff_id = %staff_id,
            net_payable = %statement.result.net_payable,
            "Net payable is negative"
        );
    }
    info!(
        correlation_id = %correlation_id,
        calculation_id = %statement.calculation_id,
        staff_id = %staff_id,
        gross_earned = %statement.result.gross_earned,
        net_payable = %statement.result.net_payable,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll calculation completed"
    );
    Json(statement).into_response()
}

/// Narrows the ledgers to the requested staff member and period, then runs
/// the calculator for the requested basis.
fn perform_calculation(request: CalculationRequest, state: &AppState) -> EngineResult<PayrollStatement> {
    let staff = request
        .staff
        .iter()
        .find(|s| s.id == request.staff_id)
        .ok_or_else(|| EngineError::StaffNotFound {
            staff_id: request.staff_id.clone(),
        })?;

    let pay_period: PayPeriod = request.pay_period.into();
    validate_period(&pay_period)?;

    let records = select_attendance(&staff.id, &pay_period, &request.attendance);

    let result = match request.compensation.resolve(state.config()) {
        ResolvedCompensation::Hourly(compensation) => {
            compute_hourly_pay(&compensation, &records, &request.deductions)?
        }
        ResolvedCompensation::Salaried(compensation, convention) => {
            let prior_payments = total_prior_payments(&staff.id, &pay_period, &request.payments)?;
            compute_salaried_pay(
                &compensation,
                &pay_period,
                &records,
                prior_payments,
                &request.deductions,
                convention,
            )?
        }
    };

    let breakdown_text = render_breakdown(&result, state.currency_symbol());

    Ok(PayrollStatement {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        staff_id: staff.id.clone(),
        staff_name: staff.name.clone(),
        pay_period,
        result,
        breakdown_text,
    })
}
