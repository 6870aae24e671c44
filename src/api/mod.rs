//! HTTP API module for the farm payroll engine.
//!
//! This module provides the JSON endpoint the salary-review screen calls to
//! compute a staff member's pay for a period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ENGINE_VERSION, create_router};
pub use request::{CalculationRequest, CompensationRequest, PayPeriodRequest, ResolvedCompensation};
pub use response::{ApiError, ErrorCode};
pub use state::AppState;
