//! Error types for the payroll engine.
//!
//! Calculation failures are always [`EngineError::InvalidInput`]; the remaining
//! variants come from configuration loading and the calculation service.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use farm_payroll::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "hourly_rate".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'hourly_rate': must be greater than zero");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds unusable values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calculation input was rejected before any arithmetic ran.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that failed validation.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The requested staff member has no record in the supplied data.
    #[error("Staff not found: {staff_id}")]
    StaffNotFound {
        /// The staff id that was requested.
        staff_id: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
