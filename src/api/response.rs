//! Error bodies returned by the payroll API.
//!
//! Every failure is reported as an [`ApiError`] whose [`ErrorCode`] fixes the
//! HTTP status. Engine errors and request-body rejections both convert into
//! it.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required request field is missing.
    ValidationError,
    /// The body is not valid JSON or has the wrong shape.
    MalformedJson,
    /// The request did not declare a JSON body.
    MissingContentType,
    /// A value was rejected by the calculator.
    InvalidInput,
    /// The requested staff member is not in the roster.
    StaffNotFound,
    /// The server's payroll configuration is unusable.
    ConfigError,
}

impl ErrorCode {
    /// HTTP status reported with this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::StaffNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// The offending field, or other context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error without details.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiError::new(
                ErrorCode::InvalidInput,
                format!("Invalid input '{}': {}", field, message),
            )
            .with_details(field),
            EngineError::StaffNotFound { staff_id } => ApiError::new(
                ErrorCode::StaffNotFound,
                format!("Staff not found: {}", staff_id),
            )
            .with_details("The staff id is not in the supplied roster"),
            EngineError::ConfigNotFound { path } => {
                ApiError::new(ErrorCode::ConfigError, "Configuration error")
                    .with_details(format!("Configuration file not found: {}", path))
            }
            EngineError::ConfigParseError { path, message } => {
                ApiError::new(ErrorCode::ConfigError, "Configuration parse error")
                    .with_details(format!("Failed to parse {}: {}", path, message))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let text = err.body_text();
                // serde reports absent required fields as "missing field `x`"
                let code = if text.contains("missing field") {
                    ErrorCode::ValidationError
                } else {
                    ErrorCode::MalformedJson
                };
                ApiError::new(code, text)
            }
            JsonRejection::JsonSyntaxError(err) => ApiError::new(
                ErrorCode::MalformedJson,
                format!("Invalid JSON syntax: {}", err.body_text()),
            ),
            JsonRejection::MissingJsonContentType(_) => ApiError::new(
                ErrorCode::MissingContentType,
                "Content-Type must be application/json",
            ),
            _ => ApiError::new(ErrorCode::MalformedJson, "Failed to parse request body"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let error = ApiError::new(ErrorCode::StaffNotFound, "Staff not found: 9");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "STAFF_NOT_FOUND");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_invalid_input_carries_field_as_details() {
        let error: ApiError =
            EngineError::invalid_input("hourly_rate", "must be greater than zero, got 0").into();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.details.as_deref(), Some("hourly_rate"));
        assert!(error.message.contains("must be greater than zero"));
    }

    #[test]
    fn test_staff_not_found_is_404() {
        let error: ApiError = EngineError::StaffNotFound {
            staff_id: "42".to_string(),
        }
        .into();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert!(error.message.ends_with("42"));
    }

    #[test]
    fn test_config_errors_are_500() {
        let not_found: ApiError = EngineError::ConfigNotFound {
            path: "payroll.yaml".to_string(),
        }
        .into();
        let unparsable: ApiError = EngineError::ConfigParseError {
            path: "payroll.yaml".to_string(),
            message: "bad indent".to_string(),
        }
        .into();
        for error in [not_found, unparsable] {
            assert_eq!(error.code, ErrorCode::ConfigError);
            assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
