//! Response types for the pricing API.
//!
//! This module defines the quote envelope returned on success, the warnings
//! it may carry, and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// A non-fatal observation about a quote.
///
/// Warnings flag inputs that price fine but that the booking flow should
/// look at, such as a party larger than the room's capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

impl QuoteWarning {
    /// Creates an over-capacity warning.
    pub fn over_capacity(subject: &str, guests: u32, max_pax: u32) -> Self {
        Self {
            code: "OVER_CAPACITY".to_string(),
            message: format!(
                "{} has {} guests but sleeps at most {}",
                subject, guests, max_pax
            ),
        }
    }
}

/// The envelope returned for a priced quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse<T> {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that priced the quote.
    pub engine_version: String,
    /// The resort the catalog belongs to.
    pub resort_code: String,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// The engine's result, verbatim.
    pub pricing: T,
    /// `grand_total` formatted for display.
    pub formatted_grand_total: String,
    /// Non-fatal observations about the quote.
    pub warnings: Vec<QuoteWarning>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::DuplicateCatalogEntry { .. }
            | EngineError::InvalidSetting { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    error.to_string(),
                ),
            },
            EngineError::AccommodationTypeNotFound { id } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "ACCOMMODATION_TYPE_NOT_FOUND",
                    format!("Accommodation type not found: {}", id),
                    format!("The accommodation type '{}' is not offered by this resort", id),
                ),
            ),
            EngineError::AddonNotFound { id } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "ADDON_NOT_FOUND",
                    format!("Add-on not found: {}", id),
                    format!("The add-on '{}' is not offered by this resort", id),
                ))
            }
            EngineError::InvalidRequest { field, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid field '{}': {}", field, message),
                    "The request contains invalid booking details",
                ))
            }
            EngineError::Server(err) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("SERVER_ERROR", "Server error", err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_unknown_type_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::AccommodationTypeNotFound {
            id: "penthouse".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "ACCOMMODATION_TYPE_NOT_FOUND");
        assert!(api_error.error.message.contains("penthouse"));
    }

    #[test]
    fn test_invalid_request_maps_to_validation_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidRequest {
            field: "check_out".to_string(),
            message: "must be after check_in".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/x".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_over_capacity_warning() {
        let warning = QuoteWarning::over_capacity("Garden Room", 5, 3);
        assert_eq!(warning.code, "OVER_CAPACITY");
        assert_eq!(warning.message, "Garden Room has 5 guests but sleeps at most 3");
    }
}
