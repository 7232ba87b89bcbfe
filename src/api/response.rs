//! Response types for the Child Support Calculation Engine API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors to HTTP responses, and the echo endpoint's payload.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::MissingFields { ref fields } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_FIELDS",
                    error.to_string(),
                    format!("{} required field(s) absent from the request", fields.len()),
                ),
            },
            EngineError::TypeConversion { ref field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TYPE_CONVERSION",
                    error.to_string(),
                    format!("The value supplied for '{}' could not be converted", field),
                ),
            },
            EngineError::InvalidValue { ref field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_VALUE",
                    error.to_string(),
                    format!("The value supplied for '{}' violates an input invariant", field),
                ),
            },
        }
    }
}

/// Response body for the `/echo` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoResponse {
    /// The echoed message.
    pub message: String,
    /// The request headers as received.
    pub headers: BTreeMap<String, String>,
}
