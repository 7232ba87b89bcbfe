//! HTTP request handlers for the Child Support Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_support;
use crate::models::{CalculationResult, RawCaseInput};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, EchoResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/echo", get(echo_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the derived support figures.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let raw: RawCaseInput = request.into();

    match calculate_support(&raw, state.policy()) {
        Ok(assessment) => {
            info!(
                correlation_id = %correlation_id,
                children_inside = assessment.input.children_inside,
                self_employed = assessment.input.self_employed,
                child_support_monthly = %assessment.breakdown.child_support_monthly,
                "Calculation completed successfully"
            );

            let result = CalculationResult {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                input: assessment.input,
                breakdown: assessment.breakdown,
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct EchoParams {
    text: Option<String>,
}

/// Handler for GET /echo endpoint.
///
/// Reflects the `text` query parameter and the request headers back to the
/// caller.
async fn echo_handler(headers: HeaderMap, Query(params): Query<EchoParams>) -> impl IntoResponse {
    let text = params.text.unwrap_or_else(|| "Mr. Noname".to_string());

    let headers: BTreeMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    Json(EchoResponse {
        message: format!("Say '{}'", text),
        headers,
    })
}
