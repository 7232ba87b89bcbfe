//! HTTP API module for the Child Support Calculation Engine.
//!
//! This module provides the REST API endpoints for calculating guideline
//! child support and the echo diagnostic endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RawField};
pub use response::{ApiError, EchoResponse};
pub use state::AppState;
