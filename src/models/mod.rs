//! Core data models for the Child Support Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod case_input;

pub use calculation_result::{CalculationResult, SupportAssessment, SupportBreakdown};
pub use case_input::{CaseInput, RawCaseInput};
