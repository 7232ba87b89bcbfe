//! Calculation logic for the Child Support Calculation Engine.
//!
//! This module contains the calculation stages in dependency order:
//! required-field validation, type coercion, payroll tax calculation,
//! federal income tax calculation, the guideline support factor lookup, net
//! resources and the capped obligation, ceiling rounding with monthly
//! scaling, and the engine orchestration tying the stages together.

mod coercion;
mod engine;
mod income_tax;
mod net_resources;
mod payroll_tax;
mod rounding;
mod support_factor;
mod validation;

pub use coercion::coerce;
pub use engine::calculate_support;
pub use income_tax::federal_income_tax;
pub use net_resources::{annual_net_resources, support_obligation};
pub use payroll_tax::{medicare_tax, social_security_tax};
pub use rounding::{monthly_from_annual, round_up_cents};
pub use support_factor::support_factor;
pub use validation::{REQUIRED_FIELDS, missing_fields, verify_required};
