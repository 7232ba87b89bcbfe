//! Statutory policy configuration for the Child Support Calculation Engine.
//!
//! This module contains the immutable policy data the calculators are
//! parameterized over: payroll tax rates, the federal income tax schedule,
//! the guideline support factor table, and the net resources cap.

mod statutory;
mod types;

pub use types::{
    IncomeTaxSchedule, PayrollTaxRates, PolicyConfig, SupportFactorTable, TaxBracket,
};
