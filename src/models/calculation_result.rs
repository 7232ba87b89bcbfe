//! Calculation result models for the Child Support Calculation Engine.
//!
//! This module contains the [`SupportBreakdown`] produced by the engine, the
//! [`SupportAssessment`] pairing it with the coerced input, and the
//! [`CalculationResult`] envelope the API returns.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CaseInput;

/// The fully derived support figures for one case.
///
/// Every annual amount is rounded up to cent precision, and each monthly
/// amount is the rounded annual value divided by twelve, itself rounded up.
/// Produced once per calculation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportBreakdown {
    /// Annualized gross income.
    pub gross_income_annual: Decimal,
    /// Monthly gross income.
    pub gross_income_monthly: Decimal,
    /// Annualized health insurance premiums.
    pub medical_annual: Decimal,
    /// Monthly health insurance premiums.
    pub medical_monthly: Decimal,
    /// Annualized dental insurance premiums.
    pub dental_annual: Decimal,
    /// Monthly dental insurance premiums.
    pub dental_monthly: Decimal,
    /// Annualized union dues.
    pub union_dues_annual: Decimal,
    /// Monthly union dues.
    pub union_dues_monthly: Decimal,
    /// Annual Social Security tax liability.
    pub social_sec_annual: Decimal,
    /// Monthly Social Security tax liability.
    pub social_sec_monthly: Decimal,
    /// Annual Medicare tax liability.
    pub medicare_annual: Decimal,
    /// Monthly Medicare tax liability.
    pub medicare_monthly: Decimal,
    /// Annual federal income tax liability.
    pub income_tax_annual: Decimal,
    /// Monthly federal income tax liability.
    pub income_tax_monthly: Decimal,
    /// Annual net resources: gross income minus the statutory deductions.
    /// May be negative.
    pub net_resources_annual: Decimal,
    /// Monthly net resources.
    pub net_resources_monthly: Decimal,
    /// The guideline percentage applied to capped net resources.
    pub support_factor: Decimal,
    /// Annual child support obligation.
    pub child_support_annual: Decimal,
    /// Monthly child support obligation.
    pub child_support_monthly: Decimal,
}

/// The engine's complete output for one invocation: the coerced input and
/// the derived breakdown. Deterministic for a given input and policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportAssessment {
    /// The typed input the breakdown was derived from.
    pub input: CaseInput,
    /// The derived support figures.
    pub breakdown: SupportBreakdown,
}

/// The API envelope around a [`SupportAssessment`].
///
/// The envelope carries the only non-deterministic fields (identifier and
/// timestamp); the assessment itself is a pure function of the input.
///
/// # Example
///
/// ```
/// use support_engine::calculation::calculate_support;
/// use support_engine::config::PolicyConfig;
/// use support_engine::models::{CalculationResult, RawCaseInput};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let raw = RawCaseInput {
///     income_amount: Some("$5,000.00".to_string()),
///     income_frequency: Some("12".to_string()),
///     medical_ins_amount: Some("0".to_string()),
///     medical_ins_frequency: Some("12".to_string()),
///     dental_ins_amount: Some("0".to_string()),
///     dental_ins_frequency: Some("12".to_string()),
///     union_dues_amount: Some("0".to_string()),
///     union_dues_frequency: Some("12".to_string()),
///     self_employed: Some("NO".to_string()),
///     children_inside: Some("1".to_string()),
///     children_outside: Some("0".to_string()),
/// };
///
/// let policy = PolicyConfig::tax_year_2020();
/// let assessment = calculate_support(&raw, &policy).unwrap();
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: env!("CARGO_PKG_VERSION").to_string(),
///     input: assessment.input,
///     breakdown: assessment.breakdown,
/// };
/// assert!(result.breakdown.child_support_monthly > rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The coerced input the breakdown was derived from.
    pub input: CaseInput,
    /// The derived support figures.
    pub breakdown: SupportBreakdown,
}
