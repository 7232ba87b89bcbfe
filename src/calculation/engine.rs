//! Engine orchestration.
//!
//! Ties the calculation stages together in strict dependency order: validate
//! the raw input, coerce it, annualize the recurring amounts, compute the
//! three tax liabilities, derive net resources and the capped obligation,
//! and round every figure into its annual/monthly pair. Each stage is a pure
//! transform; the whole pipeline is deterministic and reentrant.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{RawCaseInput, SupportAssessment, SupportBreakdown};

use super::coercion::coerce;
use super::income_tax::federal_income_tax;
use super::net_resources::{annual_net_resources, support_obligation};
use super::payroll_tax::{medicare_tax, social_security_tax};
use super::rounding::{monthly_from_annual, round_up_cents};
use super::support_factor::support_factor;
use super::validation::verify_required;

/// Annualizes a per-occurrence amount.
fn annualized(amount: Decimal, frequency: u32) -> Decimal {
    amount * Decimal::from(frequency)
}

/// Calculates the guideline child support obligation for one case.
///
/// This is the engine's single entry point. It performs no I/O and keeps no
/// state between invocations; calling it twice with the same input and
/// policy produces identical output.
///
/// # Errors
///
/// * [`EngineError::MissingFields`](crate::error::EngineError::MissingFields)
///   when any required field is absent.
/// * [`EngineError::TypeConversion`](crate::error::EngineError::TypeConversion)
///   when a value cannot parse under its declared type.
/// * [`EngineError::InvalidValue`](crate::error::EngineError::InvalidValue)
///   when a parsed value violates a documented invariant.
///
/// # Example
///
/// ```
/// use support_engine::calculation::calculate_support;
/// use support_engine::config::PolicyConfig;
/// use support_engine::models::RawCaseInput;
///
/// let raw = RawCaseInput {
///     income_amount: Some("$5,000.00".to_string()),
///     income_frequency: Some("12".to_string()),
///     medical_ins_amount: Some("350.00".to_string()),
///     medical_ins_frequency: Some("12".to_string()),
///     dental_ins_amount: Some("54.50".to_string()),
///     dental_ins_frequency: Some("12".to_string()),
///     union_dues_amount: Some("$50.00".to_string()),
///     union_dues_frequency: Some("12".to_string()),
///     self_employed: Some("YES".to_string()),
///     children_inside: Some("1".to_string()),
///     children_outside: Some("0".to_string()),
/// };
///
/// let policy = PolicyConfig::tax_year_2020();
/// let assessment = calculate_support(&raw, &policy).unwrap();
/// assert_eq!(assessment.breakdown.child_support_monthly.to_string(), "678.99");
/// ```
pub fn calculate_support(
    raw: &RawCaseInput,
    policy: &PolicyConfig,
) -> EngineResult<SupportAssessment> {
    verify_required(raw)?;
    let input = coerce(raw)?;

    let gross_income_annual = annualized(input.income_amount, input.income_frequency);
    let medical_annual = annualized(input.medical_ins_amount, input.medical_ins_frequency);
    let dental_annual = annualized(input.dental_ins_amount, input.dental_ins_frequency);
    let union_dues_annual = annualized(input.union_dues_amount, input.union_dues_frequency);

    let social_sec_annual =
        social_security_tax(gross_income_annual, input.self_employed, policy.payroll());
    let medicare_annual = medicare_tax(gross_income_annual, input.self_employed, policy.payroll());
    let income_tax_annual = federal_income_tax(
        gross_income_annual,
        social_sec_annual,
        medicare_annual,
        input.self_employed,
        policy.income_tax(),
    );

    let net_resources_annual = annual_net_resources(
        gross_income_annual,
        medical_annual,
        dental_annual,
        union_dues_annual,
        social_sec_annual,
        medicare_annual,
        income_tax_annual,
    );

    let support_factor = support_factor(
        input.children_inside,
        input.children_outside,
        policy.support_factors(),
    );
    let child_support_annual = support_obligation(
        net_resources_annual,
        policy.annual_net_resources_cap(),
        support_factor,
    );

    // Rounding runs last, over the unrounded figures; downstream stages
    // above all consumed full-precision values.
    let pair = |annual: Decimal| {
        let rounded = round_up_cents(annual);
        (rounded, monthly_from_annual(rounded))
    };

    let (gross_income_annual, gross_income_monthly) = pair(gross_income_annual);
    let (medical_annual, medical_monthly) = pair(medical_annual);
    let (dental_annual, dental_monthly) = pair(dental_annual);
    let (union_dues_annual, union_dues_monthly) = pair(union_dues_annual);
    let (social_sec_annual, social_sec_monthly) = pair(social_sec_annual);
    let (medicare_annual, medicare_monthly) = pair(medicare_annual);
    let (income_tax_annual, income_tax_monthly) = pair(income_tax_annual);
    let (net_resources_annual, net_resources_monthly) = pair(net_resources_annual);
    let (child_support_annual, child_support_monthly) = pair(child_support_annual);

    let breakdown = SupportBreakdown {
        gross_income_annual,
        gross_income_monthly,
        medical_annual,
        medical_monthly,
        dental_annual,
        dental_monthly,
        union_dues_annual,
        union_dues_monthly,
        social_sec_annual,
        social_sec_monthly,
        medicare_annual,
        medicare_monthly,
        income_tax_annual,
        income_tax_monthly,
        net_resources_annual,
        net_resources_monthly,
        support_factor,
        child_support_annual,
        child_support_monthly,
    };

    Ok(SupportAssessment { input, breakdown })
}
