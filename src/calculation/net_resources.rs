//! Net resources and the capped support obligation.
//!
//! Tex. Fam. Code § 154.062 defines net resources as gross income less
//! insurance premiums, union dues, and the three federal tax liabilities.
//! The guideline percentage applies to net resources capped at the
//! § 154.125 ceiling.

use rust_decimal::Decimal;

/// Computes annual net resources: gross income minus the five statutory
/// deductions and federal income tax. May be negative; the value is not
/// clamped here.
#[allow(clippy::too_many_arguments)]
pub fn annual_net_resources(
    gross_income_annual: Decimal,
    medical_annual: Decimal,
    dental_annual: Decimal,
    union_dues_annual: Decimal,
    social_sec_annual: Decimal,
    medicare_annual: Decimal,
    income_tax_annual: Decimal,
) -> Decimal {
    gross_income_annual
        - medical_annual
        - dental_annual
        - union_dues_annual
        - social_sec_annual
        - medicare_annual
        - income_tax_annual
}

/// Computes the annual obligation: net resources capped at the annual
/// ceiling, times the guideline support factor.
pub fn support_obligation(
    net_resources_annual: Decimal,
    annual_cap: Decimal,
    support_factor: Decimal,
) -> Decimal {
    net_resources_annual.min(annual_cap) * support_factor
}
