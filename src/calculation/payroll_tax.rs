//! Payroll (FICA) tax calculation.
//!
//! This module computes the annual Social Security and Medicare liabilities
//! on gross income, with the self-employment adjustment: self-employed
//! obligors pay the combined rate on 92.35% of gross, while W-2 earners pay
//! the employee rate on the full amount.

use rust_decimal::Decimal;

use crate::config::PayrollTaxRates;

/// Computes the annual Social Security tax liability.
///
/// For self-employed obligors the taxable base is gross income scaled by the
/// self-employment factor and capped at the wage base, taxed at the combined
/// rate. For W-2 earners the base is gross income capped at the wage base,
/// taxed at the employee rate.
///
/// # Arguments
///
/// * `gross_income_annual` - Annualized gross income
/// * `self_employed` - Whether the obligor is self-employed
/// * `rates` - The payroll tax rates for the tax year
///
/// # Examples
///
/// ```
/// use support_engine::calculation::social_security_tax;
/// use support_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PolicyConfig::tax_year_2020();
/// let tax = social_security_tax(
///     Decimal::from_str("60000").unwrap(),
///     true,
///     policy.payroll(),
/// );
/// assert_eq!(tax, Decimal::from_str("6870.8400").unwrap());
/// ```
pub fn social_security_tax(
    gross_income_annual: Decimal,
    self_employed: bool,
    rates: &PayrollTaxRates,
) -> Decimal {
    if self_employed {
        let taxable = (gross_income_annual * rates.self_employment_factor)
            .min(rates.social_security_wage_base);
        taxable * rates.social_security_rate_self_employed
    } else {
        let taxable = gross_income_annual.min(rates.social_security_wage_base);
        taxable * rates.social_security_rate_employee
    }
}

/// Computes the annual Medicare tax liability.
///
/// Same self-employment treatment as Social Security, but no wage cap
/// applies at any income level.
pub fn medicare_tax(
    gross_income_annual: Decimal,
    self_employed: bool,
    rates: &PayrollTaxRates,
) -> Decimal {
    if self_employed {
        gross_income_annual * rates.self_employment_factor * rates.medicare_rate_self_employed
    } else {
        gross_income_annual * rates.medicare_rate_employee
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> PayrollTaxRates {
        PolicyConfig::tax_year_2020().payroll().clone()
    }

    /// SS-001: W-2 earner below the wage base
    #[test]
    fn test_w2_below_wage_base() {
        let tax = social_security_tax(dec("48000"), false, &rates());
        assert_eq!(tax, dec("2976.000"));
    }

    /// SS-002: W-2 earner above the wage base is capped
    #[test]
    fn test_w2_above_wage_base_capped() {
        let tax = social_security_tax(dec("200000"), false, &rates());
        assert_eq!(tax, dec("8537.400"));
    }

    /// SS-003: self-employed pays the combined rate on the scaled base
    #[test]
    fn test_self_employed_scaled_base() {
        let tax = social_security_tax(dec("60000"), true, &rates());
        // 60000 x 0.9235 = 55410, taxed at 12.4%
        assert_eq!(tax, dec("6870.8400"));
    }

    /// SS-004: self-employed cap applies after scaling
    #[test]
    fn test_self_employed_cap_applies_after_scaling() {
        // 160000 x 0.9235 = 147760, above the 137700 wage base
        let tax = social_security_tax(dec("160000"), true, &rates());
        assert_eq!(tax, dec("17074.800"));
    }

    /// SS-005: scaled base just under the cap is not capped
    #[test]
    fn test_self_employed_scaled_base_under_cap() {
        // 149000 x 0.9235 = 137601.5, just under the wage base
        let tax = social_security_tax(dec("149000"), true, &rates());
        assert_eq!(tax, dec("17062.5860"));
    }

    /// MC-001: W-2 Medicare has no cap
    #[test]
    fn test_w2_medicare_uncapped() {
        let tax = medicare_tax(dec("200000"), false, &rates());
        assert_eq!(tax, dec("2900.0000"));
    }

    /// MC-002: self-employed Medicare on the scaled base, uncapped
    #[test]
    fn test_self_employed_medicare_uncapped() {
        let tax = medicare_tax(dec("200000"), true, &rates());
        // 200000 x 0.9235 = 184700, taxed at 2.9%
        assert_eq!(tax, dec("5356.3000"));
    }

    /// MC-003: modest self-employment income
    #[test]
    fn test_self_employed_medicare_modest_income() {
        let tax = medicare_tax(dec("60000"), true, &rates());
        assert_eq!(tax, dec("1606.8900"));
    }

    #[test]
    fn test_zero_income_zero_tax() {
        assert_eq!(
            social_security_tax(Decimal::ZERO, false, &rates()),
            Decimal::ZERO
        );
        assert_eq!(
            social_security_tax(Decimal::ZERO, true, &rates()),
            Decimal::ZERO
        );
        assert_eq!(medicare_tax(Decimal::ZERO, false, &rates()), Decimal::ZERO);
        assert_eq!(medicare_tax(Decimal::ZERO, true, &rates()), Decimal::ZERO);
    }
}
