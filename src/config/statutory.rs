//! The built-in statutory schedule.
//!
//! Tax year 2020 constants: FICA rates and the Social Security wage base,
//! the single-filer federal income tax brackets, the Tex. Fam. Code
//! § 154.129 multiple-household percentage table, and the § 154.125 monthly
//! net resources cap.

use rust_decimal::Decimal;

use super::types::{
    IncomeTaxSchedule, PayrollTaxRates, PolicyConfig, SupportFactorTable, TaxBracket,
};

/// Shorthand for exact decimal constants.
fn d(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

impl PolicyConfig {
    /// Returns the tax year 2020 statutory policy.
    ///
    /// # Example
    ///
    /// ```
    /// use support_engine::config::PolicyConfig;
    ///
    /// let policy = PolicyConfig::tax_year_2020();
    /// assert_eq!(policy.monthly_net_resources_cap().to_string(), "9200");
    /// ```
    pub fn tax_year_2020() -> Self {
        let payroll = PayrollTaxRates {
            self_employment_factor: d(9235, 4),
            social_security_wage_base: d(137_700, 0),
            social_security_rate_employee: d(62, 3),
            social_security_rate_self_employed: d(124, 3),
            medicare_rate_employee: d(145, 4),
            medicare_rate_self_employed: d(29, 3),
        };

        let income_tax = IncomeTaxSchedule {
            personal_exemption: Decimal::ZERO,
            standard_deduction: d(12_400, 0),
            bottom_rate: d(10, 2),
            brackets: vec![
                bracket(d(518_400, 0), d(518_400, 0), d(156_235, 0), d(37, 2)),
                bracket(d(207_351, 0), d(207_350, 0), d(473_675, 1), d(35, 2)),
                bracket(d(163_301, 0), d(163_300, 0), d(332_715, 1), d(32, 2)),
                bracket(d(85_526, 0), d(85_525, 0), d(146_055, 1), d(24, 2)),
                bracket(d(40_126, 0), d(40_125, 0), d(46_175, 1), d(22, 2)),
                bracket(d(9_876, 0), d(9_875, 0), d(9_875, 1), d(12, 2)),
            ],
        };

        // Row index: children before the court.
        // Column index: children the obligor supports outside this case.
        let support_factors = SupportFactorTable::new(vec![
            vec![],
            vec![
                d(20, 2),
                d(175, 3),
                d(16, 2),
                d(1475, 4),
                d(1360, 4),
                d(1333, 4),
                d(1314, 4),
                d(13, 2),
            ],
            vec![
                d(25, 2),
                d(225, 3),
                d(2063, 4),
                d(19, 2),
                d(1833, 4),
                d(1786, 4),
                d(175, 3),
                d(1722, 4),
            ],
            vec![
                d(30, 2),
                d(2738, 4),
                d(2520, 4),
                d(24, 2),
                d(2314, 4),
                d(225, 3),
                d(22, 2),
                d(216, 3),
            ],
            vec![
                d(35, 2),
                d(322, 3),
                d(3033, 4),
                d(29, 2),
                d(28, 2),
                d(2722, 4),
                d(266, 3),
                d(2609, 4),
            ],
            vec![
                d(40, 2),
                d(3733, 4),
                d(3543, 4),
                d(34, 2),
                d(3289, 4),
                d(32, 2),
                d(3127, 4),
                d(3067, 4),
            ],
            vec![
                d(40, 2),
                d(3771, 4),
                d(36, 2),
                d(3467, 4),
                d(336, 3),
                d(3273, 4),
                d(32, 2),
                d(3138, 4),
            ],
            vec![
                d(40, 2),
                d(38, 2),
                d(3644, 4),
                d(352, 3),
                d(3418, 4),
                d(3333, 4),
                d(3262, 4),
                d(32, 2),
            ],
        ]);

        PolicyConfig::new(payroll, income_tax, support_factors, d(9_200, 0))
    }
}

fn bracket(threshold: Decimal, floor: Decimal, base_tax: Decimal, marginal_rate: Decimal) -> TaxBracket {
    TaxBracket {
        threshold,
        floor,
        base_tax,
        marginal_rate,
    }
}
