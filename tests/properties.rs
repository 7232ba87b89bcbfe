//! Property tests for the Child Support Calculation Engine.
//!
//! These suites check the invariants the engine must hold for any input:
//! ceiling rounding is directional and cent-bounded, monthly figures always
//! derive from the rounded annual value, the engine is idempotent, the
//! support factor clamps and never decreases with more children before the
//! court, and federal tax never jumps downward as income grows.

use proptest::prelude::*;
use rust_decimal::Decimal;

use support_engine::calculation::{
    calculate_support, federal_income_tax, monthly_from_annual, round_up_cents, support_factor,
};
use support_engine::config::PolicyConfig;
use support_engine::models::RawCaseInput;

fn policy() -> PolicyConfig {
    PolicyConfig::tax_year_2020()
}

prop_compose! {
    /// A complete raw input with well-formed values, exercising the
    /// upstream currency formatting on the income amount.
    fn raw_case()(
        income_cents in 0i64..=50_000_000,
        income_freq in 1u32..=52,
        medical_cents in 0i64..=20_000_00,
        medical_freq in 1u32..=52,
        dental_cents in 0i64..=5_000_00,
        dental_freq in 1u32..=52,
        dues_cents in 0i64..=5_000_00,
        dues_freq in 1u32..=52,
        self_employed in any::<bool>(),
        inside in 0u32..=10,
        outside in 0u32..=10,
    ) -> RawCaseInput {
        RawCaseInput {
            income_amount: Some(format!("${}", Decimal::new(income_cents, 2))),
            income_frequency: Some(income_freq.to_string()),
            medical_ins_amount: Some(Decimal::new(medical_cents, 2).to_string()),
            medical_ins_frequency: Some(medical_freq.to_string()),
            dental_ins_amount: Some(Decimal::new(dental_cents, 2).to_string()),
            dental_ins_frequency: Some(dental_freq.to_string()),
            union_dues_amount: Some(Decimal::new(dues_cents, 2).to_string()),
            union_dues_frequency: Some(dues_freq.to_string()),
            self_employed: Some(if self_employed { "YES" } else { "NO" }.to_string()),
            children_inside: Some(inside.to_string()),
            children_outside: Some(outside.to_string()),
        }
    }
}

proptest! {
    /// Ceiling rounding never moves down, never moves more than a cent,
    /// and leaves cent-exact values untouched.
    #[test]
    fn rounding_is_directional(mantissa in 0i64..=1_000_000_000_000, scale in 0u32..=6) {
        let value = Decimal::new(mantissa, scale);
        let rounded = round_up_cents(value);

        prop_assert!(rounded >= value);
        prop_assert!(rounded - value < Decimal::new(1, 2));

        let cent_exact = (value * Decimal::ONE_HUNDRED).fract().is_zero();
        if cent_exact {
            prop_assert_eq!(rounded, value);
        } else {
            prop_assert!(rounded > value);
        }
    }

    /// The engine succeeds on any well-formed input, its monthly figures
    /// derive from the rounded annual values, and the factor stays within
    /// the unit interval.
    #[test]
    fn breakdown_pairs_are_consistent(raw in raw_case()) {
        let assessment = calculate_support(&raw, &policy()).unwrap();
        let b = &assessment.breakdown;

        let pairs = [
            (b.gross_income_annual, b.gross_income_monthly),
            (b.medical_annual, b.medical_monthly),
            (b.dental_annual, b.dental_monthly),
            (b.union_dues_annual, b.union_dues_monthly),
            (b.social_sec_annual, b.social_sec_monthly),
            (b.medicare_annual, b.medicare_monthly),
            (b.income_tax_annual, b.income_tax_monthly),
            (b.net_resources_annual, b.net_resources_monthly),
            (b.child_support_annual, b.child_support_monthly),
        ];

        for (annual, monthly) in pairs {
            prop_assert_eq!(annual, round_up_cents(annual));
            prop_assert_eq!(monthly, monthly_from_annual(annual));
        }

        prop_assert!(b.support_factor >= Decimal::ZERO);
        prop_assert!(b.support_factor <= Decimal::ONE);
    }

    /// Two invocations over the same input serialize byte-identically.
    #[test]
    fn engine_is_idempotent(raw in raw_case()) {
        let policy = policy();
        let first = calculate_support(&raw, &policy).unwrap();
        let second = calculate_support(&raw, &policy).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Beyond the table's last row the factor equals the last row's factor
    /// for the same column, and the factor never decreases as the number of
    /// children before the court grows.
    #[test]
    fn support_factor_clamps_and_grows(inside in 0u32..=30, outside in 0u32..=30) {
        let policy = policy();
        let table = policy.support_factors();
        let max_row = (table.rows().len() - 1) as u32;

        let clamped = support_factor(inside.min(max_row), outside, table);
        prop_assert_eq!(support_factor(inside, outside, table), clamped);

        let grown = support_factor(inside + 1, outside, table);
        prop_assert!(grown >= clamped);
    }

    /// Federal tax never jumps downward as gross income grows, which also
    /// covers continuity at every bracket boundary.
    #[test]
    fn federal_tax_is_monotone(
        gross_cents in 0i64..=70_000_000_00,
        step_cents in 1i64..=10_000_00,
    ) {
        let policy = policy();
        let lower = Decimal::new(gross_cents, 2);
        let higher = lower + Decimal::new(step_cents, 2);

        let tax_lower =
            federal_income_tax(lower, Decimal::ZERO, Decimal::ZERO, false, policy.income_tax());
        let tax_higher =
            federal_income_tax(higher, Decimal::ZERO, Decimal::ZERO, false, policy.income_tax());

        prop_assert!(tax_lower <= tax_higher);
    }
}
