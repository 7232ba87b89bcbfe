//! Federal income tax calculation.
//!
//! Evaluates the progressive single-filer schedule against an adjusted
//! gross figure: gross income less the personal exemption and standard
//! deduction, and for self-employed obligors, less half of each payroll tax
//! (the self-employment tax deduction).

use rust_decimal::Decimal;

use crate::config::IncomeTaxSchedule;

/// Computes the annual federal income tax liability.
///
/// The bracket with the highest threshold the adjusted gross income meets or
/// exceeds supplies a base tax plus a marginal rate on the excess over that
/// bracket's floor; the excess never goes negative. Below the lowest
/// threshold the bottom rate applies, floored at zero for a negative
/// adjusted gross.
///
/// # Arguments
///
/// * `gross_income_annual` - Annualized gross income
/// * `social_sec_annual` - Annual Social Security liability (for the
///   self-employment deduction)
/// * `medicare_annual` - Annual Medicare liability (same)
/// * `self_employed` - Whether the obligor is self-employed
/// * `schedule` - The income tax schedule for the tax year
pub fn federal_income_tax(
    gross_income_annual: Decimal,
    social_sec_annual: Decimal,
    medicare_annual: Decimal,
    self_employed: bool,
    schedule: &IncomeTaxSchedule,
) -> Decimal {
    let mut adjusted =
        gross_income_annual - schedule.personal_exemption - schedule.standard_deduction;

    if self_employed {
        let half = Decimal::from(2);
        adjusted -= social_sec_annual / half;
        adjusted -= medicare_annual / half;
    }

    let bracket = schedule
        .brackets
        .iter()
        .filter(|b| adjusted >= b.threshold)
        .max_by_key(|b| b.threshold);

    match bracket {
        Some(bracket) => {
            let excess = (adjusted - bracket.floor).max(Decimal::ZERO);
            bracket.base_tax + bracket.marginal_rate * excess
        }
        None => schedule.bottom_rate * adjusted.max(Decimal::ZERO),
    }
}
