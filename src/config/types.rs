//! Policy configuration types.
//!
//! This module contains the strongly-typed policy structures the calculator
//! components read from. All values are constructed once at startup and
//! never mutated afterwards; tests substitute alternate schedules by
//! building their own [`PolicyConfig`].

use rust_decimal::Decimal;

/// Payroll (FICA) tax rates and limits for one tax year.
#[derive(Debug, Clone)]
pub struct PayrollTaxRates {
    /// Fraction of gross self-employment income subject to FICA (0.9235).
    pub self_employment_factor: Decimal,
    /// Annual Social Security wage base; earnings above it are untaxed.
    pub social_security_wage_base: Decimal,
    /// Social Security rate withheld from W-2 wages.
    pub social_security_rate_employee: Decimal,
    /// Combined Social Security rate paid on self-employment income.
    pub social_security_rate_self_employed: Decimal,
    /// Medicare rate withheld from W-2 wages. No wage cap applies.
    pub medicare_rate_employee: Decimal,
    /// Combined Medicare rate paid on self-employment income.
    pub medicare_rate_self_employed: Decimal,
}

/// A single bracket in the progressive federal income tax schedule.
///
/// The schedule's published thresholds and floors differ by one dollar in
/// the middle brackets; both are carried so the evaluation reproduces the
/// published tables exactly.
#[derive(Debug, Clone)]
pub struct TaxBracket {
    /// Adjusted gross income at or above which this bracket applies.
    pub threshold: Decimal,
    /// The amount the marginal rate's excess is measured from.
    pub floor: Decimal,
    /// Tax owed on income up to the floor.
    pub base_tax: Decimal,
    /// Marginal rate applied to income above the floor.
    pub marginal_rate: Decimal,
}

/// The federal income tax schedule for one tax year.
#[derive(Debug, Clone)]
pub struct IncomeTaxSchedule {
    /// Personal exemption subtracted from gross income.
    pub personal_exemption: Decimal,
    /// Standard deduction subtracted from gross income.
    pub standard_deduction: Decimal,
    /// Rate applied below the lowest bracket threshold.
    pub bottom_rate: Decimal,
    /// The progressive brackets. Evaluation picks the highest threshold the
    /// adjusted gross income meets or exceeds, so ordering is irrelevant.
    pub brackets: Vec<TaxBracket>,
}

/// The guideline support percentage table.
///
/// Rows are indexed by the number of children before the court, columns by
/// the number of children the obligor owes support to outside the case.
/// Row 0 is empty: with no children before the court there is no obligation.
#[derive(Debug, Clone)]
pub struct SupportFactorTable {
    rows: Vec<Vec<Decimal>>,
}

impl SupportFactorTable {
    /// Creates a table from its rows.
    pub fn new(rows: Vec<Vec<Decimal>>) -> Self {
        Self { rows }
    }

    /// Returns the table rows.
    pub fn rows(&self) -> &[Vec<Decimal>] {
        &self.rows
    }
}

/// The complete statutory policy for one tax year.
///
/// Aggregates everything the calculation stages need: payroll tax rates,
/// the income tax schedule, the support factor table, and the monthly net
/// resources cap. Calculators borrow the pieces they use, which keeps the
/// engine reentrant and lets tests inject alternate schedules.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    payroll: PayrollTaxRates,
    income_tax: IncomeTaxSchedule,
    support_factors: SupportFactorTable,
    monthly_net_resources_cap: Decimal,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(
        payroll: PayrollTaxRates,
        income_tax: IncomeTaxSchedule,
        support_factors: SupportFactorTable,
        monthly_net_resources_cap: Decimal,
    ) -> Self {
        Self {
            payroll,
            income_tax,
            support_factors,
            monthly_net_resources_cap,
        }
    }

    /// Returns the payroll tax rates.
    pub fn payroll(&self) -> &PayrollTaxRates {
        &self.payroll
    }

    /// Returns the federal income tax schedule.
    pub fn income_tax(&self) -> &IncomeTaxSchedule {
        &self.income_tax
    }

    /// Returns the support factor table.
    pub fn support_factors(&self) -> &SupportFactorTable {
        &self.support_factors
    }

    /// Returns the monthly cap on net resources subject to the guideline
    /// percentage.
    pub fn monthly_net_resources_cap(&self) -> Decimal {
        self.monthly_net_resources_cap
    }

    /// Returns the annualized net resources cap.
    pub fn annual_net_resources_cap(&self) -> Decimal {
        self.monthly_net_resources_cap * Decimal::from(12)
    }
}
