//! Case input models.
//!
//! This module defines the raw textual input record received at the request
//! boundary and the typed record the calculators operate on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw input record as received from the caller.
///
/// Every field arrives as optional text; upstream clients send amounts with
/// currency formatting (`"$5,000.00"`) and counts with stray whitespace.
/// Validation reports which fields are absent, and coercion turns the
/// present ones into a [`CaseInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCaseInput {
    /// Income per pay occurrence.
    #[serde(default)]
    pub income_amount: Option<String>,
    /// Pay occurrences per year.
    #[serde(default)]
    pub income_frequency: Option<String>,
    /// Health insurance premium per occurrence.
    #[serde(default)]
    pub medical_ins_amount: Option<String>,
    /// Health insurance payments per year.
    #[serde(default)]
    pub medical_ins_frequency: Option<String>,
    /// Dental insurance premium per occurrence.
    #[serde(default)]
    pub dental_ins_amount: Option<String>,
    /// Dental insurance payments per year.
    #[serde(default)]
    pub dental_ins_frequency: Option<String>,
    /// Union dues per occurrence.
    #[serde(default)]
    pub union_dues_amount: Option<String>,
    /// Union dues payments per year.
    #[serde(default)]
    pub union_dues_frequency: Option<String>,
    /// Whether the obligor is self-employed ("YES" means yes).
    #[serde(default)]
    pub self_employed: Option<String>,
    /// Children of this case before the court.
    #[serde(default)]
    pub children_inside: Option<String>,
    /// Children the obligor owes support to outside this case.
    #[serde(default)]
    pub children_outside: Option<String>,
}

/// The typed case input, immutable after coercion.
///
/// Amounts are non-negative monetary values; frequencies are positive annual
/// occurrence counts (12 = monthly, 26 = biweekly, 52 = weekly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInput {
    /// Income per pay occurrence.
    pub income_amount: Decimal,
    /// Pay occurrences per year.
    pub income_frequency: u32,
    /// Health insurance premium per occurrence.
    pub medical_ins_amount: Decimal,
    /// Health insurance payments per year.
    pub medical_ins_frequency: u32,
    /// Dental insurance premium per occurrence.
    pub dental_ins_amount: Decimal,
    /// Dental insurance payments per year.
    pub dental_ins_frequency: u32,
    /// Union dues per occurrence.
    pub union_dues_amount: Decimal,
    /// Union dues payments per year.
    pub union_dues_frequency: u32,
    /// Whether the obligor is self-employed.
    pub self_employed: bool,
    /// Children of this case before the court.
    pub children_inside: u32,
    /// Children the obligor owes support to outside this case.
    pub children_outside: u32,
}
