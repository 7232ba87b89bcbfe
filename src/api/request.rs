//! Request types for the Child Support Calculation Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Upstream form clients are inconsistent about scalar types, so
//! every field accepts a JSON string, number, or boolean and is normalized
//! to the raw text the engine coerces.

use serde::{Deserialize, Serialize};

use crate::models::RawCaseInput;

/// A raw field value as it appears in the request JSON.
///
/// Clients send `"12"` and `12` interchangeably; both normalize to the same
/// text before coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// A JSON string value.
    Text(String),
    /// A JSON number value.
    Number(serde_json::Number),
    /// A JSON boolean value.
    Flag(bool),
}

impl RawField {
    /// Converts the value to the textual form the engine coerces.
    pub fn into_text(self) -> String {
        match self {
            RawField::Text(s) => s,
            RawField::Number(n) => n.to_string(),
            RawField::Flag(b) => b.to_string(),
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// All fields are optional at the parsing layer; the engine's validator
/// reports every absent field in a single error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Income per pay occurrence.
    #[serde(default)]
    pub income_amount: Option<RawField>,
    /// Pay occurrences per year.
    #[serde(default)]
    pub income_frequency: Option<RawField>,
    /// Health insurance premium per occurrence.
    #[serde(default)]
    pub medical_ins_amount: Option<RawField>,
    /// Health insurance payments per year.
    #[serde(default)]
    pub medical_ins_frequency: Option<RawField>,
    /// Dental insurance premium per occurrence.
    #[serde(default)]
    pub dental_ins_amount: Option<RawField>,
    /// Dental insurance payments per year.
    #[serde(default)]
    pub dental_ins_frequency: Option<RawField>,
    /// Union dues per occurrence.
    #[serde(default)]
    pub union_dues_amount: Option<RawField>,
    /// Union dues payments per year.
    #[serde(default)]
    pub union_dues_frequency: Option<RawField>,
    /// Whether the obligor is self-employed ("YES" means yes).
    #[serde(default)]
    pub self_employed: Option<RawField>,
    /// Children of this case before the court.
    #[serde(default)]
    pub children_inside: Option<RawField>,
    /// Children the obligor owes support to outside this case.
    #[serde(default)]
    pub children_outside: Option<RawField>,
}

impl From<CalculationRequest> for RawCaseInput {
    fn from(req: CalculationRequest) -> Self {
        RawCaseInput {
            income_amount: req.income_amount.map(RawField::into_text),
            income_frequency: req.income_frequency.map(RawField::into_text),
            medical_ins_amount: req.medical_ins_amount.map(RawField::into_text),
            medical_ins_frequency: req.medical_ins_frequency.map(RawField::into_text),
            dental_ins_amount: req.dental_ins_amount.map(RawField::into_text),
            dental_ins_frequency: req.dental_ins_frequency.map(RawField::into_text),
            union_dues_amount: req.union_dues_amount.map(RawField::into_text),
            union_dues_frequency: req.union_dues_frequency.map(RawField::into_text),
            self_employed: req.self_employed.map(RawField::into_text),
            children_inside: req.children_inside.map(RawField::into_text),
            children_outside: req.children_outside.map(RawField::into_text),
        }
    }
}
