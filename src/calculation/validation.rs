//! Required-field validation.
//!
//! Confirms that every field the calculation needs is present on the raw
//! input before any coercion or computation runs.

use crate::error::{EngineError, EngineResult};
use crate::models::RawCaseInput;

/// The eleven fields every calculation request must carry.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "income_amount",
    "income_frequency",
    "medical_ins_amount",
    "medical_ins_frequency",
    "dental_ins_amount",
    "dental_ins_frequency",
    "union_dues_amount",
    "union_dues_frequency",
    "self_employed",
    "children_inside",
    "children_outside",
];

/// Returns the names of every required field absent from the input, in
/// declaration order. An empty result means the input is complete.
pub fn missing_fields(raw: &RawCaseInput) -> Vec<&'static str> {
    let presence = [
        ("income_amount", raw.income_amount.is_some()),
        ("income_frequency", raw.income_frequency.is_some()),
        ("medical_ins_amount", raw.medical_ins_amount.is_some()),
        ("medical_ins_frequency", raw.medical_ins_frequency.is_some()),
        ("dental_ins_amount", raw.dental_ins_amount.is_some()),
        ("dental_ins_frequency", raw.dental_ins_frequency.is_some()),
        ("union_dues_amount", raw.union_dues_amount.is_some()),
        ("union_dues_frequency", raw.union_dues_frequency.is_some()),
        ("self_employed", raw.self_employed.is_some()),
        ("children_inside", raw.children_inside.is_some()),
        ("children_outside", raw.children_outside.is_some()),
    ];

    presence
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect()
}

/// Confirms every required field is present.
///
/// # Errors
///
/// Returns [`EngineError::MissingFields`] listing every absent field name.
pub fn verify_required(raw: &RawCaseInput) -> EngineResult<()> {
    let missing = missing_fields(raw);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(EngineError::MissingFields {
            fields: missing.into_iter().map(String::from).collect(),
        })
    }
}
