//! Type coercion for raw case input.
//!
//! Every field arrives as text. Coercion runs two passes: an edit pass that
//! scrubs currency formatting uniformly from every value, and a convert pass
//! that parses each field under its declared type. A value that fails to
//! parse aborts the calculation; a value that parses but violates a domain
//! invariant (negative amount, non-positive frequency) does the same.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::models::{CaseInput, RawCaseInput};

/// Strips `$` and `,` and surrounding whitespace from a raw value.
///
/// Applied uniformly to every field before parsing, matching what upstream
/// form clients send (`"$5,000.00"`, `" 12 "`).
fn scrub(value: &str) -> String {
    value.replace(['$', ','], "").trim().to_string()
}

/// Parses a monetary field. Amounts must be non-negative.
fn parse_amount(field: &'static str, raw: &str) -> EngineResult<Decimal> {
    let scrubbed = scrub(raw);
    let amount = Decimal::from_str(&scrubbed).map_err(|_| EngineError::TypeConversion {
        field: field.to_string(),
        value: scrubbed.clone(),
        expected: "decimal amount",
    })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::InvalidValue {
            field: field.to_string(),
            message: "monetary amounts must not be negative".to_string(),
        });
    }

    Ok(amount)
}

/// Parses an annual frequency field. Frequencies must be at least one
/// occurrence per year.
fn parse_frequency(field: &'static str, raw: &str) -> EngineResult<u32> {
    let count = parse_integer(field, raw)?;
    u32::try_from(count)
        .ok()
        .filter(|c| *c >= 1)
        .ok_or_else(|| EngineError::InvalidValue {
            field: field.to_string(),
            message: "must be a positive number of occurrences per year".to_string(),
        })
}

/// Parses a child-count field. Counts must be non-negative.
fn parse_count(field: &'static str, raw: &str) -> EngineResult<u32> {
    let count = parse_integer(field, raw)?;
    u32::try_from(count).map_err(|_| EngineError::InvalidValue {
        field: field.to_string(),
        message: "must be a non-negative count of children".to_string(),
    })
}

fn parse_integer(field: &'static str, raw: &str) -> EngineResult<i64> {
    let scrubbed = scrub(raw);
    i64::from_str(&scrubbed).map_err(|_| EngineError::TypeConversion {
        field: field.to_string(),
        value: scrubbed.clone(),
        expected: "integer",
    })
}

/// Parses the self-employment flag.
///
/// True only for a case-insensitive `"YES"` after scrubbing; every other
/// value, including `"NO"`, `"true"`, and the empty string, is false. The
/// upstream contract is deliberately lenient here.
fn parse_flag(raw: &str) -> bool {
    scrub(raw).eq_ignore_ascii_case("YES")
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> EngineResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| EngineError::MissingFields {
            fields: vec![field.to_string()],
        })
}

/// Coerces a raw input record into a typed [`CaseInput`].
///
/// Assumes required-field validation has already run; an absent field still
/// surfaces as [`EngineError::MissingFields`] rather than a panic.
///
/// # Errors
///
/// Returns [`EngineError::TypeConversion`] for a value that cannot parse
/// under its declared type, or [`EngineError::InvalidValue`] for one that
/// parses but violates an invariant. No partial record is produced.
pub fn coerce(raw: &RawCaseInput) -> EngineResult<CaseInput> {
    Ok(CaseInput {
        income_amount: parse_amount("income_amount", required("income_amount", &raw.income_amount)?)?,
        income_frequency: parse_frequency(
            "income_frequency",
            required("income_frequency", &raw.income_frequency)?,
        )?,
        medical_ins_amount: parse_amount(
            "medical_ins_amount",
            required("medical_ins_amount", &raw.medical_ins_amount)?,
        )?,
        medical_ins_frequency: parse_frequency(
            "medical_ins_frequency",
            required("medical_ins_frequency", &raw.medical_ins_frequency)?,
        )?,
        dental_ins_amount: parse_amount(
            "dental_ins_amount",
            required("dental_ins_amount", &raw.dental_ins_amount)?,
        )?,
        dental_ins_frequency: parse_frequency(
            "dental_ins_frequency",
            required("dental_ins_frequency", &raw.dental_ins_frequency)?,
        )?,
        union_dues_amount: parse_amount(
            "union_dues_amount",
            required("union_dues_amount", &raw.union_dues_amount)?,
        )?,
        union_dues_frequency: parse_frequency(
            "union_dues_frequency",
            required("union_dues_frequency", &raw.union_dues_frequency)?,
        )?,
        self_employed: parse_flag(required("self_employed", &raw.self_employed)?),
        children_inside: parse_count(
            "children_inside",
            required("children_inside", &raw.children_inside)?,
        )?,
        children_outside: parse_count(
            "children_outside",
            required("children_outside", &raw.children_outside)?,
        )?,
    })
}
