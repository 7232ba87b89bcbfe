//! Guideline support factor lookup.
//!
//! The percentage applied to net resources comes from a fixed table indexed
//! by the number of children before the court and the number of children the
//! obligor supports outside the case. Both indexes clamp silently to the
//! table's edges, so any pair of counts yields a well-defined factor.

use rust_decimal::Decimal;

use crate::config::SupportFactorTable;

/// Looks up the guideline support percentage for a case.
///
/// `children_inside` clamps to the table's last row and `children_outside`
/// clamps to the last column of the selected row. An empty row (no children
/// before the court) yields a factor of zero: there is no obligation to
/// calculate.
pub fn support_factor(
    children_inside: u32,
    children_outside: u32,
    table: &SupportFactorTable,
) -> Decimal {
    let rows = table.rows();
    if rows.is_empty() {
        return Decimal::ZERO;
    }

    let row_index = (children_inside as usize).min(rows.len() - 1);
    let row = &rows[row_index];
    if row.is_empty() {
        return Decimal::ZERO;
    }

    let col_index = (children_outside as usize).min(row.len() - 1);
    row[col_index]
}
