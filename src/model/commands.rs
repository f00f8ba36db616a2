use chrono::NaiveDate;

use super::cells::Field;

/// A single-field edit destined for `/save_entry`.
///
/// Inline inputs and the popup editor both funnel through this one command
/// shape; the cell cache is only updated once the server acknowledges it.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveEntry {
    pub date: NaiveDate,
    pub field: Field,
    pub value: String,
    pub family_member_id: Option<i64>,
}

/// Where a freshly loaded week lands relative to the ones already rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Prepend,
    Append,
}
