use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::commands::SaveEntry;

/// One calendar day of schedule data, as served by `/get_week`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub am: String,
    #[serde(default)]
    pub pm: String,
    #[serde(default)]
    pub overnight: String,
    #[serde(default)]
    pub plans: String,
    #[serde(default)]
    pub family_plans: String,
}

impl DayRecord {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Am => &self.am,
            Field::Pm => &self.pm,
            Field::Overnight => &self.overnight,
            Field::Plans => &self.plans,
            Field::FamilyPlans => &self.family_plans,
        }
    }
}

/// The five editable fields of a day, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Am,
    Pm,
    Overnight,
    Plans,
    FamilyPlans,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Am,
        Field::Pm,
        Field::Overnight,
        Field::Plans,
        Field::FamilyPlans,
    ];

    /// Wire name, as used in request bodies and CSV headers.
    pub fn key(self) -> &'static str {
        match self {
            Field::Am => "am",
            Field::Pm => "pm",
            Field::Overnight => "overnight",
            Field::Plans => "plans",
            Field::FamilyPlans => "family_plans",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Am => "AM",
            Field::Pm => "PM",
            Field::Overnight => "Overnight",
            Field::Plans => "Plans",
            Field::FamilyPlans => "Family Plans",
        }
    }

    /// Free-text fields get a growing textarea (or the popup path on
    /// narrow viewports); the rest are single-line slots.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Plans | Field::FamilyPlans)
    }
}

/// Location codes that get a distinct highlight in the slot inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationCode {
    Sk,
    Ls,
}

impl LocationCode {
    /// Case-insensitive, whitespace-tolerant. Anything that is not exactly
    /// one of the two codes clears the highlight.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SK" => Some(LocationCode::Sk),
            "LS" => Some(LocationCode::Ls),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            LocationCode::Sk => "location-sk",
            LocationCode::Ls => "location-ls",
        }
    }
}

/// Whether a value should show the "has content" marker on the mobile
/// edit icon.
pub fn has_content(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Row count for an auto-growing textarea: one row per line of content.
pub fn textarea_rows(value: &str) -> u32 {
    value.bytes().filter(|b| *b == b'\n').count() as u32 + 1
}

/// Last-known saved value of every rendered cell, keyed by `(date, field)`.
///
/// This is the single source of truth the popup editor and the mobile
/// icons read from; it changes only when the server acknowledges a save or
/// a week is (re)loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStore {
    cells: HashMap<(NaiveDate, Field), String>,
}

impl CellStore {
    pub fn load_week(&mut self, days: &[DayRecord]) {
        for day in days {
            for field in Field::ALL {
                self.cells.insert((day.date, field), day.field(field).to_string());
            }
        }
    }

    pub fn get(&self, date: NaiveDate, field: Field) -> String {
        self.cells.get(&(date, field)).cloned().unwrap_or_default()
    }

    pub fn has_content_at(&self, date: NaiveDate, field: Field) -> bool {
        self.cells
            .get(&(date, field))
            .is_some_and(|value| has_content(value))
    }

    /// Mirror a server-acknowledged save into the cache.
    pub fn commit(&mut self, entry: &SaveEntry) {
        self.cells
            .insert((entry.date, entry.field), entry.value.clone());
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
