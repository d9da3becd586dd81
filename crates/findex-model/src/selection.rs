use serde::{Deserialize, Serialize};

use crate::dimension::{ALL_ADULTS, TOTAL};
use crate::record::Record;

/// Area preselection for a fresh session, before the user picks countries.
/// Entries missing from the loaded data are dropped rather than kept as
/// dead filter clauses.
pub const DEFAULT_AREAS: &[&str] = &["United States", "India", "Brazil"];

/// The user's current filter: one period, a set of areas, and one label per
/// breakdown dimension.
///
/// Lifecycle: built from defaults (latest period, [`DEFAULT_AREAS`], total
/// slices), replaced wholesale on every interaction, never persisted. Areas
/// keep first-occurrence order and are deduplicated, so the order a user
/// picked countries in survives into trend columns and serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub period: i32,
    pub areas: Vec<String>,
    pub sex: String,
    pub age: String,
    pub income: String,
    pub education: String,
}

impl Selection {
    /// A selection for `period` with no areas and every breakdown at its
    /// total/all-adults default.
    pub fn new(period: i32) -> Self {
        Selection {
            period,
            areas: Vec::new(),
            sex: TOTAL.to_string(),
            age: ALL_ADULTS.to_string(),
            income: TOTAL.to_string(),
            education: TOTAL.to_string(),
        }
    }

    /// Replace the area set. Duplicates are dropped, first occurrence wins.
    pub fn with_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas.clear();
        for area in areas {
            self.push_area(area.into());
        }
        self
    }

    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = sex.into();
        self
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    pub fn with_income(mut self, income: impl Into<String>) -> Self {
        self.income = income.into();
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }

    /// Append one area unless it is already selected.
    pub fn push_area(&mut self, area: String) {
        if !self.contains_area(&area) {
            self.areas.push(area);
        }
    }

    pub fn contains_area(&self, area: &str) -> bool {
        self.areas.iter().any(|selected| selected == area)
    }

    /// Number of areas the user selected: the selection's cardinality, not
    /// the number of areas that ended up with matching data.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// True when `record` satisfies all six filter clauses: period equality,
    /// area membership, and exact label equality on each breakdown.
    pub fn matches(&self, record: &Record) -> bool {
        record.period == self.period
            && self.contains_area(&record.area)
            && record.sex == self.sex
            && record.age == self.age
            && record.income == self.income
            && record.education == self.education
    }
}
