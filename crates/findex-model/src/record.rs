use serde::{Deserialize, Serialize};

use crate::dimension::{ALL_ADULTS, TOTAL};

/// One retained observation from the source extract.
///
/// Only rows whose status code marks them as actual/approved survive
/// ingestion, so no status field is carried here. `value` is the observed
/// adoption percentage; it is `None` when the source cell was empty or not
/// a finite number. An absent observation is never coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Year of observation.
    pub period: i32,
    /// Country or region name, as labeled by the source.
    pub area: String,
    /// Sex breakdown label ("Total", "Female", ...).
    pub sex: String,
    /// Age band label ("15 years old and over", "15-24 years old", ...).
    pub age: String,
    /// Income breakdown label ("Total", "Income: poorest 40%", ...).
    pub income: String,
    /// Education breakdown label ("Total", "Education: primary or less", ...).
    pub education: String,
    /// Observed adoption percentage, absent when unreported or unparseable.
    pub value: Option<f64>,
}

impl Record {
    /// A record on the demographic-total slice: total sex and income and
    /// education, all-adults age. The slice most views operate on.
    pub fn total_slice(period: i32, area: impl Into<String>, value: Option<f64>) -> Self {
        Record {
            period,
            area: area.into(),
            sex: TOTAL.to_string(),
            age: ALL_ADULTS.to_string(),
            income: TOTAL.to_string(),
            education: TOTAL.to_string(),
            value,
        }
    }

    /// True when this record sits on the fixed demographic-total slice used
    /// by the trend view: total sex, total income, all-adults age. The
    /// education breakdown is deliberately not part of the slice definition.
    pub fn on_total_slice(&self) -> bool {
        self.sex == TOTAL && self.income == TOTAL && self.age == ALL_ADULTS
    }
}

/// The immutable dataset: every retained record, in source order.
///
/// Constructed once at startup by the loader and passed by reference to
/// every later computation; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
