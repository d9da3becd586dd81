//! Per-dimension choice enumeration and the default selection.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use findex_model::{ALL_ADULTS, DEFAULT_AREAS, Dataset, Dimension, Selection, TOTAL};

use crate::error::{QueryError, Result};

/// Income labels offered beyond "Total" must contain this substring. The
/// source column mixes unrelated breakdown categories under one header and
/// only the income ones are on offer.
pub const INCOME_KEYWORD: &str = "Income";
/// Counterpart of [`INCOME_KEYWORD`] for the education breakdown column.
pub const EDUCATION_KEYWORD: &str = "Education";

/// The distinct values a selection may take per dimension, in display order.
///
/// Each breakdown dimension lists its total/all-adults default first even
/// when the dataset never uses it, then the remaining labels alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DimensionChoices {
    /// Distinct periods, most recent first.
    pub periods: Vec<i32>,
    /// Distinct area labels, alphabetical.
    pub areas: Vec<String>,
    pub sexes: Vec<String>,
    pub ages: Vec<String>,
    /// "Total", then only labels containing [`INCOME_KEYWORD`].
    pub incomes: Vec<String>,
    /// "Total", then only labels containing [`EDUCATION_KEYWORD`].
    pub educations: Vec<String>,
}

impl DimensionChoices {
    /// Enumerates the values present in `dataset`.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut periods = BTreeSet::new();
        let mut areas = BTreeSet::new();
        let mut sexes = BTreeSet::new();
        let mut ages = BTreeSet::new();
        let mut incomes = BTreeSet::new();
        let mut educations = BTreeSet::new();
        for record in dataset.records() {
            periods.insert(record.period);
            areas.insert(record.area.clone());
            sexes.insert(record.sex.clone());
            ages.insert(record.age.clone());
            incomes.insert(record.income.clone());
            educations.insert(record.education.clone());
        }

        let choices = Self {
            periods: periods.into_iter().rev().collect(),
            areas: areas.into_iter().collect(),
            sexes: default_first(sexes, TOTAL),
            ages: default_first(ages, ALL_ADULTS),
            incomes: keyword_narrowed(incomes, INCOME_KEYWORD),
            educations: keyword_narrowed(educations, EDUCATION_KEYWORD),
        };
        debug!(
            periods = choices.periods.len(),
            areas = choices.areas.len(),
            sexes = choices.sexes.len(),
            ages = choices.ages.len(),
            incomes = choices.incomes.len(),
            educations = choices.educations.len(),
            "dimension choices enumerated"
        );
        choices
    }

    /// The most recent period in the dataset, if any.
    pub fn latest_period(&self) -> Option<i32> {
        self.periods.first().copied()
    }

    /// The startup selection: latest period, the stock area trio narrowed to
    /// areas actually present, and every breakdown at its default.
    ///
    /// `None` when the dataset holds no retained records at all.
    pub fn default_selection(&self) -> Option<Selection> {
        let period = self.latest_period()?;
        let areas = DEFAULT_AREAS
            .iter()
            .filter(|area| self.areas.iter().any(|present| present == *area))
            .copied();
        Some(Selection::new(period).with_areas(areas))
    }

    /// Rejects selection values the dataset does not offer.
    ///
    /// Filtering itself is total and just yields an empty view for such
    /// values; callers assembling selections from free-form input use this
    /// to tell a typo from a genuinely data-free combination.
    pub fn validate_selection(&self, selection: &Selection) -> Result<()> {
        if !self.periods.contains(&selection.period) {
            return Err(QueryError::unknown(
                Dimension::Period,
                selection.period.to_string(),
            ));
        }
        for area in &selection.areas {
            if !self.areas.contains(area) {
                return Err(QueryError::unknown(Dimension::Area, area.clone()));
            }
        }
        let scalars: [(Dimension, &str, &[String]); 4] = [
            (Dimension::Sex, selection.sex.as_str(), &self.sexes),
            (Dimension::Age, selection.age.as_str(), &self.ages),
            (Dimension::Income, selection.income.as_str(), &self.incomes),
            (
                Dimension::Education,
                selection.education.as_str(),
                &self.educations,
            ),
        ];
        for (dimension, value, offered) in scalars {
            if !offered.iter().any(|choice| choice == value) {
                return Err(QueryError::unknown(dimension, value));
            }
        }
        Ok(())
    }
}

/// `default` first, then the remaining values in ascending order.
fn default_first(values: BTreeSet<String>, default: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len() + 1);
    out.push(default.to_string());
    out.extend(values.into_iter().filter(|value| value != default));
    out
}

/// "Total" first, then only the values carrying `keyword`, ascending.
fn keyword_narrowed(values: BTreeSet<String>, keyword: &str) -> Vec<String> {
    let mut out = vec![TOTAL.to_string()];
    out.extend(
        values
            .into_iter()
            .filter(|value| value != TOTAL && value.contains(keyword)),
    );
    out
}
