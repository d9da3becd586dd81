use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate label used by the sex, income, and education breakdowns.
///
/// The source extract reports the all-respondents slice of a breakdown under
/// this literal label rather than leaving the column empty.
pub const TOTAL: &str = "Total";

/// The all-adults age band that stands in for "no age breakdown".
///
/// Findex surveys adults only, so this band covers every respondent and is
/// the age equivalent of [`TOTAL`].
pub const ALL_ADULTS: &str = "15 years old and over";

/// A filterable dimension of the dataset.
///
/// `Period` and `Area` are matched by value / set membership; the four
/// breakdown dimensions are matched by exact label equality against their
/// closed vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Period,
    Area,
    Sex,
    Age,
    Income,
    Education,
}

impl Dimension {
    /// Human-readable dimension name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Period => "year",
            Dimension::Area => "country",
            Dimension::Sex => "sex",
            Dimension::Age => "age",
            Dimension::Income => "income",
            Dimension::Education => "education",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
