//! Query layer over a loaded dataset: choice enumeration, the default
//! selection, selection validation, and filtering.

pub mod choices;
pub mod error;
pub mod filter;

pub use choices::{DimensionChoices, EDUCATION_KEYWORD, INCOME_KEYWORD};
pub use error::{QueryError, Result};
pub use filter::{FilteredView, filter_dataset};
