//! Applies a [`Selection`] to the loaded dataset.

use tracing::debug;

use findex_model::{Dataset, Record, Selection};

/// The records matching a selection, in dataset order.
///
/// Borrows from the dataset: each interaction recomputes its view and drops
/// it after rendering, so nothing is copied.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An empty view is the reportable no-data condition; view builders are
    /// never invoked on one.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Returns exactly the records satisfying every clause of `selection`.
///
/// Total over all selections: values the dataset never held simply match
/// nothing, and the empty view is surfaced as a no-data outcome downstream
/// rather than an error here.
pub fn filter_dataset<'a>(dataset: &'a Dataset, selection: &Selection) -> FilteredView<'a> {
    let records: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|record| selection.matches(record))
        .collect();
    debug!(
        period = selection.period,
        areas = selection.areas.len(),
        matched = records.len(),
        "selection filtered"
    );
    FilteredView { records }
}
