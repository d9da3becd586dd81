//! Headline metrics over a filtered view.

use serde::Serialize;

use findex_model::Selection;
use findex_query::FilteredView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// How many areas the user selected, whether or not each one matched.
    pub areas_selected: usize,
    /// Mean over present values; `None` when every value is absent, which
    /// is a different statement than a mean of zero.
    pub mean_value: Option<f64>,
}

/// Builds the summary for a non-empty view. Rounding for display is the
/// presentation adapter's business; the mean is returned untouched.
pub fn summarize(view: &FilteredView<'_>, selection: &Selection) -> SummaryMetrics {
    let mut sum = 0.0;
    let mut present = 0usize;
    for record in view.records() {
        if let Some(value) = record.value {
            sum += value;
            present += 1;
        }
    }
    let mean_value = if present == 0 {
        None
    } else {
        Some(sum / present as f64)
    };
    SummaryMetrics {
        areas_selected: selection.area_count(),
        mean_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findex_model::{Dataset, Record, Selection};
    use findex_query::filter_dataset;

    #[test]
    fn mean_ignores_absent_values() {
        let dataset = Dataset::new(vec![
            Record::total_slice(2021, "Brazil", Some(80.0)),
            Record::total_slice(2021, "India", None),
            Record::total_slice(2021, "Kenya", Some(40.0)),
        ]);
        let selection = Selection::new(2021).with_areas(["Brazil", "India", "Kenya"]);
        let view = filter_dataset(&dataset, &selection);
        let summary = summarize(&view, &selection);
        assert_eq!(summary.areas_selected, 3);
        assert_eq!(summary.mean_value, Some(60.0));
    }

    #[test]
    fn mean_of_equal_values_is_that_value() {
        let dataset = Dataset::new(vec![
            Record::total_slice(2021, "Brazil", Some(50.0)),
            Record::total_slice(2021, "India", Some(50.0)),
            Record::total_slice(2021, "Kenya", Some(50.0)),
        ]);
        let selection = Selection::new(2021).with_areas(["Brazil", "India", "Kenya"]);
        let view = filter_dataset(&dataset, &selection);
        assert_eq!(summarize(&view, &selection).mean_value, Some(50.0));
    }

    #[test]
    fn all_absent_values_leave_the_mean_undefined() {
        let dataset = Dataset::new(vec![
            Record::total_slice(2021, "Brazil", None),
            Record::total_slice(2021, "India", None),
        ]);
        let selection = Selection::new(2021).with_areas(["Brazil", "India"]);
        let view = filter_dataset(&dataset, &selection);
        let summary = summarize(&view, &selection);
        assert_eq!(summary.mean_value, None);
    }

    #[test]
    fn area_count_is_the_selection_cardinality() {
        // Norway never matches, the count still reports what was selected.
        let dataset = Dataset::new(vec![Record::total_slice(2021, "Brazil", Some(74.2))]);
        let selection = Selection::new(2021).with_areas(["Brazil", "Norway"]);
        let view = filter_dataset(&dataset, &selection);
        let summary = summarize(&view, &selection);
        assert_eq!(summary.areas_selected, 2);
        assert_eq!(summary.mean_value, Some(74.2));
    }
}
