//! Choropleth-eligible (area, value) pairs.

use serde::Serialize;

use findex_query::FilteredView;

/// One colorable map entry. Whether `area` resolves to a drawable region is
/// the geographic renderer's concern; unrecognized names degrade to
/// uncolored regions there instead of failing here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub area: String,
    pub value: f64,
}

/// The view's value-bearing pairs, in input order.
pub fn map_points(view: &FilteredView<'_>) -> Vec<MapPoint> {
    view.records()
        .iter()
        .filter_map(|record| {
            record.value.map(|value| MapPoint {
                area: record.area.clone(),
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use findex_model::{Dataset, Record, Selection};
    use findex_query::filter_dataset;

    #[test]
    fn drops_absent_values_and_keeps_input_order() {
        let dataset = Dataset::new(vec![
            Record::total_slice(2021, "India", Some(35.0)),
            Record::total_slice(2021, "Brazil", None),
            Record::total_slice(2021, "Kenya", Some(61.3)),
        ]);
        let selection = Selection::new(2021).with_areas(["India", "Brazil", "Kenya"]);
        let view = filter_dataset(&dataset, &selection);
        let points = map_points(&view);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].area, "India");
        assert_eq!(points[1].area, "Kenya");
    }
}
