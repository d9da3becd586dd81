//! Property tests for the ranking builder.

use proptest::prelude::*;

use findex_model::{Dataset, Record, Selection};
use findex_query::filter_dataset;
use findex_report::{RANKING_LIMIT, rank_areas};

const AREAS: [&str; 6] = ["Brazil", "India", "Kenya", "Norway", "Japan", "Chile"];

prop_compose! {
    fn arb_record()(
        area in prop::sample::select(AREAS.to_vec()),
        value in prop::option::of(0.0..100.0f64),
    ) -> Record {
        Record::total_slice(2021, area, value)
    }
}

proptest! {
    #[test]
    fn ranking_is_bounded_and_non_increasing(
        records in prop::collection::vec(arb_record(), 0..30),
    ) {
        let dataset = Dataset::new(records);
        let selection = Selection::new(2021).with_areas(AREAS);
        let view = filter_dataset(&dataset, &selection);
        let ranked = rank_areas(&view);

        prop_assert!(ranked.len() <= RANKING_LIMIT);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
        // Every value-bearing record ranks until the limit cuts off.
        let value_bearing = view
            .records()
            .iter()
            .filter(|record| record.value.is_some())
            .count();
        prop_assert_eq!(ranked.len(), value_bearing.min(RANKING_LIMIT));
    }
}
