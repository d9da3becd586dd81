//! Descending ranking of areas by observed value.

use serde::Serialize;

use findex_query::FilteredView;

/// Most entries a ranking carries, one per bar of the ranked display.
pub const RANKING_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedArea {
    pub area: String,
    pub value: f64,
}

/// Ranks value-bearing records descending, at most [`RANKING_LIMIT`] deep.
///
/// Value-absent records are never ranked. The sort is stable: equal values
/// keep their dataset order, with no secondary key.
pub fn rank_areas(view: &FilteredView<'_>) -> Vec<RankedArea> {
    let mut ranked: Vec<RankedArea> = view
        .records()
        .iter()
        .filter_map(|record| {
            record.value.map(|value| RankedArea {
                area: record.area.clone(),
                value,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(RANKING_LIMIT);
    ranked
}
