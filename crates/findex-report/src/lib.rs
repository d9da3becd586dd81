//! View builders for the explorer: one pure pass from (dataset, selection)
//! to the bundle the presentation adapter renders.
//!
//! The pipeline never mutates anything. Each interaction filters the shared
//! dataset, builds the four views plus the raw listing, and hands the bundle
//! to whatever renders it; an empty filter result short-circuits into an
//! explicit no-data signal instead.

pub mod geo;
pub mod ranking;
pub mod summary;
pub mod trend;

use serde::Serialize;
use tracing::info;

use findex_model::{Dataset, Selection};
use findex_query::{FilteredView, filter_dataset};

pub use geo::{MapPoint, map_points};
pub use ranking::{RANKING_LIMIT, RankedArea, rank_areas};
pub use summary::{SummaryMetrics, summarize};
pub use trend::{TrendRow, TrendTable, trend_table};

/// One row of the raw listing: the filtered subset as it entered the view
/// builders, value-absent rows included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawRow {
    pub area: String,
    pub value: Option<f64>,
}

/// The filtered records as (area, value) pairs, in input order.
pub fn raw_rows(view: &FilteredView<'_>) -> Vec<RawRow> {
    view.records()
        .iter()
        .map(|record| RawRow {
            area: record.area.clone(),
            value: record.value,
        })
        .collect()
}

/// Everything a renderer needs for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionViews {
    pub summary: SummaryMetrics,
    pub ranking: Vec<RankedArea>,
    pub map: Vec<MapPoint>,
    pub trend: TrendTable,
    pub raw: Vec<RawRow>,
}

/// Outcome of one interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    Views(SelectionViews),
    /// The selection matched nothing; no views were built.
    NoData,
}

/// Runs the pipeline for one selection: filter, then build every view, or
/// stop at the no-data signal when nothing matched.
pub fn explore(dataset: &Dataset, selection: &Selection) -> SelectionOutcome {
    let view = filter_dataset(dataset, selection);
    if view.is_empty() {
        info!(
            period = selection.period,
            areas = ?selection.areas,
            "selection matched no records"
        );
        return SelectionOutcome::NoData;
    }
    info!(matched = view.len(), "building selection views");
    SelectionOutcome::Views(SelectionViews {
        summary: summarize(&view, selection),
        ranking: rank_areas(&view),
        map: map_points(&view),
        trend: trend_table(dataset, selection),
        raw: raw_rows(&view),
    })
}
