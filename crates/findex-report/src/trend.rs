//! Multi-year trend over the demographic-total slice.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use findex_model::{Dataset, Selection};

/// Time trend of the selected areas across every period in the dataset.
///
/// Always computed from the full dataset's demographic-total slice (total
/// sex, total income, all-adults age) regardless of the selection's scalar
/// values, so changing a breakdown filter never reshapes the trend. The
/// education breakdown is left unconstrained, as the source view does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendTable {
    /// Column labels, in selection order.
    pub areas: Vec<String>,
    /// One row per distinct period of the full dataset, ascending.
    pub rows: Vec<TrendRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub period: i32,
    /// One cell per area, aligned with [`TrendTable::areas`]; absent when
    /// no demographic-total record exists for the (period, area) pair.
    pub values: Vec<Option<f64>>,
}

impl TrendTable {
    pub fn cell(&self, period: i32, area: &str) -> Option<f64> {
        let column = self.areas.iter().position(|candidate| candidate == area)?;
        let row = self.rows.iter().find(|row| row.period == period)?;
        row.values.get(column).copied().flatten()
    }
}

/// Pivots the demographic-total slice into period rows and area columns.
///
/// A cell with several matching records (education tiers share the slice)
/// holds the mean of their present values.
pub fn trend_table(dataset: &Dataset, selection: &Selection) -> TrendTable {
    let mut periods = BTreeSet::new();
    for record in dataset.records() {
        periods.insert(record.period);
    }

    // (period, column index) -> running (sum, count) of present values.
    let mut cells: BTreeMap<(i32, usize), (f64, usize)> = BTreeMap::new();
    for record in dataset.records() {
        if !record.on_total_slice() {
            continue;
        }
        let Some(column) = selection
            .areas
            .iter()
            .position(|area| area == &record.area)
        else {
            continue;
        };
        let Some(value) = record.value else { continue };
        let cell = cells.entry((record.period, column)).or_insert((0.0, 0));
        cell.0 += value;
        cell.1 += 1;
    }

    let rows: Vec<TrendRow> = periods
        .into_iter()
        .map(|period| {
            let values = (0..selection.areas.len())
                .map(|column| {
                    cells
                        .get(&(period, column))
                        .map(|&(sum, count)| sum / count as f64)
                })
                .collect();
            TrendRow { period, values }
        })
        .collect();

    debug!(
        areas = selection.areas.len(),
        periods = rows.len(),
        "trend pivot built"
    );
    TrendTable {
        areas: selection.areas.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findex_model::{ALL_ADULTS, Record, TOTAL};

    #[test]
    fn spans_all_periods_and_selected_areas_only() {
        let dataset = Dataset::new(vec![
            Record::total_slice(2021, "Brazil", Some(74.2)),
            Record::total_slice(2021, "India", Some(35.0)),
            Record::total_slice(2020, "Brazil", Some(68.0)),
            Record::total_slice(2017, "Kenya", Some(55.0)),
        ]);
        let selection = Selection::new(2021).with_areas(["Brazil", "India"]);

        let table = trend_table(&dataset, &selection);
        assert_eq!(table.areas, vec!["Brazil", "India"]);
        let periods: Vec<i32> = table.rows.iter().map(|row| row.period).collect();
        // Kenya is not a column, but its period still contributes a row.
        assert_eq!(periods, vec![2017, 2020, 2021]);
        assert_eq!(table.cell(2020, "Brazil"), Some(68.0));
        assert_eq!(table.cell(2020, "India"), None);
        assert_eq!(table.cell(2021, "India"), Some(35.0));
        assert_eq!(table.cell(2017, "Kenya"), None);
    }

    #[test]
    fn ignores_records_off_the_total_slice() {
        let mut female = Record::total_slice(2021, "Brazil", Some(90.0));
        female.sex = "Female".to_string();
        let dataset = Dataset::new(vec![
            female,
            Record::total_slice(2021, "Brazil", Some(74.2)),
        ]);
        let selection = Selection::new(2021).with_areas(["Brazil"]);

        let table = trend_table(&dataset, &selection);
        assert_eq!(table.cell(2021, "Brazil"), Some(74.2));
    }

    #[test]
    fn education_tiers_sharing_a_cell_average_out() {
        let tier = |education: &str, value: f64| Record {
            period: 2021,
            area: "Brazil".to_string(),
            sex: TOTAL.to_string(),
            age: ALL_ADULTS.to_string(),
            income: TOTAL.to_string(),
            education: education.to_string(),
            value: Some(value),
        };
        let dataset = Dataset::new(vec![
            tier("Education: primary or less", 40.0),
            tier("Education: tertiary or more", 60.0),
        ]);
        let selection = Selection::new(2021).with_areas(["Brazil"]);

        let table = trend_table(&dataset, &selection);
        assert_eq!(table.cell(2021, "Brazil"), Some(50.0));
    }

    #[test]
    fn empty_area_selection_still_lists_periods() {
        let dataset = Dataset::new(vec![Record::total_slice(2021, "Brazil", Some(74.2))]);
        let selection = Selection::new(2021);

        let table = trend_table(&dataset, &selection);
        assert!(table.areas.is_empty());
        assert_eq!(table.rows.len(), 1);
        assert!(table.rows[0].values.is_empty());
    }
}
