//! Terminal rendering of the explorer views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use findex_model::{Dimension, Selection};
use findex_query::DimensionChoices;
use findex_report::{MapPoint, RankedArea, RawRow, SelectionViews, TrendTable};

/// Width of the longest ranking bar, in characters.
const BAR_WIDTH: usize = 24;

/// One observation value for display: one decimal place, `-` when absent.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.1}"),
        None => "-".to_string(),
    }
}

/// Text bar proportional to `value` against the ranking's leader.
pub fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let length = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(length.min(BAR_WIDTH))
}

/// Renders the full view bundle as terminal tables.
pub fn print_views(selection: &Selection, views: &SelectionViews, show_raw: bool) {
    println!("Year: {}", selection.period);
    println!("Countries selected: {}", views.summary.areas_selected);
    println!(
        "Average adoption (%): {}",
        format_value(views.summary.mean_value)
    );
    println!();
    println!("Top countries:");
    println!("{}", ranking_table(&views.ranking));
    println!();
    println!("Map values:");
    println!("{}", map_table(&views.map));
    println!();
    println!("Adoption over time:");
    println!("{}", trend_table(&views.trend));
    if show_raw {
        println!();
        println!("Raw data:");
        println!("{}", raw_table(&views.raw));
    }
}

/// Ranked areas with a proportional text bar per row.
pub fn ranking_table(ranking: &[RankedArea]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Country"),
        header_cell("Adoption (%)"),
        header_cell(""),
    ]);
    apply_view_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let leader = ranking.first().map_or(0.0, |pair| pair.value);
    for (index, pair) in ranking.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&pair.area),
            Cell::new(format_value(Some(pair.value))),
            Cell::new(bar(pair.value, leader)).fg(Color::Cyan),
        ]);
    }
    table
}

/// Choropleth input listed as country/value rows.
pub fn map_table(points: &[MapPoint]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Country"), header_cell("Adoption (%)")]);
    apply_view_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.area),
            Cell::new(format_value(Some(point.value))),
        ]);
    }
    table
}

/// Period rows with one column per selected area; `-` marks absent cells.
pub fn trend_table(trend: &TrendTable) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Year")];
    header.extend(trend.areas.iter().map(|area| header_cell(area)));
    table.set_header(header);
    apply_view_table_style(&mut table);
    for column in 1..=trend.areas.len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for row in &trend.rows {
        let mut cells = vec![Cell::new(row.period)];
        for value in &row.values {
            cells.push(value_cell(*value));
        }
        table.add_row(cells);
    }
    table
}

/// The filtered rows exactly as the view builders received them.
pub fn raw_table(rows: &[RawRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Country"), header_cell("Adoption (%)")]);
    apply_view_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![Cell::new(&row.area), value_cell(row.value)]);
    }
    table
}

/// The values each filter dimension offers, one dimension per row.
pub fn choices_table(choices: &DimensionChoices) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dimension"), header_cell("Values")]);
    apply_choices_table_style(&mut table);
    let periods = choices
        .periods
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec![dimension_cell(Dimension::Period), Cell::new(periods)]);
    for (dimension, values) in [
        (Dimension::Area, &choices.areas),
        (Dimension::Sex, &choices.sexes),
        (Dimension::Age, &choices.ages),
        (Dimension::Income, &choices.incomes),
        (Dimension::Education, &choices.educations),
    ] {
        table.add_row(vec![dimension_cell(dimension), Cell::new(values.join(", "))]);
    }
    table
}

fn value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.1}")),
        None => dim_cell("-"),
    }
}

fn dimension_cell(dimension: Dimension) -> Cell {
    Cell::new(dimension.as_str())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn apply_view_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_choices_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
