//! Subcommand implementations: one interaction per invocation.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use findex_cli::output::ViewReport;
use findex_cli::render;
use findex_ingest::load_dataset;
use findex_model::Selection;
use findex_query::DimensionChoices;
use findex_report::{SelectionOutcome, explore};

use crate::cli::{ChoicesArgs, ViewArgs};

const NO_DATA_MESSAGE: &str = "No data for the selected combination.";

pub fn run_view(args: &ViewArgs) -> Result<()> {
    let span = info_span!("view", data_file = %args.data_file.display());
    let _guard = span.enter();

    let dataset = load_dataset(&args.data_file)?;
    if dataset.is_empty() {
        // Readable file, zero retained rows: report no data, not an error.
        if args.json {
            print_json(&ViewReport::empty_dataset())?;
        } else {
            println!("{NO_DATA_MESSAGE}");
        }
        return Ok(());
    }

    let choices = DimensionChoices::from_dataset(&dataset);
    let selection = build_selection(&choices, args)?;
    info!(
        period = selection.period,
        areas = selection.areas.len(),
        "selection resolved"
    );

    let outcome = explore(&dataset, &selection);
    if args.json {
        return print_json(&ViewReport::new(&selection, &outcome));
    }
    match outcome {
        SelectionOutcome::Views(views) => render::print_views(&selection, &views, args.raw),
        SelectionOutcome::NoData => println!("{NO_DATA_MESSAGE}"),
    }
    Ok(())
}

pub fn run_choices(args: &ChoicesArgs) -> Result<()> {
    let span = info_span!("choices", data_file = %args.data_file.display());
    let _guard = span.enter();

    let dataset = load_dataset(&args.data_file)?;
    let choices = DimensionChoices::from_dataset(&dataset);
    if args.json {
        return print_json(&choices);
    }
    println!("{}", render::choices_table(&choices));
    Ok(())
}

/// Resolves CLI flags into a full selection: the dataset defaults fill
/// every unset dimension, then each value is checked against the offered
/// choices so a typo fails loudly instead of silently matching nothing.
fn build_selection(choices: &DimensionChoices, args: &ViewArgs) -> Result<Selection> {
    let mut selection = choices
        .default_selection()
        .context("dataset has no observations to select from")?;
    if let Some(year) = args.year {
        selection.period = year;
    }
    if !args.countries.is_empty() {
        selection = selection.with_areas(args.countries.iter().cloned());
    }
    if let Some(sex) = &args.sex {
        selection.sex = sex.clone();
    }
    if let Some(age) = &args.age {
        selection.age = age.clone();
    }
    if let Some(income) = &args.income {
        selection.income = income.clone();
    }
    if let Some(education) = &args.education {
        selection.education = education.clone();
    }
    choices.validate_selection(&selection)?;
    Ok(selection)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{rendered}");
    Ok(())
}
