//! Property tests for the filter engine.

use proptest::prelude::*;

use findex_model::{ALL_ADULTS, Dataset, Record, Selection, TOTAL};
use findex_query::filter_dataset;

const AREAS: [&str; 4] = ["Brazil", "India", "Kenya", "Norway"];
const SEXES: [&str; 3] = [TOTAL, "Female", "Male"];
const AGES: [&str; 2] = [ALL_ADULTS, "15-24 years old"];
const INCOMES: [&str; 2] = [TOTAL, "Income: poorest 40%"];
const EDUCATIONS: [&str; 2] = [TOTAL, "Education: primary or less"];

fn label(pool: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(pool.to_vec()).prop_map(String::from)
}

prop_compose! {
    fn arb_record()(
        period in 2017..=2021i32,
        area in label(&AREAS),
        sex in label(&SEXES),
        age in label(&AGES),
        income in label(&INCOMES),
        education in label(&EDUCATIONS),
        value in prop::option::of(0.0..100.0f64),
    ) -> Record {
        Record { period, area, sex, age, income, education, value }
    }
}

prop_compose! {
    fn arb_selection()(
        period in 2017..=2021i32,
        areas in prop::collection::vec(label(&AREAS), 0..4),
        sex in label(&SEXES),
        age in label(&AGES),
        income in label(&INCOMES),
        education in label(&EDUCATIONS),
    ) -> Selection {
        Selection::new(period)
            .with_areas(areas)
            .with_sex(sex)
            .with_age(age)
            .with_income(income)
            .with_education(education)
    }
}

proptest! {
    #[test]
    fn output_records_satisfy_every_clause(
        records in prop::collection::vec(arb_record(), 0..40),
        selection in arb_selection(),
    ) {
        let dataset = Dataset::new(records);
        let view = filter_dataset(&dataset, &selection);
        for record in view.records() {
            prop_assert_eq!(record.period, selection.period);
            prop_assert!(selection.areas.iter().any(|area| area == &record.area));
            prop_assert_eq!(&record.sex, &selection.sex);
            prop_assert_eq!(&record.age, &selection.age);
            prop_assert_eq!(&record.income, &selection.income);
            prop_assert_eq!(&record.education, &selection.education);
        }
    }

    #[test]
    fn no_matching_record_is_left_out(
        records in prop::collection::vec(arb_record(), 0..40),
        selection in arb_selection(),
    ) {
        let dataset = Dataset::new(records);
        let view = filter_dataset(&dataset, &selection);
        // Restate the contract clause by clause as an independent oracle.
        let expected = dataset
            .records()
            .iter()
            .filter(|record| {
                record.period == selection.period
                    && selection.areas.iter().any(|area| area == &record.area)
                    && record.sex == selection.sex
                    && record.age == selection.age
                    && record.income == selection.income
                    && record.education == selection.education
            })
            .count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn refiltering_a_filtered_view_is_a_fixed_point(
        records in prop::collection::vec(arb_record(), 0..40),
        selection in arb_selection(),
    ) {
        let dataset = Dataset::new(records);
        let view = filter_dataset(&dataset, &selection);
        let matched: Vec<Record> = view
            .records()
            .iter()
            .map(|record| (*record).clone())
            .collect();
        let narrowed = Dataset::new(matched.clone());
        let refiltered = filter_dataset(&narrowed, &selection);
        let again: Vec<Record> = refiltered
            .records()
            .iter()
            .map(|record| (*record).clone())
            .collect();
        prop_assert_eq!(matched, again);
    }
}
