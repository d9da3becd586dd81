pub mod dimension;
pub mod record;
pub mod selection;

pub use dimension::{ALL_ADULTS, Dimension, TOTAL};
pub use record::{Dataset, Record};
pub use selection::{DEFAULT_AREAS, Selection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_matches_all_clauses() {
        let selection = Selection::new(2021).with_areas(["Brazil", "India"]);
        let hit = Record::total_slice(2021, "Brazil", Some(74.2));
        assert!(selection.matches(&hit));

        let wrong_period = Record::total_slice(2020, "Brazil", Some(68.0));
        assert!(!selection.matches(&wrong_period));

        let wrong_area = Record::total_slice(2021, "Kenya", Some(61.0));
        assert!(!selection.matches(&wrong_area));

        let mut wrong_sex = Record::total_slice(2021, "Brazil", Some(74.2));
        wrong_sex.sex = "Female".to_string();
        assert!(!selection.matches(&wrong_sex));
    }

    #[test]
    fn areas_deduplicate_keeping_first_occurrence() {
        let selection = Selection::new(2021).with_areas(["India", "Brazil", "India"]);
        assert_eq!(selection.areas, vec!["India", "Brazil"]);
        assert_eq!(selection.area_count(), 2);
    }

    #[test]
    fn selection_serializes() {
        let selection = Selection::new(2021)
            .with_areas(["Brazil"])
            .with_sex("Female");
        let json = serde_json::to_string(&selection).expect("serialize selection");
        let round: Selection = serde_json::from_str(&json).expect("deserialize selection");
        assert_eq!(round, selection);
    }
}
