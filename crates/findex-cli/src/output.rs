//! Machine-readable output for the presentation boundary.

use serde::Serialize;

use findex_model::Selection;
use findex_report::{SelectionOutcome, SelectionViews};

/// Envelope emitted by `findex view --json`.
///
/// `no_data` is always present so consumers can branch without probing for
/// `views`; the view bundle is omitted entirely when nothing matched.
#[derive(Debug, Serialize)]
pub struct ViewReport<'a> {
    pub no_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<&'a Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<&'a SelectionViews>,
}

impl<'a> ViewReport<'a> {
    /// Envelope for one explored selection.
    pub fn new(selection: &'a Selection, outcome: &'a SelectionOutcome) -> Self {
        match outcome {
            SelectionOutcome::Views(views) => Self {
                no_data: false,
                selection: Some(selection),
                views: Some(views),
            },
            SelectionOutcome::NoData => Self {
                no_data: true,
                selection: Some(selection),
                views: None,
            },
        }
    }

    /// Envelope for a dataset with nothing to select from; no selection can
    /// even be formed, so only the flag is emitted.
    pub fn empty_dataset() -> Self {
        Self {
            no_data: true,
            selection: None,
            views: None,
        }
    }
}
