//! Dashboard view state
//!
//! The in-memory snapshot the presentation layer renders from.

use crate::model::{DashboardData, RegionStat, SubjectStat, SummaryStats, TimeRange};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// A load for `range` is in flight.
    pub loading: bool,
    /// Summary numbers of the last applied load, if any.
    pub summary: Option<SummaryStats>,
    pub regions: Vec<RegionStat>,
    pub subjects: Vec<SubjectStat>,
    /// Reporting window the dashboard shows (or is loading).
    pub range: TimeRange,
}

impl ViewState {
    pub fn new(range: TimeRange) -> Self {
        Self {
            loading: false,
            summary: None,
            regions: Vec::new(),
            subjects: Vec::new(),
            range,
        }
    }

    /// Whether any dataset has been applied.
    pub fn has_data(&self) -> bool {
        self.summary.is_some() || !self.regions.is_empty() || !self.subjects.is_empty()
    }

    /// Loading with nothing to show yet; the renderer shows the loading view.
    pub fn is_initial_load(&self) -> bool {
        self.loading && !self.has_data()
    }

    /// Replace all three datasets at once.
    pub(super) fn replace_data(&mut self, data: DashboardData) {
        self.summary = Some(data.summary);
        self.regions = data.regions;
        self.subjects = data.subjects;
    }
}
