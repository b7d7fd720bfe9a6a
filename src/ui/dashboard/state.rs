//! Dashboard state management
//!
//! UI-side state wrapped around the controller: dropdown, diagnostics, animation tick

use crate::consts::cli_consts::MAX_DIAGNOSTIC_EVENTS;
use crate::controller::{DashboardController, ViewState};
use crate::events::Event;
use crate::model::TimeRange;
use crate::ui::selector::TimeRangeSelector;

use std::collections::VecDeque;

#[derive(Debug)]
pub struct DashboardState {
    /// Sole owner of the view state.
    controller: DashboardController,
    /// Range dropdown in the header.
    pub selector: TimeRangeSelector,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Diagnostics kept for display (last `MAX_DIAGNOSTIC_EVENTS`)
    pub diagnostics: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(range: TimeRange, with_background_color: bool) -> Self {
        Self {
            controller: DashboardController::new(range),
            selector: TimeRangeSelector::new(range),
            pending_events: VecDeque::new(),
            diagnostics: VecDeque::new(),
            with_background_color,
            tick: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    pub(super) fn controller_mut(&mut self) -> &mut DashboardController {
        &mut self.controller
    }

    /// Add an event to the diagnostics with size limit
    pub fn add_to_diagnostics(&mut self, event: Event) {
        if self.diagnostics.len() >= MAX_DIAGNOSTIC_EVENTS {
            self.diagnostics.pop_front();
        }
        self.diagnostics.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Newest diagnostic that passes the display filter.
    pub fn latest_diagnostic(&self) -> Option<&Event> {
        self.diagnostics
            .iter()
            .rev()
            .find(|event| event.should_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::logging::LogLevel;

    #[test]
    fn test_diagnostics_are_bounded() {
        let mut state = DashboardState::new(TimeRange::Last7Days, false);
        for i in 0..(MAX_DIAGNOSTIC_EVENTS + 5) {
            state.add_to_diagnostics(Event::loader(
                format!("event {}", i),
                EventType::Refresh,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.diagnostics.len(), MAX_DIAGNOSTIC_EVENTS);
        assert_eq!(state.diagnostics.front().unwrap().msg, "event 5");
    }

    #[test]
    fn test_latest_diagnostic_prefers_newest_error() {
        let mut state = DashboardState::new(TimeRange::Last7Days, false);
        state.add_to_diagnostics(Event::loader(
            "loading".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        ));
        state.add_to_diagnostics(Event::controller(
            "failed".to_string(),
            EventType::Error,
            LogLevel::Error,
        ));
        assert_eq!(state.latest_diagnostic().unwrap().msg, "failed");
    }
}
