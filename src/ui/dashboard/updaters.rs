//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events, load
//! outcomes and key presses

use super::state::DashboardState;

use crate::controller::{ApplyResult, LoadOutcome, LoadRequest};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::model::TimeRange;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the app loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    /// Spawn this load.
    Load(LoadRequest),
}

impl DashboardState {
    /// Advance the animation tick and move queued events into the diagnostics.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_diagnostics(event);
        }
    }

    /// Initial load when the dashboard opens.
    pub fn mount(&mut self) -> LoadRequest {
        self.controller_mut().mount()
    }

    /// Hand a settled load to the controller and record what happened.
    pub fn apply_outcome(&mut self, outcome: LoadOutcome) -> ApplyResult {
        let result = self.controller_mut().apply(outcome);
        self.add_event(result.to_event());
        result
    }

    /// Route a range choice to the controller. Same range: nothing happens.
    pub fn select_range(&mut self, range: TimeRange) -> Option<LoadRequest> {
        let request = self.controller_mut().select_range(range)?;
        self.add_event(Event::interface(
            format!("Time range changed to {}", range),
            EventType::StateChange,
            LogLevel::Info,
        ));
        Some(request)
    }

    /// The export button has no output format yet.
    pub fn request_export(&mut self) {
        self.add_event(Event::interface(
            "Export is not available yet".to_string(),
            EventType::Refresh,
            LogLevel::Warn,
        ));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if self.selector.is_open() {
            return self.handle_dropdown_key(key.code);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('t') => {
                let current = self.view().range;
                self.selector.toggle(current);
                KeyAction::None
            }
            KeyCode::Char(c @ '1'..='4') => {
                let position = c as usize - '0' as usize;
                self.selector
                    .pick(position)
                    .and_then(|range| self.select_range(range))
                    .map_or(KeyAction::None, KeyAction::Load)
            }
            KeyCode::Char('e') => {
                self.request_export();
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    fn handle_dropdown_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.selector.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.selector.move_down(),
            KeyCode::Esc | KeyCode::Char('t') => self.selector.close(),
            KeyCode::Enter => {
                return self
                    .selector
                    .confirm()
                    .and_then(|range| self.select_range(range))
                    .map_or(KeyAction::None, KeyAction::Load);
            }
            _ => {}
        }
        KeyAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DashboardData;
    use crate::provider::sample::{sample_regions, sample_subjects, sample_summary};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(TimeRange::Last7Days, false);
        let request = state.mount();
        state.apply_outcome(LoadOutcome::new(
            request,
            Ok(DashboardData {
                summary: sample_summary(),
                regions: sample_regions(),
                subjects: sample_subjects(),
            }),
        ));
        state.update();
        state
    }

    #[test]
    fn test_dropdown_selection_starts_load() {
        let mut state = loaded_state();
        assert_eq!(state.handle_key(key(KeyCode::Char('t'))), KeyAction::None);
        assert!(state.selector.is_open());

        state.handle_key(key(KeyCode::Down));
        let action = state.handle_key(key(KeyCode::Enter));

        match action {
            KeyAction::Load(request) => assert_eq!(request.range, TimeRange::Last30Days),
            other => panic!("expected a load, got {:?}", other),
        }
        assert!(state.view().loading);
        assert_eq!(state.view().range, TimeRange::Last30Days);
    }

    #[test]
    fn test_confirming_current_range_does_not_load() {
        let mut state = loaded_state();
        let generation = state.controller().generation();

        state.handle_key(key(KeyCode::Char('t')));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), KeyAction::None);
        assert_eq!(state.handle_key(key(KeyCode::Char('2'))), KeyAction::None);

        assert!(!state.view().loading);
        assert_eq!(state.controller().generation(), generation);
    }

    #[test]
    fn test_number_keys_pick_range() {
        let mut state = loaded_state();
        let action = state.handle_key(key(KeyCode::Char('1')));
        assert!(matches!(
            action,
            KeyAction::Load(LoadRequest {
                range: TimeRange::Last24Hours,
                ..
            })
        ));
    }

    #[test]
    fn test_escape_closes_dropdown_before_quitting() {
        let mut state = loaded_state();
        state.handle_key(key(KeyCode::Char('t')));
        assert_eq!(state.handle_key(key(KeyCode::Esc)), KeyAction::None);
        assert!(!state.selector.is_open());
        assert_eq!(state.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_export_is_inert() {
        let mut state = loaded_state();
        let before = state.view().clone();

        assert_eq!(state.handle_key(key(KeyCode::Char('e'))), KeyAction::None);
        state.update();

        assert_eq!(state.view(), &before);
        let last = state.diagnostics.back().unwrap();
        assert_eq!(last.log_level, LogLevel::Warn);
        assert!(last.msg.contains("Export"));
    }

    #[test]
    fn test_outcomes_are_recorded_as_diagnostics() {
        let state = loaded_state();
        let last = state.diagnostics.back().unwrap();
        assert_eq!(last.event_type, EventType::Success);
        assert!(last.msg.contains("Last 7 days"));
    }
}
