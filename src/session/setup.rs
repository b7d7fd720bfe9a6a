//! Session setup and initialization

use crate::config::Config;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, OUTCOME_QUEUE_SIZE};
use crate::controller::LoadOutcome;
use crate::events::Event;
use crate::model::TimeRange;
use crate::provider::{DataProvider, SampleDataProvider};
use crate::workers::core::EventSender;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Source of dashboard data
    pub provider: Arc<dyn DataProvider>,
    /// Handed to load tasks for their diagnostics
    pub event_sender: EventSender,
    /// Event receiver for load diagnostics
    pub event_receiver: mpsc::Receiver<Event>,
    pub outcome_sender: mpsc::Sender<LoadOutcome>,
    pub outcome_receiver: mpsc::Receiver<LoadOutcome>,
    /// Range the dashboard opens with
    pub range: TimeRange,
    pub with_background_color: bool,
}

/// Builds the provider and channels shared by both run modes.
///
/// `range` overrides the configured default range when given.
pub fn setup_session(config: Config, range: Option<TimeRange>) -> SessionData {
    let provider: Arc<dyn DataProvider> = Arc::new(SampleDataProvider::new(config.provider));
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (outcome_sender, outcome_receiver) = mpsc::channel::<LoadOutcome>(OUTCOME_QUEUE_SIZE);

    SessionData {
        provider,
        event_sender: EventSender::new(event_sender),
        event_receiver,
        outcome_sender,
        outcome_receiver,
        range: range.unwrap_or(config.default_range),
        with_background_color: config.with_background_color,
    }
}
