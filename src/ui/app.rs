//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::tick_interval;
use crate::controller::{LoadOutcome, LoadRequest};
use crate::events::Event as DiagnosticEvent;
use crate::model::TimeRange;
use crate::provider::DataProvider;
use crate::ui::dashboard::{DashboardState, KeyAction, render_dashboard};
use crate::workers::core::EventSender;
use crate::workers::loader::spawn_load;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub initial_range: TimeRange,
}

impl UIConfig {
    pub fn new(with_background_color: bool, initial_range: TimeRange) -> Self {
        Self {
            with_background_color,
            initial_range,
        }
    }
}

/// Application state
pub struct App {
    /// Dashboard state; owns the view state through its controller.
    state: DashboardState,

    /// Source of dashboard data.
    provider: Arc<dyn DataProvider>,

    /// Handed to load tasks for their diagnostics.
    event_sender: EventSender,

    /// Receives diagnostics from load tasks.
    event_receiver: mpsc::Receiver<DiagnosticEvent>,

    /// Handed to load tasks for their outcomes.
    outcome_sender: mpsc::Sender<LoadOutcome>,

    /// Receives settled loads.
    outcome_receiver: mpsc::Receiver<LoadOutcome>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        provider: Arc<dyn DataProvider>,
        event_sender: EventSender,
        event_receiver: mpsc::Receiver<DiagnosticEvent>,
        outcome_sender: mpsc::Sender<LoadOutcome>,
        outcome_receiver: mpsc::Receiver<LoadOutcome>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state: DashboardState::new(ui_config.initial_range, ui_config.with_background_color),
            provider,
            event_sender,
            event_receiver,
            outcome_sender,
            outcome_receiver,
        }
    }

    /// Start a load in the background. Its outcome arrives on the outcome channel.
    fn spawn(&self, request: LoadRequest) {
        spawn_load(
            self.provider.clone(),
            request,
            self.outcome_sender.clone(),
            self.event_sender.clone(),
        );
    }
}

/// Runs the dashboard until the user quits.
///
/// Single task: key presses, load outcomes, diagnostics and the redraw tick
/// are multiplexed here, so the view state is only ever touched from this loop.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let mut key_events = EventStream::new();
    let mut ticker = tokio::time::interval(tick_interval());

    let request = app.state.mount();
    app.spawn(request);

    loop {
        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(outcome) = app.outcome_receiver.recv() => {
                app.state.apply_outcome(outcome);
            }
            Some(event) = app.event_receiver.recv() => {
                app.state.add_event(event);
            }
            maybe_event = key_events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    match app.state.handle_key(key) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Load(request) => app.spawn(request),
                        KeyAction::None => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
        }
    }
}
