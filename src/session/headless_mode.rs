//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::controller::{ApplyResult, DashboardController};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::ui::dashboard::render_text;
use std::error::Error;

/// Runs a single load and prints the dashboard as text.
///
/// A failed batch is reported like any other event; the command still succeeds.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let SessionData {
        provider, range, ..
    } = session;
    print_session_starting("snapshot", range.label());

    let mut controller = DashboardController::new(range);
    let started = Event::controller(
        format!("Loading dashboard data for {}", range.label()),
        EventType::Refresh,
        LogLevel::Info,
    );
    print_event(&started);

    let outcome = controller.reload(provider.as_ref()).await;
    print_event(&outcome.to_event());

    println!();
    for line in render_text(controller.view()) {
        println!("{}", line);
    }
    println!();

    if let ApplyResult::Failed { .. } = outcome {
        crate::print_cmd_warn!(
            "Snapshot incomplete",
            "Showing the data available before the failed load"
        );
    }
    print_session_exit_success();

    Ok(())
}

fn print_event(event: &Event) {
    if event.should_display() {
        println!("{}", event);
    }
}
