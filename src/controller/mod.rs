//! Dashboard controller
//!
//! Owns the [`ViewState`] and drives its load lifecycle. Every load gets a
//! generation number; only the outcome of the newest generation is applied,
//! older ones are dropped on arrival.

pub mod view_state;
pub use view_state::ViewState;

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::model::{DashboardData, TimeRange};
use crate::provider::DataProvider;
use crate::provider::error::ProviderError;
use crate::workers::loader::load_dashboard_data;

/// A load the controller has started and expects an outcome for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub range: TimeRange,
}

/// Settled result of a [`LoadRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub generation: u64,
    pub range: TimeRange,
    pub result: Result<DashboardData, ProviderError>,
}

impl LoadOutcome {
    pub fn new(request: LoadRequest, result: Result<DashboardData, ProviderError>) -> Self {
        Self {
            generation: request.generation,
            range: request.range,
            result,
        }
    }
}

/// What [`DashboardController::apply`] did with an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyResult {
    /// New data replaced the previous datasets.
    Applied { generation: u64, range: TimeRange },
    /// The batch failed; previous datasets were kept.
    Failed {
        generation: u64,
        range: TimeRange,
        error: ProviderError,
    },
    /// The outcome belongs to a superseded request and was ignored.
    Stale { generation: u64, current: u64 },
}

impl ApplyResult {
    /// Diagnostic event describing this result.
    pub fn to_event(&self) -> Event {
        match self {
            ApplyResult::Applied { generation, range } => Event::controller(
                format!("Dashboard data loaded for {} (request #{})", range, generation),
                EventType::Success,
                LogLevel::Info,
            ),
            ApplyResult::Failed {
                generation,
                range,
                error,
            } => Event::controller(
                format!(
                    "Error loading dashboard data for {} (request #{}): {}",
                    range, generation, error
                ),
                EventType::Error,
                LogLevel::Error,
            ),
            ApplyResult::Stale {
                generation,
                current,
            } => Event::controller(
                format!(
                    "Discarded result of superseded request #{} (current #{})",
                    generation, current
                ),
                EventType::StateChange,
                LogLevel::Debug,
            ),
        }
    }
}

#[derive(Debug)]
pub struct DashboardController {
    view: ViewState,
    /// Generation of the most recent load; 0 before the first one.
    generation: u64,
    last_error: Option<ProviderError>,
}

impl DashboardController {
    pub fn new(range: TimeRange) -> Self {
        Self {
            view: ViewState::new(range),
            generation: 0,
            last_error: None,
        }
    }

    /// Read-only access for rendering.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Error of the last failed batch, cleared by the next successful one.
    pub fn last_error(&self) -> Option<&ProviderError> {
        self.last_error.as_ref()
    }

    /// Start the initial load for the current range.
    pub fn mount(&mut self) -> LoadRequest {
        self.begin_load()
    }

    /// Switch the reporting window. Returns the load to run, or `None`
    /// when `range` is already selected.
    pub fn select_range(&mut self, range: TimeRange) -> Option<LoadRequest> {
        if range == self.view.range {
            return None;
        }
        self.view.range = range;
        Some(self.begin_load())
    }

    fn begin_load(&mut self) -> LoadRequest {
        self.generation += 1;
        self.view.loading = true;
        LoadRequest {
            generation: self.generation,
            range: self.view.range,
        }
    }

    /// Apply a settled load. Data is replaced only as a whole, and only for
    /// the current generation.
    pub fn apply(&mut self, outcome: LoadOutcome) -> ApplyResult {
        if outcome.generation != self.generation {
            return ApplyResult::Stale {
                generation: outcome.generation,
                current: self.generation,
            };
        }

        self.view.loading = false;
        match outcome.result {
            Ok(data) => {
                self.view.replace_data(data);
                self.last_error = None;
                ApplyResult::Applied {
                    generation: outcome.generation,
                    range: outcome.range,
                }
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                ApplyResult::Failed {
                    generation: outcome.generation,
                    range: outcome.range,
                    error,
                }
            }
        }
    }

    /// Load the current range in place and apply the result.
    pub async fn reload(&mut self, provider: &dyn DataProvider) -> ApplyResult {
        let request = self.begin_load();
        let result = load_dashboard_data(provider, request.range).await;
        self.apply(LoadOutcome::new(request, result))
    }
}
