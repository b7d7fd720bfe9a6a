//! Dashboard data loading
//!
//! Fires the three provider calls together and joins them into one outcome.

use super::core::EventSender;
use crate::controller::{LoadOutcome, LoadRequest};
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::model::{DashboardData, TimeRange};
use crate::provider::DataProvider;
use crate::provider::error::ProviderError;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Request all three datasets concurrently.
///
/// Every call runs to completion before the results are combined, so a
/// failure is only reported once the other two have settled as well. The
/// first error in dataset order wins; partial successes are dropped.
pub async fn load_dashboard_data(
    provider: &dyn DataProvider,
    range: TimeRange,
) -> Result<DashboardData, ProviderError> {
    let (summary, regions, subjects) = tokio::join!(
        provider.summary_stats(range),
        provider.region_stats(range),
        provider.subject_stats(range),
    );

    Ok(DashboardData {
        summary: summary?,
        regions: regions?,
        subjects: subjects?,
    })
}

/// Run a load in the background and deliver its outcome on `outcomes`.
///
/// The task is never cancelled; a superseded request still completes and
/// its outcome is discarded by the controller.
pub fn spawn_load(
    provider: Arc<dyn DataProvider>,
    request: LoadRequest,
    outcomes: mpsc::Sender<LoadOutcome>,
    events: EventSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        events
            .send_loader_event(
                format!(
                    "Loading dashboard data for {} (request #{})",
                    request.range, request.generation
                ),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let result = load_dashboard_data(provider.as_ref(), request.range).await;
        let _ = outcomes.send(LoadOutcome::new(request, result)).await;
    })
}
