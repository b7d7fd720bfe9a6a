use crate::model::{RegionStat, SubjectStat, SummaryStats, TimeRange};
use crate::provider::error::ProviderError;
use serde::{Deserialize, Serialize};

pub mod error;
pub(crate) mod sample;
pub use sample::SampleDataProvider;

#[cfg(test)]
use mockall::automock;

/// The three datasets a dashboard load is made of.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Dataset {
    Summary,
    Regions,
    Subjects,
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    /// Platform-wide summary numbers for the given window.
    async fn summary_stats(&self, range: TimeRange) -> Result<SummaryStats, ProviderError>;

    /// Per-region user and conversation counts, in display order.
    async fn region_stats(&self, range: TimeRange) -> Result<Vec<RegionStat>, ProviderError>;

    /// Per-subject message counts and latency, in display order.
    async fn subject_stats(&self, range: TimeRange) -> Result<Vec<SubjectStat>, ProviderError>;
}
