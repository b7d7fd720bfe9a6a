//! Sample Data Provider
//!
//! Stand-in for the remote analytics service. Returns fixed figures after a
//! simulated network delay, optionally failing one dataset on request.

use crate::config::ProviderConfig;
use crate::model::{RegionStat, SubjectStat, SummaryStats, TimeRange};
use crate::provider::error::ProviderError;
use crate::provider::{DataProvider, Dataset};
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct SampleDataProvider {
    config: ProviderConfig,
}

impl SampleDataProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    async fn simulate(&self, dataset: Dataset, delay_ms: u64) -> Result<(), ProviderError> {
        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.config.fail_dataset == Some(dataset) {
            return Err(ProviderError::fetch(dataset, "simulated service failure"));
        }
        Ok(())
    }
}

pub fn sample_summary() -> SummaryStats {
    SummaryStats {
        total_users: 2847,
        active_users: 1234,
        total_conversations: 5691,
        total_messages: 18347,
        avg_response_time_ms: 1200,
        avg_sentiment: 0.74,
    }
}

pub fn sample_regions() -> Vec<RegionStat> {
    vec![
        RegionStat::new("Gauteng", 892, 1847),
        RegionStat::new("Western Cape", 654, 1234),
        RegionStat::new("KwaZulu-Natal", 543, 987),
        RegionStat::new("Eastern Cape", 321, 567),
        RegionStat::new("Mpumalanga", 234, 432),
        RegionStat::new("Limpopo", 203, 389),
    ]
}

pub fn sample_subjects() -> Vec<SubjectStat> {
    vec![
        SubjectStat::new("Mathematics", 7234, 1450),
        SubjectStat::new("Science", 4567, 1320),
        SubjectStat::new("English", 3456, 980),
        SubjectStat::new("History", 2134, 1100),
        SubjectStat::new("Geography", 1456, 1250),
    ]
}

// The range is accepted but the sample figures do not vary with it.
#[async_trait::async_trait]
impl DataProvider for SampleDataProvider {
    async fn summary_stats(&self, _range: TimeRange) -> Result<SummaryStats, ProviderError> {
        self.simulate(Dataset::Summary, self.config.summary_delay_ms)
            .await?;
        Ok(sample_summary())
    }

    async fn region_stats(&self, _range: TimeRange) -> Result<Vec<RegionStat>, ProviderError> {
        self.simulate(Dataset::Regions, self.config.regions_delay_ms)
            .await?;
        Ok(sample_regions())
    }

    async fn subject_stats(&self, _range: TimeRange) -> Result<Vec<SubjectStat>, ProviderError> {
        self.simulate(Dataset::Subjects, self.config.subjects_delay_ms)
            .await?;
        Ok(sample_subjects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> ProviderConfig {
        ProviderConfig {
            summary_delay_ms: 0,
            regions_delay_ms: 0,
            subjects_delay_ms: 0,
            fail_dataset: None,
        }
    }

    #[tokio::test]
    async fn test_sample_provider_returns_fixed_figures() {
        let provider = SampleDataProvider::new(instant_config());

        let summary = provider.summary_stats(TimeRange::Last7Days).await.unwrap();
        assert_eq!(summary.total_users, 2847);
        assert_eq!(summary.avg_response_time_ms, 1200);

        let regions = provider.region_stats(TimeRange::Last7Days).await.unwrap();
        assert_eq!(regions.len(), 6);
        assert_eq!(regions[0].region, "Gauteng");

        let subjects = provider.subject_stats(TimeRange::Last7Days).await.unwrap();
        assert_eq!(subjects.len(), 5);
        assert_eq!(subjects[0].subject, "Mathematics");
    }

    #[tokio::test]
    async fn test_sample_data_ignores_range() {
        let provider = SampleDataProvider::new(instant_config());
        let week = provider.region_stats(TimeRange::Last7Days).await.unwrap();
        let quarter = provider.region_stats(TimeRange::Last90Days).await.unwrap();
        assert_eq!(week, quarter);
    }

    #[tokio::test]
    async fn test_configured_dataset_fails() {
        let mut config = instant_config();
        config.fail_dataset = Some(Dataset::Regions);
        let provider = SampleDataProvider::new(config);

        let err = provider
            .region_stats(TimeRange::Last24Hours)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch regions: simulated service failure"
        );
        assert!(provider.summary_stats(TimeRange::Last24Hours).await.is_ok());
        assert!(provider.subject_stats(TimeRange::Last24Hours).await.is_ok());
    }
}
