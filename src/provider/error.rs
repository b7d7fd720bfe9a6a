//! Error handling for the data providers

use super::Dataset;
use thiserror::Error;

/// The single data-load failure kind. Callers do not branch on the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Failed to fetch {dataset}: {message}")]
    Fetch { dataset: Dataset, message: String },
}

impl ProviderError {
    pub fn fetch(dataset: Dataset, message: impl Into<String>) -> Self {
        ProviderError::Fetch {
            dataset,
            message: message.into(),
        }
    }
}
