//! Dashboard data model
//!
//! Snapshot types returned by the data providers and the reporting window filter.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Platform-wide summary numbers for one load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_users: u64,
    pub active_users: u64,
    pub total_conversations: u64,
    pub total_messages: u64,
    /// Average response latency in milliseconds.
    pub avg_response_time_ms: u64,
    /// Average sentiment as a fraction between 0.0 and 1.0.
    pub avg_sentiment: f64,
}

/// Users and conversations for one region. `region` is unique within a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStat {
    pub region: String,
    pub user_count: u64,
    pub conversations: u64,
}

impl RegionStat {
    pub fn new(region: impl Into<String>, user_count: u64, conversations: u64) -> Self {
        Self {
            region: region.into(),
            user_count,
            conversations,
        }
    }
}

/// Message volume and latency for one subject. `subject` is unique within a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectStat {
    pub subject: String,
    pub message_count: u64,
    pub avg_response_time_ms: u64,
}

impl SubjectStat {
    pub fn new(subject: impl Into<String>, message_count: u64, avg_response_time_ms: u64) -> Self {
        Self {
            subject: subject.into(),
            message_count,
            avg_response_time_ms,
        }
    }
}

/// The three datasets of one successful load, applied together.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub summary: SummaryStats,
    pub regions: Vec<RegionStat>,
    pub subjects: Vec<SubjectStat>,
}

/// Reporting window selected in the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    Last24Hours,
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
}

impl TimeRange {
    /// All ranges in dropdown order.
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last24Hours,
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last90Days,
    ];

    /// Short code used on the command line and in the config file.
    pub fn code(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "24h",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
        }
    }

    /// Human-readable label shown in the dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "Last 24 hours",
            TimeRange::Last7Days => "Last 7 days",
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Last90Days => "Last 90 days",
        }
    }

    /// Position of this range in [`TimeRange::ALL`].
    pub fn index(&self) -> usize {
        match self {
            TimeRange::Last24Hours => 0,
            TimeRange::Last7Days => 1,
            TimeRange::Last30Days => 2,
            TimeRange::Last90Days => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time range '{0}', expected one of 24h, 7d, 30d, 90d")]
pub struct ParseTimeRangeError(String);

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" => Ok(TimeRange::Last24Hours),
            "7d" => Ok(TimeRange::Last7Days),
            "30d" => Ok(TimeRange::Last30Days),
            "90d" => Ok(TimeRange::Last90Days),
            _ => Err(ParseTimeRangeError(s.to_string())),
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
