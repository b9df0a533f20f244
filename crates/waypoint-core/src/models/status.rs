//! Enumerations for phase priority and stored roadmap status.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Priority of a roadmap phase.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Type-safe enumeration of stored roadmap statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapStatus {
    /// Roadmap is active and listed by default
    #[default]
    Active,

    /// Roadmap is archived and hidden from normal views
    Archived,
}

impl FromStr for RoadmapStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(RoadmapStatus::Active),
            "archived" => Ok(RoadmapStatus::Archived),
            _ => Err(format!("Invalid roadmap status: {s}")),
        }
    }
}

impl RoadmapStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapStatus::Active => "active",
            RoadmapStatus::Archived => "archived",
        }
    }
}
