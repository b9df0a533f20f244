//! Roadmap summary types for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{RoadmapStatus, SavedRoadmap};

/// Summary information about a stored roadmap with phase and task counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapSummary {
    /// Roadmap ID
    pub id: u64,
    /// Title of the roadmap
    pub title: String,
    /// Free-text summary of the roadmap
    pub summary: String,
    /// Roadmap status
    pub status: RoadmapStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Number of phases
    pub total_phases: u32,
    /// Number of tasks across all phases
    pub total_tasks: u32,
}

impl From<&SavedRoadmap> for RoadmapSummary {
    fn from(saved: &SavedRoadmap) -> Self {
        Self {
            id: saved.id,
            title: saved.roadmap.title.clone(),
            summary: saved.roadmap.summary.clone(),
            status: saved.status,
            created_at: saved.created_at,
            updated_at: saved.updated_at,
            total_phases: saved.roadmap.phases.len() as u32,
            total_tasks: saved.roadmap.task_count() as u32,
        }
    }
}
