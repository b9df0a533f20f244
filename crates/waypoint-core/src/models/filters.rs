//! Filter types for querying stored roadmaps.

use super::RoadmapStatus;

/// Filter options for querying roadmaps.
#[derive(Debug, Clone, Default)]
pub struct RoadmapFilter {
    /// Filter by roadmap title (case-insensitive partial match)
    pub title_contains: Option<String>,

    /// Filter by roadmap status (active/archived)
    pub status: Option<RoadmapStatus>,
}

impl From<&crate::params::ListRoadmaps> for RoadmapFilter {
    /// Convert ListRoadmaps parameters to a RoadmapFilter.
    ///
    /// - `archived: false` → active roadmaps only
    /// - `archived: true` → archived roadmaps only
    /// - `title` → title must contain the text
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::{models::{RoadmapFilter, RoadmapStatus}, params::ListRoadmaps};
    ///
    /// let params = ListRoadmaps { archived: true, title: Some("Mobile".to_string()) };
    /// let filter: RoadmapFilter = (&params).into();
    /// assert_eq!(filter.status, Some(RoadmapStatus::Archived));
    /// assert_eq!(filter.title_contains.as_deref(), Some("Mobile"));
    /// ```
    fn from(params: &crate::params::ListRoadmaps) -> Self {
        Self {
            title_contains: params
                .title
                .as_deref()
                .map(str::trim)
                .filter(|title| !title.is_empty())
                .map(str::to_string),
            status: Some(if params.archived {
                RoadmapStatus::Archived
            } else {
                RoadmapStatus::Active
            }),
        }
    }
}
