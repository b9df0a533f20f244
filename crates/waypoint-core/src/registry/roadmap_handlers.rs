//! Roadmap handler operations that return interface-ready types for the
//! Registry.

use log::debug;

use super::Registry;
use crate::{
    display::{ComparisonReport, RoadmapSummaries},
    error::{Result, WaypointError},
    models::{RoadmapFilter, SavedRoadmap},
    params::{CompareRoadmaps, DeleteRoadmap, Id, ListRoadmaps},
    timeline::Timeline,
};

impl Registry {
    /// Handle listing roadmaps, either the active or the archived ones.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use waypoint_core::{params::ListRoadmaps, RegistryBuilder};
    /// # async {
    /// let registry = RegistryBuilder::new().build().await?;
    /// let summaries = registry
    ///     .list_roadmaps_summary(&ListRoadmaps::default())
    ///     .await?;
    /// # Result::<(), waypoint_core::WaypointError>::Ok(())
    /// # };
    /// ```
    pub async fn list_roadmaps_summary(&self, params: &ListRoadmaps) -> Result<RoadmapSummaries> {
        let filter = Some(RoadmapFilter::from(params));
        Ok(RoadmapSummaries(self.list_roadmaps(filter).await?))
    }

    /// Handle permanently deleting a roadmap with confirmation.
    ///
    /// Returns the deleted roadmap, or `None` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidInput` if `confirmed` is false.
    pub async fn delete_roadmap(&self, params: &DeleteRoadmap) -> Result<Option<SavedRoadmap>> {
        if !params.confirmed {
            return Err(WaypointError::invalid_input("confirmed").with_reason(
                "Roadmap deletion requires explicit confirmation. Set 'confirmed' to true to \
                 proceed with permanent deletion.",
            ));
        }

        let id = Id { id: params.id };
        let roadmap = self.get_roadmap(&id).await?;
        if roadmap.is_some() {
            self.delete_roadmap_by_id(&id).await?;
        }

        Ok(roadmap)
    }

    /// Handle comparing two stored roadmaps.
    ///
    /// Both snapshots are loaded before anything is compared; the versions are
    /// labelled `#<id> <title>` in the report.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::RoadmapNotFound` if either ID is unknown.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use waypoint_core::{params::CompareRoadmaps, RegistryBuilder};
    /// # async {
    /// let registry = RegistryBuilder::new().build().await?;
    /// let report = registry
    ///     .compare_roadmaps(&CompareRoadmaps { before_id: 1, after_id: 2 })
    ///     .await?;
    /// println!("{}", report.metrics);
    /// # Result::<(), waypoint_core::WaypointError>::Ok(())
    /// # };
    /// ```
    pub async fn compare_roadmaps(&self, params: &CompareRoadmaps) -> Result<ComparisonReport> {
        let before = self.require_roadmap(params.before_id).await?;
        let after = self.require_roadmap(params.after_id).await?;

        debug!("Comparing roadmap {} against {}", before.id, after.id);

        let before_label = label(&before);
        let after_label = label(&after);
        Ok(ComparisonReport::new(before.roadmap, after.roadmap).with_labels(before_label, after_label))
    }

    /// Handle estimating a schedule for a stored roadmap.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::RoadmapNotFound` if the ID is unknown.
    pub async fn roadmap_timeline(&self, params: &Id) -> Result<Timeline> {
        let saved = self.require_roadmap(params.id).await?;
        Ok(Timeline::estimate(&saved.roadmap))
    }

    async fn require_roadmap(&self, id: u64) -> Result<SavedRoadmap> {
        self.get_roadmap(&Id { id })
            .await?
            .ok_or(WaypointError::RoadmapNotFound { id })
    }
}

fn label(saved: &SavedRoadmap) -> String {
    format!("#{} {}", saved.id, saved.roadmap.title)
}
