//! Roadmap store operations for the Registry.
//!
//! Each method moves its inputs onto the blocking pool, opens the database
//! and runs one query module call.

use tokio::task;

use super::Registry;
use crate::{
    db::Database,
    error::{Result, WaypointError},
    models::{RoadmapFilter, RoadmapSummary, SavedRoadmap},
    params::{CreateRoadmap, Id},
};

impl Registry {
    /// Runs `f` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(WaypointError::join)?
    }

    /// Saves a new roadmap.
    pub async fn create_roadmap(&self, params: &CreateRoadmap) -> Result<SavedRoadmap> {
        let roadmap = params.roadmap.clone();
        self.with_database(move |db| db.create_roadmap(&roadmap)).await
    }

    /// Retrieves a roadmap with its phases.
    pub async fn get_roadmap(&self, params: &Id) -> Result<Option<SavedRoadmap>> {
        let id = params.id;
        self.with_database(move |db| db.get_roadmap(id)).await
    }

    /// Lists roadmap summaries with optional filtering.
    pub async fn list_roadmaps(&self, filter: Option<RoadmapFilter>) -> Result<Vec<RoadmapSummary>> {
        self.with_database(move |db| db.list_roadmaps(filter.as_ref()))
            .await
    }

    /// Archives a roadmap. Returns `None` if it doesn't exist.
    pub async fn archive_roadmap(&self, params: &Id) -> Result<Option<SavedRoadmap>> {
        let id = params.id;
        self.with_database(move |db| db.archive_roadmap(id)).await
    }

    /// Restores an archived roadmap. Returns `None` if it doesn't exist.
    pub async fn unarchive_roadmap(&self, params: &Id) -> Result<Option<SavedRoadmap>> {
        let id = params.id;
        self.with_database(move |db| db.unarchive_roadmap(id)).await
    }

    /// Permanently deletes a roadmap and its phases.
    pub async fn delete_roadmap_by_id(&self, params: &Id) -> Result<()> {
        let id = params.id;
        self.with_database(move |db| db.delete_roadmap(id)).await
    }
}
