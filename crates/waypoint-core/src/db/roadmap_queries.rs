//! Roadmap CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{id_column, parse_column};
use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    models::{Roadmap, RoadmapFilter, RoadmapStatus, RoadmapSummary, SavedRoadmap},
};

const INSERT_ROADMAP_SQL: &str = "INSERT INTO roadmaps (title, summary, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ROADMAP_SQL: &str =
    "SELECT id, title, summary, status, created_at, updated_at FROM roadmaps WHERE id = ?1";
const CHECK_ROADMAP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM roadmaps WHERE id = ?1)";
const UPDATE_ROADMAP_STATUS_SQL: &str =
    "UPDATE roadmaps SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4";
const DELETE_ROADMAP_SQL: &str = "DELETE FROM roadmaps WHERE id = ?1";

const ROADMAP_SUMMARY_COLUMNS: &str =
    "id, title, summary, status, created_at, updated_at, total_phases, total_tasks";

/// Decodes a `roadmaps` row; phases are loaded separately.
fn saved_roadmap_from_row(row: &Row<'_>) -> rusqlite::Result<SavedRoadmap> {
    Ok(SavedRoadmap {
        id: id_column(row, 0)?,
        status: parse_column(row, 3)?,
        created_at: parse_column(row, 4)?,
        updated_at: parse_column(row, 5)?,
        roadmap: Roadmap {
            title: row.get(1)?,
            summary: row.get(2)?,
            phases: Vec::new(),
        },
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<RoadmapSummary> {
    Ok(RoadmapSummary {
        id: id_column(row, 0)?,
        title: row.get(1)?,
        summary: row.get(2)?,
        status: parse_column(row, 3)?,
        created_at: parse_column(row, 4)?,
        updated_at: parse_column(row, 5)?,
        total_phases: row.get::<_, i64>(6)? as u32,
        total_tasks: row.get::<_, i64>(7)? as u32,
    })
}

impl super::Database {
    /// Saves a new roadmap with its phases.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidInput` if the document fails
    /// [`Roadmap::validate`], or a database error if the insert fails.
    pub fn create_roadmap(&mut self, roadmap: &Roadmap) -> Result<SavedRoadmap> {
        roadmap.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_ROADMAP_SQL,
            params![
                roadmap.title,
                roadmap.summary,
                RoadmapStatus::Active.as_str(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert roadmap")?;

        let id = tx.last_insert_rowid() as u64;
        Self::insert_phases(&tx, id, &roadmap.phases)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Saved roadmap {id} with {} phases", roadmap.phases.len());

        Ok(SavedRoadmap {
            id,
            status: RoadmapStatus::Active,
            created_at: now,
            updated_at: now,
            roadmap: roadmap.clone(),
        })
    }

    /// Retrieves a roadmap and its phases by ID.
    pub fn get_roadmap(&self, id: u64) -> Result<Option<SavedRoadmap>> {
        let mut saved = self
            .connection
            .query_row(SELECT_ROADMAP_SQL, params![id as i64], saved_roadmap_from_row)
            .optional()
            .db_context("Failed to query roadmap")?;

        if let Some(ref mut saved) = saved {
            saved.roadmap.phases = self.get_phases(saved.id)?;
        }

        Ok(saved)
    }

    /// Lists roadmap summaries, newest first.
    pub fn list_roadmaps(&self, filter: Option<&RoadmapFilter>) -> Result<Vec<RoadmapSummary>> {
        let mut query = format!("SELECT {ROADMAP_SUMMARY_COLUMNS} FROM roadmap_summaries");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref title) = f.title_contains {
                conditions.push("instr(lower(title), lower(?)) > 0");
                params_vec.push(Box::new(title.clone()));
            }

            if let Some(ref status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str().to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], summary_from_row)
            .db_context("Failed to query roadmaps")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch roadmaps")?;

        Ok(summaries)
    }

    /// Archives a roadmap. Returns `None` if it doesn't exist; an already
    /// archived roadmap is returned unchanged.
    pub fn archive_roadmap(&mut self, id: u64) -> Result<Option<SavedRoadmap>> {
        self.transition_status(id, RoadmapStatus::Active, RoadmapStatus::Archived)
    }

    /// Restores an archived roadmap. Returns `None` if it doesn't exist.
    pub fn unarchive_roadmap(&mut self, id: u64) -> Result<Option<SavedRoadmap>> {
        self.transition_status(id, RoadmapStatus::Archived, RoadmapStatus::Active)
    }

    fn transition_status(
        &mut self,
        id: u64,
        from: RoadmapStatus,
        to: RoadmapStatus,
    ) -> Result<Option<SavedRoadmap>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let rows_affected = tx
            .execute(
                UPDATE_ROADMAP_STATUS_SQL,
                params![to.as_str(), &now, id as i64, from.as_str()],
            )
            .db_context("Failed to update roadmap status")?;

        if rows_affected == 0 {
            let exists: bool = tx
                .query_row(CHECK_ROADMAP_EXISTS_SQL, params![id as i64], |row| row.get(0))
                .db_context("Failed to check roadmap existence")?;

            if !exists {
                return Ok(None);
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Roadmap {id} is now {}", to.as_str());

        self.get_roadmap(id)
    }

    /// Permanently deletes a roadmap and its phases.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::RoadmapNotFound` if no roadmap has this ID.
    pub fn delete_roadmap(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_ROADMAP_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check roadmap existence")?;

        if !exists {
            return Err(WaypointError::RoadmapNotFound { id });
        }

        Self::delete_phases(&tx, id)?;
        tx.execute(DELETE_ROADMAP_SQL, params![id as i64])
            .db_context("Failed to delete roadmap")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted roadmap {id}");

        Ok(())
    }
}
