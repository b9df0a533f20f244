//! Phase persistence queries.

use rusqlite::{params, Connection};

use super::utils::{json_list_column, parse_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::Phase,
};

const INSERT_PHASE_SQL: &str = "INSERT INTO phases (roadmap_id, position, name, description, priority, duration, tasks, dependencies) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_PHASES_SQL: &str = "SELECT name, description, priority, duration, tasks, dependencies FROM phases WHERE roadmap_id = ?1 ORDER BY position";
const DELETE_PHASES_SQL: &str = "DELETE FROM phases WHERE roadmap_id = ?1";

impl super::Database {
    /// Inserts `phases` for a roadmap, keeping their order in `position`.
    ///
    /// Takes the connection explicitly so that it can run inside the caller's
    /// transaction.
    pub(super) fn insert_phases(conn: &Connection, roadmap_id: u64, phases: &[Phase]) -> Result<()> {
        let mut stmt = conn
            .prepare(INSERT_PHASE_SQL)
            .db_context("Failed to prepare phase insert")?;

        for (position, phase) in phases.iter().enumerate() {
            let tasks = serde_json::to_string(&phase.tasks)?;
            let dependencies = serde_json::to_string(&phase.dependencies)?;
            stmt.execute(params![
                roadmap_id as i64,
                position as i64,
                phase.name,
                phase.description,
                phase.priority.as_str(),
                phase.duration,
                tasks,
                dependencies,
            ])
            .db_context("Failed to insert phase")?;
        }

        Ok(())
    }

    /// Loads the phases of a roadmap in their stored order.
    pub fn get_phases(&self, roadmap_id: u64) -> Result<Vec<Phase>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PHASES_SQL)
            .db_context("Failed to prepare phase query")?;

        let phases = stmt
            .query_map(params![roadmap_id as i64], |row| {
                Ok(Phase {
                    name: row.get(0)?,
                    description: row.get(1)?,
                    priority: parse_column(row, 2)?,
                    duration: row.get(3)?,
                    tasks: json_list_column(row, 4)?,
                    dependencies: json_list_column(row, 5)?,
                })
            })
            .db_context("Failed to query phases")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch phases")?;

        Ok(phases)
    }

    /// Deletes every phase of a roadmap.
    pub(super) fn delete_phases(conn: &Connection, roadmap_id: u64) -> Result<()> {
        conn.execute(DELETE_PHASES_SQL, params![roadmap_id as i64])
            .db_context("Failed to delete roadmap phases")?;
        Ok(())
    }
}
