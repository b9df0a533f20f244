//! Builder for creating and configuring Registry instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Registry;
use crate::{
    db::Database,
    error::{Result, WaypointError},
};

/// Builder for creating and configuring Registry instances.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    database_path: Option<PathBuf>,
}

impl RegistryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the registry, creating the database and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::FileSystem` if the parent directory cannot be
    /// created, `WaypointError::XdgDirectory` if no default location can be
    /// determined, or `WaypointError::Database` if initialization fails.
    pub async fn build(self) -> Result<Registry> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| WaypointError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        debug!("Opening roadmap store at {}", db_path.display());

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(WaypointError::join)??;

        Ok(Registry::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| WaypointError::XdgDirectory(e.to_string()))
    }
}
