//! High-level async API over the roadmap store.
//!
//! [`Registry`] is the entry point used by the CLI and the MCP server. Store
//! access runs on tokio's blocking pool, each call opening its own
//! connection, so a `Registry` can be shared freely across tasks.
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Handlers     │    │   Operations    │    │    Database     │
//! │ (roadmap_        │───▶│ (roadmap_ops)   │───▶│   (via db/)     │
//! │  handlers)       │    │                 │    │                 │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//!   Interface results       Blocking bridge        Persistence
//! ```
//!
//! Comparisons themselves never touch the store: handlers fetch both
//! snapshots and hand them to [`crate::diff::compare`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use waypoint_core::{
//!     models::{Phase, Roadmap},
//!     params::{CompareRoadmaps, CreateRoadmap},
//!     RegistryBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = RegistryBuilder::new()
//!     .with_database_path(Some("/tmp/waypoint.db"))
//!     .build()
//!     .await?;
//!
//! let v1 = registry
//!     .create_roadmap(&CreateRoadmap {
//!         roadmap: Roadmap::new("Platform").with_phase(Phase::new("Build")),
//!     })
//!     .await?;
//! let v2 = registry
//!     .create_roadmap(&CreateRoadmap {
//!         roadmap: Roadmap::new("Platform").with_phase(Phase::new("Launch")),
//!     })
//!     .await?;
//!
//! let report = registry
//!     .compare_roadmaps(&CompareRoadmaps { before_id: v1.id, after_id: v2.id })
//!     .await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod roadmap_handlers;
pub mod roadmap_ops;

#[cfg(test)]
mod tests;

pub use builder::RegistryBuilder;

/// Async interface for storing, listing and comparing roadmaps.
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) db_path: PathBuf,
}

impl Registry {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}
