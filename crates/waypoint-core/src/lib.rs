//! Core library for the Waypoint roadmap comparison tool.
//!
//! Waypoint compares two versions of a product roadmap and reports which
//! phases were added, removed or modified, whether the summary changed, and
//! a handful of derived figures. Around that engine sit a SQLite store for
//! roadmap snapshots and the formatting used by the CLI and MCP server.
//!
//! # Layout
//!
//! - [`diff`]: the comparison engine, a pure function of two [`Roadmap`]s
//! - [`metrics`]: counts and percentages derived from a comparison
//! - [`timeline`]: advisory schedule estimates parsed from phase durations
//! - [`db`] and [`registry`]: persistence, synchronous and async
//! - [`display`]: Markdown rendering and export formats
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{compare, models::{Phase, Priority, Roadmap}};
//!
//! let before = Roadmap::new("Platform")
//!     .with_phase(Phase::new("Build").with_priority(Priority::Low).with_tasks(["api"]));
//! let after = Roadmap::new("Platform")
//!     .with_phase(Phase::new("Build").with_priority(Priority::High).with_tasks(["api", "ui"]))
//!     .with_phase(Phase::new("Launch"));
//!
//! let result = compare(&before, &after);
//! assert_eq!(result.added_phases.len(), 1);
//! assert_eq!(result.modified_phases[0].task_changes.added, vec!["ui".to_string()]);
//! ```

pub mod db;
pub mod diff;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod params;
pub mod registry;
pub mod timeline;

// Re-export commonly used types
pub use db::Database;
pub use diff::{compare, ComparisonResult, FieldChange, PhaseChange, PhaseOutcome, SetChanges};
pub use display::{
    export, ComparisonReport, CreateResult, DeleteResult, ExportFormat, OperationStatus,
    RoadmapSummaries,
};
pub use error::{Result, WaypointError};
pub use metrics::ComparisonMetrics;
pub use models::{
    Phase, Priority, Roadmap, RoadmapFilter, RoadmapStatus, RoadmapSummary, SavedRoadmap,
};
pub use params::{CompareRoadmaps, CreateRoadmap, DeleteRoadmap, Id, ListRoadmaps};
pub use registry::{Registry, RegistryBuilder};
pub use timeline::{estimate_months, Timeline, TimelineEntry};
