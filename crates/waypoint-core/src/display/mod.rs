//! Display formatting and export.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers give collections and operation results their own
//! formatting; [`comparison`] renders diffs, metrics and timelines; and
//! [`export`] turns a comparison report into a chosen document format.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers &     │    │    Markdown /   │
//! │  & Comparisons  │───▶│  Report Types   │───▶│      JSON       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::{
//!     display::{export, ComparisonReport, ExportFormat},
//!     models::{Phase, Roadmap},
//! };
//!
//! let before = Roadmap::new("v1").with_phase(Phase::new("Alpha"));
//! let after = Roadmap::new("v2").with_phase(Phase::new("Beta"));
//!
//! let report = ComparisonReport::new(before, after);
//! let markdown = export(&report, ExportFormat::Markdown)?;
//! assert!(markdown.contains("## Added Phases"));
//! # Ok::<(), waypoint_core::WaypointError>(())
//! ```

pub mod collections;
pub mod comparison;
pub mod datetime;
pub mod export;
pub mod models;
pub mod results;
pub mod status;

pub use collections::RoadmapSummaries;
pub use comparison::{ComparisonReport, PhaseTable};
pub use datetime::LocalDateTime;
pub use export::{export, ExportFormat};
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
