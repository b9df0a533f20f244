//! Data models for roadmaps and their phases.
//!
//! [`Roadmap`] is the plain document that gets compared: a title, a summary
//! and an ordered list of [`Phase`] records. [`SavedRoadmap`] wraps a
//! document with the identity and lifecycle metadata the store assigns, and
//! [`RoadmapSummary`] is the compact form used in list views.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{Phase, Priority, Roadmap};
//!
//! let roadmap = Roadmap::new("Platform 2025")
//!     .with_summary("Stabilize, then scale")
//!     .with_phase(
//!         Phase::new("Foundations")
//!             .with_priority(Priority::High)
//!             .with_duration("2 months")
//!             .with_tasks(["CI pipeline", "Schema migration"]),
//!     );
//!
//! assert_eq!(roadmap.task_count(), 2);
//! assert!(roadmap.validate().is_ok());
//! ```

pub mod filters;
pub mod phase;
pub mod roadmap;
pub mod status;
pub mod summary;

#[cfg(test)]
mod tests;

pub use filters::RoadmapFilter;
pub use phase::Phase;
pub use roadmap::{Roadmap, SavedRoadmap};
pub use status::{Priority, RoadmapStatus};
pub use summary::RoadmapSummary;
