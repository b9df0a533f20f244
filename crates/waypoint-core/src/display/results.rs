//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::SavedRoadmap;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use waypoint_core::{
///     display::CreateResult,
///     models::{Roadmap, RoadmapStatus, SavedRoadmap},
/// };
///
/// let saved = SavedRoadmap {
///     id: 1,
///     status: RoadmapStatus::Active,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     roadmap: Roadmap::new("Platform 2025"),
/// };
///
/// let output = CreateResult::new(saved).to_string();
/// assert!(output.starts_with("Saved roadmap with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<SavedRoadmap> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved roadmap with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<SavedRoadmap> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted roadmap '{}' (ID: {})",
            self.resource.roadmap.title, self.resource.id
        )
    }
}
