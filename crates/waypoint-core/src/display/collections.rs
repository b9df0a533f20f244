//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::RoadmapSummary;

/// Newtype wrapper for displaying collections of roadmap summaries.
///
/// Titles are left to the caller; an empty collection renders a short
/// notice.
pub struct RoadmapSummaries(pub Vec<RoadmapSummary>);

impl RoadmapSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, RoadmapSummary> {
        self.0.iter()
    }
}

impl Index<usize> for RoadmapSummaries {
    type Output = RoadmapSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a RoadmapSummaries {
    type Item = &'a RoadmapSummary;
    type IntoIter = std::slice::Iter<'a, RoadmapSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RoadmapSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No roadmaps found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
