//! Roadmap documents and their stored form.

use std::collections::HashSet;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Phase, RoadmapStatus};
use crate::error::{Result, WaypointError};

/// A roadmap document: a title, a free-text summary and an ordered list of
/// phases.
///
/// This is the value the comparison engine operates on. It carries no
/// storage metadata so that two snapshots can be compared regardless of
/// where they came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Roadmap {
    /// Title of the roadmap
    #[serde(default)]
    pub title: String,

    /// Free-text summary of the roadmap
    #[serde(default)]
    pub summary: String,

    /// Phases in presentation order
    #[serde(default, deserialize_with = "super::phase::null_as_empty")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<Vec<Phase>>"))]
    pub phases: Vec<Phase>,
}

impl Roadmap {
    /// Creates an empty roadmap with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Appends a phase.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    /// Total number of tasks across all phases.
    pub fn task_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.tasks.len()).sum()
    }

    /// Looks up a phase by name. With duplicate names the last one wins,
    /// matching how the comparison engine resolves them.
    pub fn phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().rev().find(|phase| phase.name == name)
    }

    /// Validates the document before it is persisted.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidInput` if the title is blank, a phase
    /// name is blank, or two phases share a name.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(WaypointError::invalid_input("title").with_reason("Title cannot be empty"));
        }

        let mut seen = HashSet::new();
        for (index, phase) in self.phases.iter().enumerate() {
            if phase.name.trim().is_empty() {
                return Err(WaypointError::invalid_input("phases")
                    .with_reason(format!("Phase at position {index} has an empty name")));
            }
            if !seen.insert(phase.name.as_str()) {
                return Err(WaypointError::invalid_input("phases")
                    .with_reason(format!("Duplicate phase name '{}'", phase.name)));
            }
        }

        Ok(())
    }
}

/// A roadmap as held by the store, with identity and lifecycle metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedRoadmap {
    /// Unique identifier for the roadmap
    pub id: u64,

    /// Status of the roadmap (active or archived)
    #[serde(default)]
    pub status: RoadmapStatus,

    /// Timestamp when the roadmap was saved (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the roadmap was last modified (UTC)
    pub updated_at: Timestamp,

    /// The roadmap document itself
    #[serde(flatten)]
    pub roadmap: Roadmap,
}
