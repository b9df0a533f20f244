//! Parameter structures for Waypoint operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives apart from serde. Interface layers wrap or
//! convert into them: the CLI converts clap argument structs with `From`,
//! and the MCP server deserializes them directly, with JSON schema
//! generation enabled through the `schema` feature.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│                 │
//! │  (clap derives) │    │  Core Params    │
//! ├─────────────────┤    │ (serde derives) │
//! │   MCP Params    │───▶│                 │
//! │ (schema derive) │    └─────────────────┘
//! └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Roadmap;

/// Generic parameters for operations requiring just an ID.
///
/// Used for show, archive, unarchive and timeline operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the roadmap to operate on
    pub id: u64,
}

/// Parameters for saving a new roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateRoadmap {
    /// The roadmap document: title, summary and phases
    #[serde(flatten)]
    pub roadmap: Roadmap,
}

/// Parameters for listing roadmaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRoadmaps {
    /// Whether to show archived roadmaps instead of active ones
    #[serde(default)]
    pub archived: bool,
    /// Only include roadmaps whose title contains this text (case-insensitive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Parameters for permanently deleting a roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteRoadmap {
    /// The ID of the roadmap to delete
    pub id: u64,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for comparing two stored roadmaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompareRoadmaps {
    /// ID of the older version
    pub before_id: u64,
    /// ID of the newer version
    pub after_id: u64,
}
