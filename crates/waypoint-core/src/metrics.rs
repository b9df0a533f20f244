//! Summary figures derived from a comparison.
//!
//! Everything here is a pure function of a [`ComparisonResult`] and the two
//! roadmaps it was computed from.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    diff::ComparisonResult,
    models::{Phase, Roadmap},
};

/// Counts and percentages describing how much a roadmap changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    pub phases_before: usize,
    pub phases_after: usize,
    pub phases_added: usize,
    pub phases_removed: usize,
    pub phases_modified: usize,
    pub phases_unchanged: usize,

    /// Added phases as a share of the newer version's phases
    pub added_pct: f64,
    /// Removed phases as a share of the older version's phases
    pub removed_pct: f64,
    /// Modified phases as a share of the older version's phases
    pub modified_pct: f64,

    pub tasks_before: usize,
    pub tasks_after: usize,
    /// Tasks of added phases plus tasks added to modified phases
    pub tasks_added: usize,
    /// Tasks of removed phases plus tasks dropped from modified phases
    pub tasks_removed: usize,

    /// Relative change in phase count; `None` when the older version is empty
    pub phase_delta_pct: Option<f64>,
    /// Relative change in task count; `None` when the older version has none
    pub task_delta_pct: Option<f64>,
}

impl ComparisonMetrics {
    /// Derives metrics from a comparison and its two source roadmaps.
    pub fn from_comparison(result: &ComparisonResult, before: &Roadmap, after: &Roadmap) -> Self {
        let resolved_before = resolve(before);
        let resolved_after = resolve(after);

        let phases_before = resolved_before.len();
        let phases_after = resolved_after.len();
        let phases_added = result.added_phases.len();
        let phases_removed = result.removed_phases.len();
        let phases_modified = result.modified_phases.len();
        let phases_common = phases_before.saturating_sub(phases_removed);

        let tasks_before = resolved_before.values().copied().map(distinct_tasks).sum();
        let tasks_after = resolved_after.values().copied().map(distinct_tasks).sum();

        let tasks_added = result
            .added_phases
            .iter()
            .map(distinct_tasks)
            .chain(
                result
                    .modified_phases
                    .iter()
                    .map(|change| change.task_changes.added.len()),
            )
            .sum();
        let tasks_removed = result
            .removed_phases
            .iter()
            .map(distinct_tasks)
            .chain(
                result
                    .modified_phases
                    .iter()
                    .map(|change| change.task_changes.removed.len()),
            )
            .sum();

        Self {
            phases_before,
            phases_after,
            phases_added,
            phases_removed,
            phases_modified,
            phases_unchanged: phases_common.saturating_sub(phases_modified),
            added_pct: percentage(phases_added, phases_after),
            removed_pct: percentage(phases_removed, phases_before),
            modified_pct: percentage(phases_modified, phases_before),
            tasks_before,
            tasks_after,
            tasks_added,
            tasks_removed,
            phase_delta_pct: delta(phases_before, phases_after),
            task_delta_pct: delta(tasks_before, tasks_after),
        }
    }
}

/// Phases keyed by name, later duplicates replacing earlier ones.
fn resolve(roadmap: &Roadmap) -> HashMap<&str, &Phase> {
    roadmap
        .phases
        .iter()
        .map(|phase| (phase.name.as_str(), phase))
        .collect()
}

/// Tasks of a phase counted as a set, the way task diffs count them.
fn distinct_tasks(phase: &Phase) -> usize {
    phase.tasks.iter().collect::<HashSet<_>>().len()
}

/// `part / whole` as a percentage, 0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Relative change from `before` to `after` as a percentage.
pub fn delta(before: usize, after: usize) -> Option<f64> {
    (before != 0).then(|| (after as f64 - before as f64) / before as f64 * 100.0)
}
