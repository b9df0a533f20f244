//! Structural comparison of two roadmap versions.
//!
//! [`compare`] is a total, pure function: it borrows both roadmaps, performs
//! no I/O and returns the same [`ComparisonResult`] for the same inputs.
//!
//! Phases are matched by name. If a roadmap contains the same phase name more
//! than once, the last occurrence wins and the name is reported at most once,
//! at the position of that occurrence. Stored roadmaps never contain
//! duplicates because [`Roadmap::validate`] rejects them on save.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::{
//!     diff::{compare, FieldChange},
//!     models::{Phase, Priority, Roadmap},
//! };
//!
//! let before = Roadmap::new("Plan").with_phase(
//!     Phase::new("A").with_priority(Priority::Low).with_tasks(["t1"]),
//! );
//! let after = Roadmap::new("Plan").with_phase(
//!     Phase::new("A").with_priority(Priority::High).with_tasks(["t1", "t2"]),
//! );
//!
//! let result = compare(&before, &after);
//! assert!(result.added_phases.is_empty());
//! assert!(result.removed_phases.is_empty());
//! assert_eq!(
//!     result.modified_phases[0].priority_changed,
//!     Some(FieldChange { from: Priority::Low, to: Priority::High })
//! );
//! assert_eq!(result.modified_phases[0].task_changes.added, vec!["t2".to_string()]);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Phase, Priority, Roadmap};

#[cfg(test)]
mod tests;

/// A scalar field that differs between two versions of a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange<T> {
    pub from: T,
    pub to: T,
}

/// Membership changes of a string collection treated as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetChanges {
    /// Values present after but not before, in the order they appear after
    pub added: Vec<String>,
    /// Values present before but not after, in the order they appeared before
    pub removed: Vec<String>,
}

impl SetChanges {
    /// Computes set differences in both directions.
    ///
    /// Position is ignored; each value is reported once even if the source
    /// list repeats it.
    pub fn between(before: &[String], after: &[String]) -> Self {
        Self {
            added: difference(after, before),
            removed: difference(before, after),
        }
    }

    /// True when neither side gained or lost a value.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Values of `left` absent from `right`, deduplicated, in `left` order.
fn difference(left: &[String], right: &[String]) -> Vec<String> {
    let right: HashSet<&str> = right.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    left.iter()
        .filter(|value| !right.contains(value.as_str()) && seen.insert(value.as_str()))
        .cloned()
        .collect()
}

/// Field-level changes of a phase present in both versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    /// Name shared by both versions
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_changed: Option<FieldChange<Priority>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_changed: Option<FieldChange<String>>,

    #[serde(default)]
    pub description_changed: bool,

    #[serde(default)]
    pub task_changes: SetChanges,

    #[serde(default)]
    pub dependency_changes: SetChanges,
}

impl PhaseChange {
    /// Compares two versions of the same phase field by field.
    ///
    /// Returns `None` when nothing differs.
    pub fn between(before: &Phase, after: &Phase) -> Option<Self> {
        let change = Self {
            name: after.name.clone(),
            priority_changed: (before.priority != after.priority).then_some(FieldChange {
                from: before.priority,
                to: after.priority,
            }),
            duration_changed: (before.duration != after.duration).then(|| FieldChange {
                from: before.duration.clone(),
                to: after.duration.clone(),
            }),
            description_changed: before.description != after.description,
            task_changes: SetChanges::between(&before.tasks, &after.tasks),
            dependency_changes: SetChanges::between(&before.dependencies, &after.dependencies),
        };

        change.has_changes().then_some(change)
    }

    /// True if at least one tracked field differs.
    pub fn has_changes(&self) -> bool {
        self.priority_changed.is_some()
            || self.duration_changed.is_some()
            || self.description_changed
            || !self.task_changes.is_empty()
            || !self.dependency_changes.is_empty()
    }
}

/// Structural difference between two roadmap versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Phases only in the newer version, in its order
    pub added_phases: Vec<Phase>,
    /// Phases only in the older version, in its order
    pub removed_phases: Vec<Phase>,
    /// Phases in both versions whose contents differ, in the newer order
    pub modified_phases: Vec<PhaseChange>,
    /// Whether the roadmap-level summary text differs
    pub summary_changed: bool,
}

/// Where a phase name ended up in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseOutcome {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl PhaseOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseOutcome::Added => "added",
            PhaseOutcome::Removed => "removed",
            PhaseOutcome::Modified => "modified",
            PhaseOutcome::Unchanged => "unchanged",
        }
    }
}

impl ComparisonResult {
    /// True when the two versions are structurally identical.
    pub fn is_unchanged(&self) -> bool {
        self.added_phases.is_empty()
            && self.removed_phases.is_empty()
            && self.modified_phases.is_empty()
            && !self.summary_changed
    }

    /// Looks up the change record of a modified phase.
    pub fn modified(&self, name: &str) -> Option<&PhaseChange> {
        self.modified_phases.iter().find(|change| change.name == name)
    }

    /// Classifies every distinct phase name of both versions.
    ///
    /// Names of the newer version come first in its order, followed by the
    /// removed names in the older version's order. `after` must be the newer
    /// roadmap this result was computed from.
    pub fn outcomes(&self, after: &Roadmap) -> Vec<(String, PhaseOutcome)> {
        let added: HashSet<&str> = self.added_phases.iter().map(|p| p.name.as_str()).collect();
        let modified: HashSet<&str> = self
            .modified_phases
            .iter()
            .map(|change| change.name.as_str())
            .collect();

        let after_index = index_by_name(&after.phases);
        let mut outcomes: Vec<(String, PhaseOutcome)> = winners(&after.phases, &after_index)
            .map(|phase| {
                let outcome = if added.contains(phase.name.as_str()) {
                    PhaseOutcome::Added
                } else if modified.contains(phase.name.as_str()) {
                    PhaseOutcome::Modified
                } else {
                    PhaseOutcome::Unchanged
                };
                (phase.name.clone(), outcome)
            })
            .collect();

        outcomes.extend(
            self.removed_phases
                .iter()
                .map(|phase| (phase.name.clone(), PhaseOutcome::Removed)),
        );
        outcomes
    }
}

/// Maps each phase name to the index of its last occurrence.
fn index_by_name(phases: &[Phase]) -> HashMap<&str, usize> {
    phases
        .iter()
        .enumerate()
        .map(|(index, phase)| (phase.name.as_str(), index))
        .collect()
}

/// Phases that own their name in `index`, in source order.
fn winners<'a>(
    phases: &'a [Phase],
    index: &'a HashMap<&'a str, usize>,
) -> impl Iterator<Item = &'a Phase> + 'a {
    phases
        .iter()
        .enumerate()
        .filter(move |(position, phase)| index.get(phase.name.as_str()) == Some(position))
        .map(|(_, phase)| phase)
}

/// Computes the structural difference from `before` to `after`.
///
/// Never fails and never mutates its inputs. String fields are compared
/// exactly; tasks and dependencies are compared as sets of strings.
pub fn compare(before: &Roadmap, after: &Roadmap) -> ComparisonResult {
    let before_index = index_by_name(&before.phases);
    let after_index = index_by_name(&after.phases);

    let added_phases = winners(&after.phases, &after_index)
        .filter(|phase| !before_index.contains_key(phase.name.as_str()))
        .cloned()
        .collect();

    let removed_phases = winners(&before.phases, &before_index)
        .filter(|phase| !after_index.contains_key(phase.name.as_str()))
        .cloned()
        .collect();

    let modified_phases = winners(&after.phases, &after_index)
        .filter_map(|phase| {
            before_index
                .get(phase.name.as_str())
                .and_then(|&position| PhaseChange::between(&before.phases[position], phase))
        })
        .collect();

    ComparisonResult {
        added_phases,
        removed_phases,
        modified_phases,
        summary_changed: before.summary != after.summary,
    }
}
