//! Markdown rendering of comparison results, metrics and timelines.
//!
//! Rendering only reads from the values it formats; a [`ComparisonReport`]
//! bundles a result with the two source roadmaps and their derived metrics so
//! that every export format sees the same data.

use std::fmt;

use serde::Serialize;

use crate::{
    diff::{compare, ComparisonResult, PhaseChange, PhaseOutcome, SetChanges},
    metrics::ComparisonMetrics,
    models::{Phase, Roadmap},
    timeline::Timeline,
};

/// A comparison together with everything needed to present it.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub before_label: String,
    pub after_label: String,
    pub before: Roadmap,
    pub after: Roadmap,
    pub result: ComparisonResult,
    pub metrics: ComparisonMetrics,
}

impl ComparisonReport {
    /// Compares two roadmaps and derives metrics. Labels default to the
    /// roadmap titles.
    pub fn new(before: Roadmap, after: Roadmap) -> Self {
        let result = compare(&before, &after);
        let metrics = ComparisonMetrics::from_comparison(&result, &before, &after);
        Self {
            before_label: before.title.clone(),
            after_label: after.title.clone(),
            before,
            after,
            result,
            metrics,
        }
    }

    /// Replaces the labels shown for the two versions.
    pub fn with_labels(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_label = before.into();
        self.after_label = after.into();
        self
    }

    /// Every phase name with the bucket it landed in.
    pub fn outcomes(&self) -> Vec<(String, PhaseOutcome)> {
        self.result.outcomes(&self.after)
    }
}

fn fmt_set_changes(f: &mut fmt::Formatter<'_>, label: &str, changes: &SetChanges) -> fmt::Result {
    if !changes.added.is_empty() {
        writeln!(f, "- {label} added: {}", changes.added.join(", "))?;
    }
    if !changes.removed.is_empty() {
        writeln!(f, "- {label} removed: {}", changes.removed.join(", "))?;
    }
    Ok(())
}

fn fmt_phase_line(f: &mut fmt::Formatter<'_>, phase: &Phase) -> fmt::Result {
    write!(f, "- **{}** ({}", phase.name, phase.priority)?;
    if !phase.duration.is_empty() {
        write!(f, ", {}", phase.duration)?;
    }
    writeln!(f, "): {} tasks", phase.tasks.len())
}

impl fmt::Display for PhaseChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        writeln!(f)?;

        if let Some(change) = &self.priority_changed {
            writeln!(f, "- Priority: {} → {}", change.from, change.to)?;
        }
        if let Some(change) = &self.duration_changed {
            writeln!(f, "- Duration: {} → {}", or_none(&change.from), or_none(&change.to))?;
        }
        if self.description_changed {
            writeln!(f, "- Description changed")?;
        }
        fmt_set_changes(f, "Tasks", &self.task_changes)?;
        fmt_set_changes(f, "Dependencies", &self.dependency_changes)?;
        writeln!(f)
    }
}

fn or_none(value: &str) -> String {
    if value.is_empty() {
        "(none)".to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unchanged() {
            return writeln!(f, "No changes between the two versions.");
        }

        if self.summary_changed {
            writeln!(f, "Roadmap summary changed.")?;
            writeln!(f)?;
        }

        if !self.added_phases.is_empty() {
            writeln!(f, "## Added Phases")?;
            writeln!(f)?;
            for phase in &self.added_phases {
                fmt_phase_line(f, phase)?;
            }
            writeln!(f)?;
        }

        if !self.removed_phases.is_empty() {
            writeln!(f, "## Removed Phases")?;
            writeln!(f)?;
            for phase in &self.removed_phases {
                fmt_phase_line(f, phase)?;
            }
            writeln!(f)?;
        }

        if !self.modified_phases.is_empty() {
            writeln!(f, "## Modified Phases")?;
            writeln!(f)?;
            for change in &self.modified_phases {
                write!(f, "{change}")?;
            }
        }

        Ok(())
    }
}

fn signed_pct(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{pct:+.1}%"),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for ComparisonMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Metric | Before | After | Change |")?;
        writeln!(f, "|---|---|---|---|")?;
        writeln!(
            f,
            "| Phases | {} | {} | {} |",
            self.phases_before,
            self.phases_after,
            signed_pct(self.phase_delta_pct)
        )?;
        writeln!(
            f,
            "| Tasks | {} | {} | {} |",
            self.tasks_before,
            self.tasks_after,
            signed_pct(self.task_delta_pct)
        )?;
        writeln!(f)?;
        writeln!(f, "- Added phases: {} ({:.1}%)", self.phases_added, self.added_pct)?;
        writeln!(f, "- Removed phases: {} ({:.1}%)", self.phases_removed, self.removed_pct)?;
        writeln!(f, "- Modified phases: {} ({:.1}%)", self.phases_modified, self.modified_pct)?;
        writeln!(f, "- Unchanged phases: {}", self.phases_unchanged)?;
        writeln!(f, "- Tasks added: {}", self.tasks_added)?;
        writeln!(f, "- Tasks removed: {}", self.tasks_removed)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Comparison: {} → {}", self.before_label, self.after_label)?;
        writeln!(f)?;
        writeln!(f, "## Metrics")?;
        writeln!(f)?;
        write!(f, "{}", self.metrics)?;
        writeln!(f)?;
        write!(f, "{}", PhaseTable(self))?;
        writeln!(f)?;
        write!(f, "{}", self.result)
    }
}

/// Tabular view of a report: one row per phase name.
pub struct PhaseTable<'a>(pub &'a ComparisonReport);

impl fmt::Display for PhaseTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "| Phase | Status | Priority | Duration | Tasks |")?;
        writeln!(f, "|---|---|---|---|---|")?;

        for (name, outcome) in report.outcomes() {
            let old = report.before.phase(&name);
            let new = report.after.phase(&name);
            let (priority, duration, tasks) = match (old, new) {
                (Some(old), Some(new)) => (
                    transition(old.priority.to_string(), new.priority.to_string()),
                    transition(cell(&or_none(&old.duration)), cell(&or_none(&new.duration))),
                    transition(old.tasks.len().to_string(), new.tasks.len().to_string()),
                ),
                (Some(only), None) | (None, Some(only)) => (
                    only.priority.to_string(),
                    cell(&or_none(&only.duration)),
                    only.tasks.len().to_string(),
                ),
                (None, None) => continue,
            };
            writeln!(
                f,
                "| {} | {} | {priority} | {duration} | {tasks} |",
                cell(&name),
                outcome.as_str()
            )?;
        }
        Ok(())
    }
}

/// Escapes text for a Markdown table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn transition(from: String, to: String) -> String {
    if from == to {
        to
    } else {
        format!("{from} → {to}")
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No phases to schedule.");
        }

        writeln!(f, "Estimated length: {:.1} months", self.total_months)?;
        writeln!(f)?;
        writeln!(f, "| Phase | Priority | Start (month) | Length (months) |")?;
        writeln!(f, "|---|---|---|---|")?;
        for entry in &self.entries {
            writeln!(
                f,
                "| {} | {} | {:.1} | {:.1} |",
                cell(&entry.name),
                entry.priority, entry.start_month, entry.duration_months
            )?;
        }
        Ok(())
    }
}
