//! Display implementations for domain models.
//!
//! All output is Markdown so that the CLI renderer and MCP clients can show
//! it directly.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Phase, Priority, Roadmap, RoadmapStatus, RoadmapSummary, SavedRoadmap};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RoadmapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duration.is_empty() {
            writeln!(f, "### {} ({})", self.name, self.priority)?;
        } else {
            writeln!(f, "### {} ({}, {})", self.name, self.priority, self.duration)?;
        }
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        if !self.dependencies.is_empty() {
            writeln!(f, "- Depends on: {}", self.dependencies.join(", "))?;
            writeln!(f)?;
        }

        if !self.tasks.is_empty() {
            writeln!(f, "#### Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                writeln!(f, "- {task}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn fmt_phases(f: &mut fmt::Formatter<'_>, phases: &[Phase]) -> fmt::Result {
    if phases.is_empty() {
        return writeln!(f, "\nNo phases in this roadmap.");
    }

    writeln!(f, "\n## Phases")?;
    writeln!(f)?;
    for phase in phases {
        write!(f, "{phase}")?;
    }
    Ok(())
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;

        if !self.summary.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.summary)?;
        }

        fmt_phases(f, &self.phases)
    }
}

impl fmt::Display for SavedRoadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.roadmap.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        writeln!(
            f,
            "- Phases: {} ({} tasks)",
            self.roadmap.phases.len(),
            self.roadmap.task_count()
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.roadmap.summary.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.roadmap.summary)?;
        }

        fmt_phases(f, &self.roadmap.phases)
    }
}

impl fmt::Display for RoadmapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({} phases, {} tasks)",
            self.title, self.id, self.total_phases, self.total_tasks
        )?;
        writeln!(f)?;

        if !self.summary.is_empty() {
            writeln!(f, "- **Summary**: {}", self.summary)?;
        }

        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}
