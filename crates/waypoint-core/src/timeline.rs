//! Best-effort schedule estimates for Gantt-style views.
//!
//! Phase durations are free text. This module reads `"<N> months"` and
//! `"<N> weeks"` out of them and falls back to one month for anything else.
//! The figures are advisory and play no part in comparisons.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{Priority, Roadmap};

/// Months assumed for a duration that cannot be read.
pub const DEFAULT_MONTHS: f64 = 1.0;

const WEEKS_PER_MONTH: f64 = 4.0;

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(month|week)s?\b")
            .expect("duration pattern is a valid regex")
    })
}

/// Estimates a free-text duration in months.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::timeline::estimate_months;
///
/// assert_eq!(estimate_months("2 months"), 2.0);
/// assert_eq!(estimate_months("6 weeks"), 1.5);
/// assert_eq!(estimate_months("a quarter"), 1.0);
/// ```
pub fn estimate_months(duration: &str) -> f64 {
    let Some(captures) = duration_pattern().captures(duration) else {
        return DEFAULT_MONTHS;
    };

    let Ok(amount) = captures[1].parse::<f64>() else {
        return DEFAULT_MONTHS;
    };

    if captures[2].eq_ignore_ascii_case("week") {
        amount / WEEKS_PER_MONTH
    } else {
        amount
    }
}

/// One bar of a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub name: String,
    pub priority: Priority,
    /// Months from the start of the roadmap
    pub start_month: f64,
    pub duration_months: f64,
}

impl TimelineEntry {
    pub fn end_month(&self) -> f64 {
        self.start_month + self.duration_months
    }
}

/// Phases laid out back to back in roadmap order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub total_months: f64,
}

impl Timeline {
    /// Lays out the phases of `roadmap` sequentially.
    pub fn estimate(roadmap: &Roadmap) -> Self {
        let mut cursor = 0.0;
        let entries = roadmap
            .phases
            .iter()
            .map(|phase| {
                let entry = TimelineEntry {
                    name: phase.name.clone(),
                    priority: phase.priority,
                    start_month: cursor,
                    duration_months: estimate_months(&phase.duration),
                };
                cursor = entry.end_month();
                entry
            })
            .collect();

        Self {
            entries,
            total_months: cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;

    #[test]
    fn test_estimate_months_patterns() {
        assert_eq!(estimate_months("2 months"), 2.0);
        assert_eq!(estimate_months("1 month"), 1.0);
        assert_eq!(estimate_months("3 Weeks"), 0.75);
        assert_eq!(estimate_months("8weeks"), 2.0);
        assert_eq!(estimate_months("about 1.5 months"), 1.5);
    }

    #[test]
    fn test_estimate_months_falls_back() {
        assert_eq!(estimate_months(""), DEFAULT_MONTHS);
        assert_eq!(estimate_months("Q3"), DEFAULT_MONTHS);
        assert_eq!(estimate_months("10 days"), DEFAULT_MONTHS);
        assert_eq!(estimate_months("several months"), DEFAULT_MONTHS);
    }

    #[test]
    fn test_timeline_is_sequential() {
        let roadmap = Roadmap::new("R")
            .with_phase(Phase::new("A").with_duration("2 months"))
            .with_phase(Phase::new("B").with_duration("6 weeks"))
            .with_phase(Phase::new("C").with_duration("tbd"));

        let timeline = Timeline::estimate(&roadmap);

        let starts: Vec<f64> = timeline.entries.iter().map(|e| e.start_month).collect();
        assert_eq!(starts, vec![0.0, 2.0, 3.5]);
        assert_eq!(timeline.entries[2].duration_months, DEFAULT_MONTHS);
        assert_eq!(timeline.total_months, 4.5);
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::estimate(&Roadmap::default());
        assert!(timeline.entries.is_empty());
        assert_eq!(timeline.total_months, 0.0);
    }
}
