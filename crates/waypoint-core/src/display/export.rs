//! Export of comparison reports to document formats.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::comparison::{ComparisonReport, PhaseTable};
use crate::error::Result;

/// Output formats a comparison report can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Full Markdown report: metrics, phase table and change details
    #[default]
    Markdown,
    /// Phase table only
    Table,
    /// Pretty-printed JSON of the whole report
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "table" => Ok(ExportFormat::Table),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Invalid export format: {s}")),
        }
    }
}

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Returns `WaypointError::Serialization` if JSON encoding fails.
pub fn export(report: &ComparisonReport, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Markdown => report.to_string(),
        ExportFormat::Table => PhaseTable(report).to_string(),
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
    })
}
