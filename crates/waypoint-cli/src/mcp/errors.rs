//! Error mapping for the MCP server

use rmcp::ErrorData;
use waypoint_core::WaypointError;

/// Converts a core error into an MCP error, keeping caller mistakes
/// distinguishable from server failures.
pub fn to_mcp_error(message: &str, error: &WaypointError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        WaypointError::InvalidInput { .. } | WaypointError::RoadmapNotFound { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}

/// Error for a lookup that found nothing.
pub fn not_found(id: u64) -> ErrorData {
    ErrorData::invalid_params(format!("Roadmap with ID {id} not found"), None)
}
