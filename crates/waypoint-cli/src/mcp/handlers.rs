//! MCP tool handler implementations

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use waypoint_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params as core,
    ExportFormat, Registry,
};

use super::errors::{not_found, to_mcp_error};

/// Transparent MCP wrapper for core parameter types.
///
/// Deserialization and schema generation pass straight through to the
/// wrapped type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateRoadmap = McpParams<core::CreateRoadmap>;
pub type ListRoadmaps = McpParams<core::ListRoadmaps>;
pub type DeleteRoadmap = McpParams<core::DeleteRoadmap>;

/// Comparison request with an optional output format.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CompareRoadmaps {
    #[serde(flatten)]
    pub ids: core::CompareRoadmaps,
    /// One of "markdown" (default), "table" or "json"
    #[serde(default)]
    pub format: Option<String>,
}

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    registry: Arc<Mutex<Registry>>,
}

impl McpHandlers {
    pub fn new(registry: Arc<Mutex<Registry>>) -> Self {
        Self { registry }
    }

    pub async fn import_roadmap(&self, Parameters(params): Parameters<CreateRoadmap>) -> McpResult {
        debug!("import_roadmap: {:?}", params.as_ref().roadmap.title);

        let saved = self
            .registry
            .lock()
            .await
            .create_roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to import roadmap", &e))?;

        text(CreateResult::new(saved).to_string())
    }

    pub async fn list_roadmaps(&self, Parameters(params): Parameters<ListRoadmaps>) -> McpResult {
        debug!("list_roadmaps: {params:?}");

        let inner = params.as_ref();
        let summaries = self
            .registry
            .lock()
            .await
            .list_roadmaps_summary(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to list roadmaps", &e))?;

        let title = if inner.archived {
            "Archived Roadmaps"
        } else {
            "Active Roadmaps"
        };
        text(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_roadmap: {params:?}");

        let id = params.as_ref().id;
        let saved = self
            .registry
            .lock()
            .await
            .get_roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get roadmap", &e))?
            .ok_or_else(|| not_found(id))?;

        text(saved.to_string())
    }

    pub async fn archive_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("archive_roadmap: {params:?}");

        let id = params.as_ref().id;
        self.registry
            .lock()
            .await
            .archive_roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to archive roadmap", &e))?
            .ok_or_else(|| not_found(id))?;

        text(
            OperationStatus::success(format!(
                "Archived roadmap with ID {id}. Use 'unarchive_roadmap' to restore it."
            ))
            .to_string(),
        )
    }

    pub async fn unarchive_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("unarchive_roadmap: {params:?}");

        let id = params.as_ref().id;
        self.registry
            .lock()
            .await
            .unarchive_roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to unarchive roadmap", &e))?
            .ok_or_else(|| not_found(id))?;

        text(
            OperationStatus::success(format!(
                "Restored roadmap with ID {id} to the active list."
            ))
            .to_string(),
        )
    }

    pub async fn delete_roadmap(&self, Parameters(params): Parameters<DeleteRoadmap>) -> McpResult {
        debug!("delete_roadmap: {params:?}");

        let id = params.as_ref().id;
        let deleted = self
            .registry
            .lock()
            .await
            .delete_roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete roadmap", &e))?
            .ok_or_else(|| not_found(id))?;

        text(DeleteResult::new(deleted).to_string())
    }

    pub async fn compare_roadmaps(
        &self,
        Parameters(params): Parameters<CompareRoadmaps>,
    ) -> McpResult {
        debug!("compare_roadmaps: {params:?}");

        let format = match params.format.as_deref() {
            Some(name) => name
                .parse::<ExportFormat>()
                .map_err(|e| ErrorData::invalid_params(e, None))?,
            None => ExportFormat::default(),
        };

        let report = self
            .registry
            .lock()
            .await
            .compare_roadmaps(&params.ids)
            .await
            .map_err(|e| to_mcp_error("Failed to compare roadmaps", &e))?;

        let output = waypoint_core::export(&report, format)
            .map_err(|e| to_mcp_error("Failed to export comparison", &e))?;
        text(output)
    }

    pub async fn roadmap_timeline(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("roadmap_timeline: {params:?}");

        let timeline = self
            .registry
            .lock()
            .await
            .roadmap_timeline(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to estimate timeline", &e))?;

        text(format!(
            "# Timeline for roadmap {}\n\n{timeline}",
            params.as_ref().id
        ))
    }
}
