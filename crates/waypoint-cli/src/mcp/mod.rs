//! MCP server for Waypoint
//!
//! Exposes the roadmap store and comparison engine as Model Context Protocol
//! tools over stdio.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use waypoint_core::Registry;

pub mod errors;
pub mod handlers;

pub use handlers::{CompareRoadmaps, CreateRoadmap, DeleteRoadmap, Id, ListRoadmaps, McpResult};

const INSTRUCTIONS: &str = r#"Waypoint stores versions of a product roadmap and reports what changed between them.

## Core Concepts
- **Roadmap**: a title, a free-text summary and an ordered list of phases
- **Phase**: identified by its name; carries a description, priority (low/medium/high), free-text duration, tasks and dependencies

## Workflow
1. Save each version with `import_roadmap` and note the returned ID
2. Use `compare_roadmaps` with the older ID as `before_id` and the newer as `after_id`
3. Read the added, removed and modified phases plus the metrics table
4. Use `roadmap_timeline` for an estimated schedule of a single version

## Comparison Rules
- Phases are matched by exact name; a renamed phase shows as removed plus added
- Task and dependency order does not matter, only membership
- Duration text is compared as written; timeline estimates are advisory

## Tool Categories
- **Roadmaps**: import_roadmap, list_roadmaps, show_roadmap, archive_roadmap, unarchive_roadmap, delete_roadmap
- **Analysis**: compare_roadmaps, roadmap_timeline"#;

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    registry: Arc<Mutex<Registry>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.registry.clone())
    }

    #[tool(
        name = "import_roadmap",
        description = "Save a version of a roadmap. Provide a title, an optional summary and a list of phases; each phase needs a unique name and may have description, priority (low, medium, high), duration text, tasks and dependencies. Returns the new roadmap ID used for comparisons."
    )]
    async fn import_roadmap(&self, params: Parameters<CreateRoadmap>) -> McpResult {
        self.handlers().import_roadmap(params).await
    }

    #[tool(
        name = "list_roadmaps",
        description = "List stored roadmaps with their IDs and phase and task counts. Use archived=false (default) for active roadmaps or archived=true for archived ones. Set title to only list roadmaps whose title contains that text."
    )]
    async fn list_roadmaps(&self, params: Parameters<ListRoadmaps>) -> McpResult {
        self.handlers().list_roadmaps(params).await
    }

    #[tool(
        name = "show_roadmap",
        description = "Display a stored roadmap with all of its phases, tasks and dependencies."
    )]
    async fn show_roadmap(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_roadmap(params).await
    }

    #[tool(
        name = "archive_roadmap",
        description = "Archive a roadmap to hide it from the active list. It can still be compared and can be restored with unarchive_roadmap."
    )]
    async fn archive_roadmap(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().archive_roadmap(params).await
    }

    #[tool(
        name = "unarchive_roadmap",
        description = "Restore an archived roadmap to the active list."
    )]
    async fn unarchive_roadmap(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().unarchive_roadmap(params).await
    }

    #[tool(
        name = "delete_roadmap",
        description = "Permanently delete a stored roadmap. Requires confirmed=true. This cannot be undone; consider archiving instead."
    )]
    async fn delete_roadmap(&self, params: Parameters<DeleteRoadmap>) -> McpResult {
        self.handlers().delete_roadmap(params).await
    }

    #[tool(
        name = "compare_roadmaps",
        description = "Compare two stored roadmaps. before_id is the older version, after_id the newer. Reports added, removed and modified phases, whether the summary changed, and metrics such as the share of phases changed and tasks added or removed. format is markdown (default), table or json."
    )]
    async fn compare_roadmaps(&self, params: Parameters<CompareRoadmaps>) -> McpResult {
        self.handlers().compare_roadmaps(params).await
    }

    #[tool(
        name = "roadmap_timeline",
        description = "Estimate a sequential schedule for a stored roadmap from its phase durations. Durations like '2 months' or '6 weeks' are read; anything else counts as one month."
    )]
    async fn roadmap_timeline(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().roadmap_timeline(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Waypoint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
