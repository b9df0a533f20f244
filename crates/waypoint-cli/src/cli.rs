//! Command handlers for the Waypoint CLI.
//!
//! [`Cli`] owns a [`Registry`] and a [`TerminalRenderer`]; each handler
//! converts its clap arguments into core parameters, calls the registry and
//! renders the Markdown produced by the core display types.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use waypoint_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    export,
    models::Roadmap,
    params::{CompareRoadmaps, CreateRoadmap, DeleteRoadmap, Id, ListRoadmaps},
    ComparisonReport, ExportFormat, Registry,
};

use crate::{
    args::{CompareArgs, DiffArgs, ImportRoadmapArgs, RoadmapCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    registry: Registry,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(registry: Registry, renderer: TerminalRenderer) -> Self {
        Self { registry, renderer }
    }

    pub async fn handle_roadmap_command(&self, command: RoadmapCommands) -> Result<()> {
        match command {
            RoadmapCommands::Import(args) => self.import_roadmap(args).await,
            RoadmapCommands::List(args) => self.list_roadmaps(&args.into()).await,
            RoadmapCommands::Show(args) => self.show_roadmap(&args.into()).await,
            RoadmapCommands::Archive(args) => self.archive_roadmap(&args.into()).await,
            RoadmapCommands::Unarchive(args) => self.unarchive_roadmap(&args.into()).await,
            RoadmapCommands::Delete(args) => self.delete_roadmap(&args.into()).await,
            RoadmapCommands::Timeline(args) => self.roadmap_timeline(&args.into()).await,
        }
    }

    pub async fn list_roadmaps(&self, params: &ListRoadmaps) -> Result<()> {
        let summaries = self
            .registry
            .list_roadmaps_summary(params)
            .await
            .context("Failed to list roadmaps")?;

        let title = if params.archived {
            "Archived Roadmaps"
        } else {
            "Active Roadmaps"
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"));
        Ok(())
    }

    async fn import_roadmap(&self, args: ImportRoadmapArgs) -> Result<()> {
        let mut roadmap = read_roadmap(&args.file)?;
        if let Some(title) = args.title {
            roadmap.title = title;
        }

        let saved = self
            .registry
            .create_roadmap(&CreateRoadmap { roadmap })
            .await
            .with_context(|| format!("Failed to import {}", args.file.display()))?;

        self.renderer.render(&CreateResult::new(saved).to_string());
        Ok(())
    }

    async fn show_roadmap(&self, params: &Id) -> Result<()> {
        let saved = self
            .registry
            .get_roadmap(params)
            .await
            .context("Failed to get roadmap")?
            .ok_or_else(|| anyhow!("Roadmap with ID {} not found", params.id))?;

        self.renderer.render(&saved.to_string());
        Ok(())
    }

    async fn archive_roadmap(&self, params: &Id) -> Result<()> {
        let saved = self
            .registry
            .archive_roadmap(params)
            .await
            .context("Failed to archive roadmap")?
            .ok_or_else(|| anyhow!("Roadmap with ID {} not found", params.id))?;

        let status = OperationStatus::success(format!(
            "Archived roadmap '{}' (ID: {}). Use 'wp roadmap unarchive {}' to restore it.",
            saved.roadmap.title, saved.id, saved.id
        ));
        self.renderer.render(&status.to_string());
        Ok(())
    }

    async fn unarchive_roadmap(&self, params: &Id) -> Result<()> {
        let saved = self
            .registry
            .unarchive_roadmap(params)
            .await
            .context("Failed to unarchive roadmap")?
            .ok_or_else(|| anyhow!("Roadmap with ID {} not found", params.id))?;

        let status = OperationStatus::success(format!(
            "Restored roadmap '{}' (ID: {}) to the active list.",
            saved.roadmap.title, saved.id
        ));
        self.renderer.render(&status.to_string());
        Ok(())
    }

    async fn delete_roadmap(&self, params: &DeleteRoadmap) -> Result<()> {
        if !params.confirmed {
            bail!(
                "Deleting roadmap {} cannot be undone. Re-run with --confirm to proceed.",
                params.id
            );
        }

        let deleted = self
            .registry
            .delete_roadmap(params)
            .await
            .context("Failed to delete roadmap")?
            .ok_or_else(|| anyhow!("Roadmap with ID {} not found", params.id))?;

        self.renderer.render(&DeleteResult::new(deleted).to_string());
        Ok(())
    }

    async fn roadmap_timeline(&self, params: &Id) -> Result<()> {
        let timeline = self
            .registry
            .roadmap_timeline(params)
            .await
            .context("Failed to estimate timeline")?;

        self.renderer
            .render(&format!("# Timeline for roadmap {}\n\n{timeline}", params.id));
        Ok(())
    }

    pub async fn compare(&self, args: CompareArgs) -> Result<()> {
        let report = self
            .registry
            .compare_roadmaps(&CompareRoadmaps::from(&args))
            .await
            .context("Failed to compare roadmaps")?;

        print_report(&self.renderer, &report, args.format.into())
    }
}

/// Compares two roadmap files without opening the store.
pub fn diff_files(renderer: &TerminalRenderer, args: DiffArgs) -> Result<()> {
    let before = read_roadmap(&args.before_file)?;
    let after = read_roadmap(&args.after_file)?;

    let report = ComparisonReport::new(before, after).with_labels(
        args.before_file.display().to_string(),
        args.after_file.display().to_string(),
    );
    print_report(renderer, &report, args.format.into())
}

fn print_report(
    renderer: &TerminalRenderer,
    report: &ComparisonReport,
    format: ExportFormat,
) -> Result<()> {
    let output = export(report, format).context("Failed to export comparison")?;
    match format {
        ExportFormat::Json => renderer.render_raw(&output),
        ExportFormat::Markdown | ExportFormat::Table => renderer.render(&output),
    }
    Ok(())
}

/// Reads a roadmap document from a JSON file.
fn read_roadmap(path: &Path) -> Result<Roadmap> {
    debug!("Reading roadmap from {}", path.display());
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse roadmap in {}", path.display()))
}
