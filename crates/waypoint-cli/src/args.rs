//! Command-line argument definitions using clap's derive API.
//!
//! Each command carries its own `XxxArgs` struct with clap attributes and a
//! `From` conversion into the matching core parameter type, so that
//! `waypoint_core::params` stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Registry
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use waypoint_core::{params::*, ExportFormat};

/// Compare versions of a product roadmap
///
/// Waypoint stores roadmap snapshots and reports which phases were added,
/// removed or modified between two versions, along with summary metrics and
/// an estimated timeline. It can also run as an MCP (Model Context Protocol)
/// server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage stored roadmaps
    #[command(alias = "r")]
    Roadmap {
        #[command(subcommand)]
        command: RoadmapCommands,
    },
    /// Compare two stored roadmaps
    #[command(alias = "c")]
    Compare(CompareArgs),
    /// Compare two roadmap JSON files without storing them
    #[command(alias = "d")]
    Diff(DiffArgs),
    /// Start the MCP server
    Serve,
}

/// Roadmap management subcommands
#[derive(Subcommand)]
pub enum RoadmapCommands {
    /// Import a roadmap from a JSON file
    #[command(alias = "i")]
    Import(ImportRoadmapArgs),
    /// List stored roadmaps
    #[command(aliases = ["l", "ls"])]
    List(ListRoadmapsArgs),
    /// Show a stored roadmap with its phases
    #[command(alias = "s")]
    Show(ShowRoadmapArgs),
    /// Archive a roadmap
    Archive(ArchiveRoadmapArgs),
    /// Restore an archived roadmap
    Unarchive(UnarchiveRoadmapArgs),
    /// Delete a roadmap permanently
    Delete(DeleteRoadmapArgs),
    /// Show an estimated timeline for a roadmap
    #[command(alias = "t")]
    Timeline(TimelineArgs),
}

/// Import a roadmap document
///
/// The file holds a JSON object with `title`, `summary` and `phases`; each
/// phase has a `name` and optional `description`, `priority`, `duration`,
/// `tasks` and `dependencies`.
#[derive(ClapArgs)]
pub struct ImportRoadmapArgs {
    /// Path to the roadmap JSON file
    pub file: PathBuf,
    /// Store the roadmap under this title instead of the one in the file
    #[arg(short, long)]
    pub title: Option<String>,
}

/// List stored roadmaps
#[derive(ClapArgs)]
pub struct ListRoadmapsArgs {
    /// Show archived roadmaps instead of active ones
    #[arg(long)]
    pub archived: bool,
    /// Only show roadmaps whose title contains this text
    #[arg(short, long)]
    pub title: Option<String>,
}

impl From<ListRoadmapsArgs> for ListRoadmaps {
    fn from(val: ListRoadmapsArgs) -> Self {
        ListRoadmaps {
            archived: val.archived,
            title: val.title,
        }
    }
}

/// Show a stored roadmap
#[derive(ClapArgs)]
pub struct ShowRoadmapArgs {
    /// ID of the roadmap to display
    pub id: u64,
}

impl From<ShowRoadmapArgs> for Id {
    fn from(val: ShowRoadmapArgs) -> Self {
        Id { id: val.id }
    }
}

/// Archive a roadmap, hiding it from the default list
#[derive(ClapArgs)]
pub struct ArchiveRoadmapArgs {
    /// ID of the roadmap to archive
    pub id: u64,
}

impl From<ArchiveRoadmapArgs> for Id {
    fn from(val: ArchiveRoadmapArgs) -> Self {
        Id { id: val.id }
    }
}

/// Restore an archived roadmap to the active list
#[derive(ClapArgs)]
pub struct UnarchiveRoadmapArgs {
    /// ID of the roadmap to restore
    pub id: u64,
}

impl From<UnarchiveRoadmapArgs> for Id {
    fn from(val: UnarchiveRoadmapArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a roadmap permanently
#[derive(ClapArgs)]
pub struct DeleteRoadmapArgs {
    /// ID of the roadmap to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteRoadmapArgs> for DeleteRoadmap {
    fn from(val: DeleteRoadmapArgs) -> Self {
        DeleteRoadmap {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Estimate a timeline from phase durations
#[derive(ClapArgs)]
pub struct TimelineArgs {
    /// ID of the roadmap to schedule
    pub id: u64,
}

impl From<TimelineArgs> for Id {
    fn from(val: TimelineArgs) -> Self {
        Id { id: val.id }
    }
}

/// Compare two stored roadmaps
#[derive(ClapArgs)]
pub struct CompareArgs {
    /// ID of the older version
    pub before_id: u64,
    /// ID of the newer version
    pub after_id: u64,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Markdown)]
    pub format: FormatArg,
}

impl From<&CompareArgs> for CompareRoadmaps {
    fn from(val: &CompareArgs) -> Self {
        CompareRoadmaps {
            before_id: val.before_id,
            after_id: val.after_id,
        }
    }
}

/// Compare two roadmap files
#[derive(ClapArgs)]
pub struct DiffArgs {
    /// Path to the older roadmap JSON file
    pub before_file: PathBuf,
    /// Path to the newer roadmap JSON file
    pub after_file: PathBuf,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Markdown)]
    pub format: FormatArg,
}

/// Command-line representation of the export formats
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum FormatArg {
    /// Full Markdown report
    Markdown,
    /// Phase status table only
    Table,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Markdown => ExportFormat::Markdown,
            FormatArg::Table => ExportFormat::Table,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}
