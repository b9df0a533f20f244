//! Tests for the registry module.

use tempfile::TempDir;

use super::*;
use crate::{
    diff::PhaseOutcome,
    error::WaypointError,
    models::{Phase, Priority, Roadmap, RoadmapStatus},
    params::{CompareRoadmaps, CreateRoadmap, DeleteRoadmap, Id, ListRoadmaps},
};

async fn create_test_registry() -> (TempDir, Registry) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let registry = RegistryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create registry");
    (temp_dir, registry)
}

fn create_params(roadmap: Roadmap) -> CreateRoadmap {
    CreateRoadmap { roadmap }
}

fn version_one() -> Roadmap {
    Roadmap::new("Platform")
        .with_summary("first cut")
        .with_phase(
            Phase::new("Build")
                .with_priority(Priority::Low)
                .with_tasks(["api"]),
        )
        .with_phase(Phase::new("Pilot").with_duration("3 weeks"))
}

fn version_two() -> Roadmap {
    Roadmap::new("Platform")
        .with_summary("first cut")
        .with_phase(
            Phase::new("Build")
                .with_priority(Priority::High)
                .with_tasks(["api", "ui"]),
        )
        .with_phase(Phase::new("Launch").with_duration("2 months"))
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("waypoint.db");

    let registry = RegistryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create registry");

    assert!(db_path.exists());
    assert_eq!(registry.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_create_and_get_roadmap() {
    let (_temp_dir, registry) = create_test_registry().await;

    let saved = registry
        .create_roadmap(&create_params(version_one()))
        .await
        .expect("Failed to create roadmap");

    let loaded = registry
        .get_roadmap(&Id { id: saved.id })
        .await
        .expect("Failed to get roadmap")
        .expect("Roadmap should exist");

    assert_eq!(loaded.roadmap, version_one());
    assert_eq!(loaded.status, RoadmapStatus::Active);
}

#[tokio::test]
async fn test_list_roadmaps_summary_active_and_archived() {
    let (_temp_dir, registry) = create_test_registry().await;

    let first = registry
        .create_roadmap(&create_params(version_one()))
        .await
        .expect("Failed to create roadmap");
    registry
        .create_roadmap(&create_params(version_two()))
        .await
        .expect("Failed to create roadmap");

    registry
        .archive_roadmap(&Id { id: first.id })
        .await
        .expect("Failed to archive roadmap")
        .expect("Roadmap should exist");

    let active = registry
        .list_roadmaps_summary(&ListRoadmaps::default())
        .await
        .expect("Failed to list roadmaps");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].total_phases, 2);
    assert_eq!(active[0].total_tasks, 2);

    let archived = registry
        .list_roadmaps_summary(&ListRoadmaps {
            archived: true,
            ..Default::default()
        })
        .await
        .expect("Failed to list archived roadmaps");
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].id, first.id);

    let restored = registry
        .unarchive_roadmap(&Id { id: first.id })
        .await
        .expect("Failed to unarchive roadmap")
        .expect("Roadmap should exist");
    assert_eq!(restored.status, RoadmapStatus::Active);
}

#[tokio::test]
async fn test_list_roadmaps_summary_by_title() {
    let (_temp_dir, registry) = create_test_registry().await;

    let platform = registry
        .create_roadmap(&create_params(version_one()))
        .await
        .expect("Failed to create roadmap");
    registry
        .create_roadmap(&create_params(Roadmap::new("Marketing 50% push")))
        .await
        .expect("Failed to create roadmap");

    let by_title = |title: &str| ListRoadmaps {
        title: Some(title.to_string()),
        ..Default::default()
    };

    let matching = registry
        .list_roadmaps_summary(&by_title("PLAT"))
        .await
        .expect("Failed to list roadmaps");
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, platform.id);

    // Wildcard characters match literally
    let literal = registry
        .list_roadmaps_summary(&by_title("50%"))
        .await
        .expect("Failed to list roadmaps");
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].title, "Marketing 50% push");

    let percent_only = registry
        .list_roadmaps_summary(&by_title("%"))
        .await
        .expect("Failed to list roadmaps");
    assert_eq!(percent_only.len(), 1);

    let blank = registry
        .list_roadmaps_summary(&by_title("  "))
        .await
        .expect("Failed to list roadmaps");
    assert_eq!(blank.len(), 2);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, registry) = create_test_registry().await;
    let saved = registry
        .create_roadmap(&create_params(version_one()))
        .await
        .expect("Failed to create roadmap");

    let result = registry
        .delete_roadmap(&DeleteRoadmap {
            id: saved.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(
        result,
        Err(WaypointError::InvalidInput { ref field, .. }) if field == "confirmed"
    ));

    let deleted = registry
        .delete_roadmap(&DeleteRoadmap {
            id: saved.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete roadmap")
        .expect("Roadmap should have existed");
    assert_eq!(deleted.id, saved.id);

    let gone = registry
        .get_roadmap(&Id { id: saved.id })
        .await
        .expect("Failed to get roadmap");
    assert!(gone.is_none());
}

#[tokio::test]
async fn test_delete_missing_roadmap_returns_none() {
    let (_temp_dir, registry) = create_test_registry().await;
    let deleted = registry
        .delete_roadmap(&DeleteRoadmap {
            id: 42,
            confirmed: true,
        })
        .await
        .expect("Delete of unknown ID should not fail");
    assert!(deleted.is_none());
}

#[tokio::test]
async fn test_compare_stored_roadmaps() {
    let (_temp_dir, registry) = create_test_registry().await;
    let v1 = registry
        .create_roadmap(&create_params(version_one()))
        .await
        .expect("Failed to create roadmap");
    let v2 = registry
        .create_roadmap(&create_params(version_two()))
        .await
        .expect("Failed to create roadmap");

    let report = registry
        .compare_roadmaps(&CompareRoadmaps {
            before_id: v1.id,
            after_id: v2.id,
        })
        .await
        .expect("Failed to compare roadmaps");

    assert_eq!(report.before_label, format!("#{} Platform", v1.id));
    assert_eq!(report.after_label, format!("#{} Platform", v2.id));
    assert_eq!(report.result.added_phases[0].name, "Launch");
    assert_eq!(report.result.removed_phases[0].name, "Pilot");

    let build = report.result.modified("Build").expect("Build should change");
    assert_eq!(build.task_changes.added, vec!["ui".to_string()]);
    assert!(!report.result.summary_changed);

    assert_eq!(report.metrics.phases_unchanged, 0);
    assert!(report
        .outcomes()
        .iter()
        .any(|(name, outcome)| name == "Build" && *outcome == PhaseOutcome::Modified));
}

#[tokio::test]
async fn test_compare_with_missing_roadmap() {
    let (_temp_dir, registry) = create_test_registry().await;
    let v1 = registry
        .create_roadmap(&create_params(version_one()))
        .await
        .expect("Failed to create roadmap");

    let err = registry
        .compare_roadmaps(&CompareRoadmaps {
            before_id: v1.id,
            after_id: 99,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WaypointError::RoadmapNotFound { id: 99 }));
}

#[tokio::test]
async fn test_roadmap_timeline() {
    let (_temp_dir, registry) = create_test_registry().await;
    let saved = registry
        .create_roadmap(&create_params(version_two()))
        .await
        .expect("Failed to create roadmap");

    let timeline = registry
        .roadmap_timeline(&Id { id: saved.id })
        .await
        .expect("Failed to estimate timeline");

    assert_eq!(timeline.entries.len(), 2);
    assert_eq!(timeline.entries[1].start_month, 1.0);
    assert_eq!(timeline.total_months, 3.0);

    let missing = registry.roadmap_timeline(&Id { id: 7 }).await;
    assert!(matches!(missing, Err(WaypointError::RoadmapNotFound { id: 7 })));
}
