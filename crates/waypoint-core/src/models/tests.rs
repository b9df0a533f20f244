use jiff::Timestamp;

use super::*;
use crate::error::WaypointError;

fn saved(roadmap: Roadmap) -> SavedRoadmap {
    SavedRoadmap {
        id: 7,
        status: RoadmapStatus::Active,
        created_at: Timestamp::from_second(1640995200).unwrap(),
        updated_at: Timestamp::from_second(1641081600).unwrap(),
        roadmap,
    }
}

#[test]
fn test_priority_parsing() {
    assert_eq!("low".parse::<Priority>(), Ok(Priority::Low));
    assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
    assert_eq!(" Medium ".parse::<Priority>(), Ok(Priority::Medium));
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn test_roadmap_status_round_trip_through_str() {
    for status in [RoadmapStatus::Active, RoadmapStatus::Archived] {
        assert_eq!(status.as_str().parse::<RoadmapStatus>(), Ok(status));
    }
}

#[test]
fn test_phase_deserializes_with_defaults() {
    let phase: Phase = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
    assert_eq!(phase.name, "A");
    assert_eq!(phase.priority, Priority::Medium);
    assert!(phase.description.is_empty());
    assert!(phase.duration.is_empty());
    assert!(phase.tasks.is_empty());
    assert!(phase.dependencies.is_empty());
}

#[test]
fn test_null_lists_deserialize_as_empty() {
    let phase: Phase =
        serde_json::from_str(r#"{"name": "A", "tasks": null, "dependencies": null}"#).unwrap();
    assert!(phase.tasks.is_empty());
    assert!(phase.dependencies.is_empty());

    let roadmap: Roadmap = serde_json::from_str(r#"{"title": "R", "phases": null}"#).unwrap();
    assert!(roadmap.phases.is_empty());

    assert!(serde_json::from_str::<Phase>(r#"{"name": "A", "tasks": "t1"}"#).is_err());
}

#[test]
fn test_roadmap_deserializes_without_phases() {
    let roadmap: Roadmap = serde_json::from_str(r#"{"title": "Empty"}"#).unwrap();
    assert_eq!(roadmap.summary, "");
    assert!(roadmap.phases.is_empty());
}

#[test]
fn test_phase_omits_empty_dependencies_when_serialized() {
    let json = serde_json::to_value(Phase::new("A")).unwrap();
    assert!(json.get("dependencies").is_none());
    assert_eq!(json["priority"], "medium");
}

#[test]
fn test_validate_rejects_duplicate_phase_names() {
    let roadmap = Roadmap::new("Dupes")
        .with_phase(Phase::new("A"))
        .with_phase(Phase::new("B"))
        .with_phase(Phase::new("A"));

    match roadmap.validate() {
        Err(WaypointError::InvalidInput { field, reason }) => {
            assert_eq!(field, "phases");
            assert!(reason.contains("'A'"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_blank_title_and_phase_name() {
    assert!(Roadmap::new("  ").validate().is_err());
    assert!(Roadmap::new("T").with_phase(Phase::new("")).validate().is_err());
}

#[test]
fn test_phase_lookup_prefers_last_duplicate() {
    let roadmap = Roadmap::new("Dupes")
        .with_phase(Phase::new("A").with_duration("1 month"))
        .with_phase(Phase::new("A").with_duration("2 months"));
    assert_eq!(roadmap.phase("A").map(|p| p.duration.as_str()), Some("2 months"));
    assert!(roadmap.phase("B").is_none());
}

#[test]
fn test_summary_counts_phases_and_tasks() {
    let roadmap = Roadmap::new("Counts")
        .with_phase(Phase::new("A").with_tasks(["t1", "t2"]))
        .with_phase(Phase::new("B").with_tasks(["t3"]));
    let summary = RoadmapSummary::from(&saved(roadmap));
    assert_eq!(summary.id, 7);
    assert_eq!(summary.total_phases, 2);
    assert_eq!(summary.total_tasks, 3);
}

#[test]
fn test_saved_roadmap_flattens_document() {
    let json = serde_json::to_value(saved(Roadmap::new("Flat"))).unwrap();
    assert_eq!(json["title"], "Flat");
    assert_eq!(json["status"], "active");
    assert!(json.get("roadmap").is_none());
}
