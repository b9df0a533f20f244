use std::collections::HashSet;

use super::*;

fn names(phases: &[Phase]) -> Vec<&str> {
    phases.iter().map(|phase| phase.name.as_str()).collect()
}

fn sample_roadmap() -> Roadmap {
    Roadmap::new("Platform")
        .with_summary("v1 plan")
        .with_phase(
            Phase::new("Discovery")
                .with_priority(Priority::High)
                .with_duration("3 weeks")
                .with_description("Interview users")
                .with_tasks(["interviews", "survey"]),
        )
        .with_phase(
            Phase::new("Build")
                .with_duration("2 months")
                .with_tasks(["api", "ui", "docs"])
                .with_dependencies(["Discovery"]),
        )
        .with_phase(
            Phase::new("Launch")
                .with_priority(Priority::Low)
                .with_tasks(["announce"])
                .with_dependencies(["Build"]),
        )
}

fn revised_roadmap() -> Roadmap {
    Roadmap::new("Platform")
        .with_summary("v2 plan")
        .with_phase(
            Phase::new("Build")
                .with_duration("10 weeks")
                .with_tasks(["ui", "api", "billing"])
                .with_dependencies(["Research"]),
        )
        .with_phase(Phase::new("Research").with_tasks(["survey", "benchmarks"]))
        .with_phase(
            Phase::new("Launch")
                .with_priority(Priority::Low)
                .with_tasks(["announce"])
                .with_dependencies(["Build"]),
        )
        .with_phase(Phase::new("Scale").with_priority(Priority::High))
}

#[test]
fn test_scenario_priority_and_task_added() {
    let before = Roadmap::new("R").with_phase(
        Phase::new("A")
            .with_priority(Priority::Low)
            .with_tasks(["t1"]),
    );
    let after = Roadmap::new("R").with_phase(
        Phase::new("A")
            .with_priority(Priority::High)
            .with_tasks(["t1", "t2"]),
    );

    let result = compare(&before, &after);

    assert!(result.added_phases.is_empty());
    assert!(result.removed_phases.is_empty());
    assert_eq!(
        result.modified_phases,
        vec![PhaseChange {
            name: "A".to_string(),
            priority_changed: Some(FieldChange {
                from: Priority::Low,
                to: Priority::High,
            }),
            duration_changed: None,
            description_changed: false,
            task_changes: SetChanges {
                added: vec!["t2".to_string()],
                removed: vec![],
            },
            dependency_changes: SetChanges::default(),
        }]
    );
    assert!(!result.summary_changed);
}

#[test]
fn test_scenario_phase_removed() {
    let before = Roadmap::new("R")
        .with_phase(Phase::new("A"))
        .with_phase(Phase::new("B"));
    let after = Roadmap::new("R").with_phase(Phase::new("B"));

    let result = compare(&before, &after);

    assert_eq!(result.removed_phases, vec![Phase::new("A")]);
    assert!(result.added_phases.is_empty());
    assert!(result.modified_phases.is_empty());
}

#[test]
fn test_scenario_summary_only() {
    let before = sample_roadmap().with_summary("v1 plan");
    let after = sample_roadmap().with_summary("v2 plan");

    let result = compare(&before, &after);

    assert!(result.summary_changed);
    assert!(result.added_phases.is_empty());
    assert!(result.removed_phases.is_empty());
    assert!(result.modified_phases.is_empty());
}

#[test]
fn test_scenario_empty_roadmaps() {
    let result = compare(&Roadmap::default(), &Roadmap::default());
    assert_eq!(result, ComparisonResult::default());
    assert!(result.is_unchanged());
}

#[test]
fn test_identity() {
    for roadmap in [sample_roadmap(), revised_roadmap(), Roadmap::default()] {
        let result = compare(&roadmap, &roadmap);
        assert!(result.is_unchanged(), "compare(R, R) changed: {result:?}");
    }
}

#[test]
fn test_added_removed_symmetry() {
    let (a, b) = (sample_roadmap(), revised_roadmap());
    let forward = compare(&a, &b);
    let backward = compare(&b, &a);

    let set = |phases: &[Phase]| -> HashSet<String> {
        phases.iter().map(|phase| phase.name.clone()).collect()
    };
    assert_eq!(set(&forward.added_phases), set(&backward.removed_phases));
    assert_eq!(set(&forward.removed_phases), set(&backward.added_phases));
}

#[test]
fn test_every_name_lands_in_exactly_one_bucket() {
    let (before, after) = (sample_roadmap(), revised_roadmap());
    let result = compare(&before, &after);
    let outcomes = result.outcomes(&after);

    let all_names: HashSet<&str> = before
        .phases
        .iter()
        .chain(after.phases.iter())
        .map(|phase| phase.name.as_str())
        .collect();
    assert_eq!(outcomes.len(), all_names.len());

    let reported: HashSet<&str> = outcomes.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(reported, all_names);

    let lookup = |name: &str| {
        outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| *outcome)
    };
    assert_eq!(lookup("Discovery"), Some(PhaseOutcome::Removed));
    assert_eq!(lookup("Research"), Some(PhaseOutcome::Added));
    assert_eq!(lookup("Scale"), Some(PhaseOutcome::Added));
    assert_eq!(lookup("Build"), Some(PhaseOutcome::Modified));
    assert_eq!(lookup("Launch"), Some(PhaseOutcome::Unchanged));
}

#[test]
fn test_task_diff_is_disjoint_from_sources() {
    let (before, after) = (sample_roadmap(), revised_roadmap());
    let result = compare(&before, &after);

    for change in &result.modified_phases {
        let old = before.phase(&change.name).unwrap();
        let new = after.phase(&change.name).unwrap();
        for task in &change.task_changes.added {
            assert!(!old.tasks.contains(task));
        }
        for task in &change.task_changes.removed {
            assert!(!new.tasks.contains(task));
        }
    }
}

#[test]
fn test_modified_phase_reports_every_field() {
    let result = compare(&sample_roadmap(), &revised_roadmap());
    let build = result.modified("Build").expect("Build should be modified");

    assert_eq!(build.priority_changed, None);
    assert_eq!(
        build.duration_changed,
        Some(FieldChange {
            from: "2 months".to_string(),
            to: "10 weeks".to_string(),
        })
    );
    assert!(!build.description_changed);
    assert_eq!(build.task_changes.added, vec!["billing".to_string()]);
    assert_eq!(build.task_changes.removed, vec!["docs".to_string()]);
    assert_eq!(build.dependency_changes.added, vec!["Research".to_string()]);
    assert_eq!(build.dependency_changes.removed, vec!["Discovery".to_string()]);
}

#[test]
fn test_task_reordering_is_not_a_change() {
    let before = Roadmap::new("R").with_phase(Phase::new("A").with_tasks(["x", "y", "z"]));
    let after = Roadmap::new("R").with_phase(Phase::new("A").with_tasks(["z", "x", "y"]));
    assert!(compare(&before, &after).is_unchanged());
}

#[test]
fn test_string_comparisons_are_exact() {
    let before = Roadmap::new("R").with_phase(
        Phase::new("A")
            .with_description("Ship it")
            .with_duration("2 months")
            .with_tasks(["Deploy"]),
    );
    let after = Roadmap::new("R").with_phase(
        Phase::new("A")
            .with_description("ship it")
            .with_duration("2 months ")
            .with_tasks(["deploy"]),
    );

    let result = compare(&before, &after);
    let change = result.modified("A").unwrap();
    assert!(change.description_changed);
    assert!(change.duration_changed.is_some());
    assert_eq!(change.task_changes.added, vec!["deploy".to_string()]);
    assert_eq!(change.task_changes.removed, vec!["Deploy".to_string()]);

    let renamed = Roadmap::new("R").with_phase(Phase::new("a"));
    let result = compare(&Roadmap::new("R").with_phase(Phase::new("A")), &renamed);
    assert_eq!(names(&result.added_phases), vec!["a"]);
    assert_eq!(names(&result.removed_phases), vec!["A"]);
}

#[test]
fn test_added_and_removed_follow_source_order() {
    let before = Roadmap::new("R")
        .with_phase(Phase::new("Zeta"))
        .with_phase(Phase::new("Keep"))
        .with_phase(Phase::new("Alpha"));
    let after = Roadmap::new("R")
        .with_phase(Phase::new("Omega"))
        .with_phase(Phase::new("Keep"))
        .with_phase(Phase::new("Beta"));

    let result = compare(&before, &after);
    assert_eq!(names(&result.removed_phases), vec!["Zeta", "Alpha"]);
    assert_eq!(names(&result.added_phases), vec!["Omega", "Beta"]);
}

#[test]
fn test_duplicate_names_last_occurrence_wins() {
    let before = Roadmap::new("R")
        .with_phase(Phase::new("A").with_duration("1 month"))
        .with_phase(Phase::new("B"))
        .with_phase(Phase::new("A").with_duration("2 months"));
    let after = Roadmap::new("R")
        .with_phase(Phase::new("A").with_duration("2 months"))
        .with_phase(Phase::new("C"))
        .with_phase(Phase::new("C").with_tasks(["t"]));

    let result = compare(&before, &after);

    assert!(result.modified("A").is_none());
    assert_eq!(names(&result.removed_phases), vec!["B"]);
    assert_eq!(result.added_phases.len(), 1);
    assert_eq!(result.added_phases[0].tasks, vec!["t".to_string()]);
}

#[test]
fn test_repeated_tasks_reported_once() {
    let changes = SetChanges::between(
        &["a".to_string()],
        &["a".to_string(), "b".to_string(), "b".to_string()],
    );
    assert_eq!(changes.added, vec!["b".to_string()]);
    assert!(changes.removed.is_empty());
}

#[test]
fn test_missing_dependencies_equal_empty() {
    let before: Roadmap =
        serde_json::from_str(r#"{"phases": [{"name": "A", "dependencies": []}]}"#).unwrap();
    let after: Roadmap = serde_json::from_str(r#"{"phases": [{"name": "A"}]}"#).unwrap();
    assert!(compare(&before, &after).is_unchanged());
}

#[test]
fn test_inputs_are_left_untouched() {
    let (before, after) = (sample_roadmap(), revised_roadmap());
    let (before_copy, after_copy) = (before.clone(), after.clone());
    let first = compare(&before, &after);
    let second = compare(&before, &after);
    assert_eq!(before, before_copy);
    assert_eq!(after, after_copy);
    assert_eq!(first, second);
}

#[test]
fn test_result_serializes_without_absent_changes() {
    let before = Roadmap::new("R").with_phase(Phase::new("A").with_description("old"));
    let after = Roadmap::new("R").with_phase(Phase::new("A").with_description("new"));
    let json = serde_json::to_value(compare(&before, &after)).unwrap();

    let change = &json["modified_phases"][0];
    assert_eq!(change["description_changed"], true);
    assert!(change.get("priority_changed").is_none());
    assert!(change.get("duration_changed").is_none());
}
