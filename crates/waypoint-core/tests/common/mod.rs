use waypoint_core::{
    models::{Phase, Priority, Roadmap},
    Registry, RegistryBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test registry
#[allow(dead_code)]
pub async fn create_test_registry() -> (TempDir, Registry) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let registry = RegistryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create registry");
    (temp_dir, registry)
}

/// The Q1 plan used across integration tests
#[allow(dead_code)]
pub fn q1_roadmap() -> Roadmap {
    Roadmap::new("Mobile App")
        .with_summary("Ship the first public release")
        .with_phase(
            Phase::new("Design")
                .with_priority(Priority::High)
                .with_duration("4 weeks")
                .with_description("Wireframes and visual design")
                .with_tasks(["wireframes", "style guide"]),
        )
        .with_phase(
            Phase::new("Development")
                .with_duration("3 months")
                .with_tasks(["auth", "feed", "settings"])
                .with_dependencies(["Design"]),
        )
        .with_phase(
            Phase::new("Beta")
                .with_priority(Priority::Low)
                .with_duration("2 weeks")
                .with_tasks(["testflight"])
                .with_dependencies(["Development"]),
        )
}

/// The Q2 revision of [`q1_roadmap`]
#[allow(dead_code)]
pub fn q2_roadmap() -> Roadmap {
    Roadmap::new("Mobile App")
        .with_summary("Ship the first public release and grow")
        .with_phase(
            Phase::new("Design")
                .with_priority(Priority::High)
                .with_duration("4 weeks")
                .with_description("Wireframes and visual design")
                .with_tasks(["style guide", "wireframes"]),
        )
        .with_phase(
            Phase::new("Development")
                .with_priority(Priority::High)
                .with_duration("4 months")
                .with_tasks(["auth", "feed", "payments"])
                .with_dependencies(["Design"]),
        )
        .with_phase(
            Phase::new("Launch")
                .with_duration("1 month")
                .with_tasks(["store listing", "press"])
                .with_dependencies(["Development"]),
        )
}
