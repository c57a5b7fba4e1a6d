//! End-to-end seeding runs against the in-memory mock workspace.
//!
//! Run with: `cargo test --test seed_flow`
use std::path::Path;

use crm_bootstrap::{catalog, Config, ProvisionOrchestrator, SeedError, SeedOrchestrator};
use notion::{MockNotionClient, Workspace};
use notion_types::WorkspaceIds;

fn test_config(dir: &Path) -> Config {
    Config {
        notion_token: "secret-token".to_string(),
        root_page_id: "root-page".to_string(),
        include_tasks_db: true,
        include_dashboard: true,
        ids_path: dir.join("notion-ids.json"),
    }
}

fn workspace_over(mock: &MockNotionClient, config: &Config) -> Workspace {
    Workspace::new(
        Box::new(mock.clone()),
        config.root_page_id.clone(),
        config.ids_path.clone(),
    )
}

async fn provision(mock: &MockNotionClient, config: &Config) -> WorkspaceIds {
    ProvisionOrchestrator::new(workspace_over(mock, config), config.clone())
        .run()
        .await
        .unwrap()
}

#[tokio::test]
async fn seeding_without_prior_provisioning_fails_fast() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let orchestrator = SeedOrchestrator::new(workspace_over(&mock, &config), config);

    let error = orchestrator.run().await.unwrap_err();
    assert!(matches!(error, SeedError::MissingState(_)));
    assert_eq!(mock.page_create_calls(), 0);
}

#[tokio::test]
async fn seeding_creates_the_sample_records() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let ids = provision(&mock, &config).await;

    let orchestrator = SeedOrchestrator::new(workspace_over(&mock, &config), config);
    let summary = orchestrator.run().await.unwrap();

    assert_eq!(summary.projects, 1);
    assert_eq!(summary.companies, 2);
    assert_eq!(summary.contacts, 3);
    assert_eq!(summary.interviews, 2);
    assert_eq!(summary.insights, 2);
    assert_eq!(summary.tasks_created, 3);
    assert_eq!(summary.tasks_skipped, 0);

    let record_count =
        |name: &str| mock.record_count(&ids.database(name).unwrap().id);
    assert_eq!(record_count(catalog::RESEARCH_PROJECTS), 1);
    assert_eq!(record_count(catalog::COMPANIES), 2);
    assert_eq!(record_count(catalog::CONTACTS), 3);
    assert_eq!(record_count(catalog::INTERVIEWS), 2);
    assert_eq!(record_count(catalog::INSIGHTS), 2);
    assert_eq!(record_count(catalog::TASKS), 3);
}

#[tokio::test]
async fn reseeding_does_not_duplicate_tasks() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let ids = provision(&mock, &config).await;
    let tasks_id = ids.database(catalog::TASKS).unwrap().id.clone();

    let first = SeedOrchestrator::new(workspace_over(&mock, &config), config.clone());
    first.run().await.unwrap();
    let after_first = mock.record_count(&tasks_id);

    let second = SeedOrchestrator::new(workspace_over(&mock, &config), config);
    let summary = second.run().await.unwrap();
    let after_second = mock.record_count(&tasks_id);

    // The query-before-create guard suppresses every second insert.
    assert_eq!(after_first, 3);
    assert_eq!(after_second, after_first);
    assert_eq!(summary.tasks_created, 0);
    assert_eq!(summary.tasks_skipped, 3);
}

#[tokio::test]
async fn tasks_are_skipped_when_flagged_off() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.include_tasks_db = false;
    provision(&mock, &config).await;

    let orchestrator = SeedOrchestrator::new(workspace_over(&mock, &config), config);
    let summary = orchestrator.run().await.unwrap();

    assert_eq!(summary.tasks_created, 0);
    assert_eq!(summary.tasks_skipped, 0);
}
