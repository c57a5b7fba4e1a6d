//! End-to-end provisioning runs against the in-memory mock workspace.
//!
//! Run with: `cargo test --test provision_flow`
use std::path::Path;

use crm_bootstrap::provision::verify;
use crm_bootstrap::{catalog, Config, ProvisionError, ProvisionOrchestrator};
use notion::{MockNotionClient, NotionApi, NotionError, Workspace};
use notion_types::{PropertyMap, PropertySpec, RollupFunction};

fn test_config(dir: &Path, include_tasks: bool, include_dashboard: bool) -> Config {
    Config {
        notion_token: "secret-token".to_string(),
        root_page_id: "root-page".to_string(),
        include_tasks_db: include_tasks,
        include_dashboard,
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

#[tokio::test]
async fn empty_workspace_yields_six_databases_and_a_dashboard() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), true, true);
    let orchestrator = ProvisionOrchestrator::new(workspace_over(&mock, &config), config);

    let ids = orchestrator.run().await.unwrap();

    assert_eq!(ids.databases.len(), 6);
    for name in catalog::expected_databases(true) {
        let database = ids.database(name).unwrap();
        assert!(!database.id.is_empty(), "{name} has no id");
        assert!(!database.url.is_empty(), "{name} has no url");
    }
    let dashboard = &ids.pages[catalog::DASHBOARD_PAGE];
    assert!(!dashboard.id.is_empty());
    assert!(!dashboard.url.is_empty());
}

#[tokio::test]
async fn self_relation_targets_its_own_database() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), false, false);
    let orchestrator = ProvisionOrchestrator::new(workspace_over(&mock, &config), config);

    let ids = orchestrator.run().await.unwrap();

    let contacts_id = &ids.database(catalog::CONTACTS).unwrap().id;
    let contacts = mock.database_by_title(catalog::CONTACTS).unwrap();
    let referral = &contacts.properties["Referral Source"];
    let relation = referral.relation.as_ref().unwrap();
    assert_eq!(&relation.database_id, contacts_id);
    assert!(!relation.database_id.is_empty());
}

#[tokio::test]
async fn rerun_skips_existing_databases() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), true, true);

    let first = ProvisionOrchestrator::new(workspace_over(&mock, &config), config.clone());
    let first_ids = first.run().await.unwrap();
    assert_eq!(mock.database_create_calls(), 6);

    let second = ProvisionOrchestrator::new(workspace_over(&mock, &config), config);
    let second_ids = second.run().await.unwrap();

    // One underlying create per database across both runs, and the
    // same identifiers both times.
    assert_eq!(mock.database_create_calls(), 6);
    assert_eq!(mock.standalone_page_count(), 1);
    for name in catalog::expected_databases(true) {
        assert_eq!(
            first_ids.database(name).unwrap().id,
            second_ids.database(name).unwrap().id
        );
    }
}

#[tokio::test]
async fn flags_off_produces_five_databases_and_no_dashboard() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), false, false);
    let orchestrator = ProvisionOrchestrator::new(workspace_over(&mock, &config), config);

    let ids = orchestrator.run().await.unwrap();

    assert_eq!(ids.databases.len(), 5);
    assert!(ids.database(catalog::TASKS).is_none());
    assert!(ids.pages.is_empty());
    assert_eq!(mock.standalone_page_count(), 0);
}

#[tokio::test]
async fn provisioning_persists_ids_that_reload_identically() {
    let mock = MockNotionClient::new();
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), true, true);
    let workspace = workspace_over(&mock, &config);
    let orchestrator =
        ProvisionOrchestrator::new(workspace_over(&mock, &config), config.clone());

    let ids = orchestrator.run().await.unwrap();
    let reloaded = workspace.load_ids().unwrap();
    assert_eq!(reloaded, ids);
}

#[tokio::test]
async fn rollups_cannot_reference_unresolved_relations() {
    // The mock enforces the server invariant the step ordering exists
    // for: attaching a rollup whose relation property id has not been
    // resolved from live state fails.
    let mock = MockNotionClient::new();
    let properties = PropertyMap::from([("Name".to_string(), PropertySpec::Title {})]);
    let database = mock
        .create_database("root-page", "Companies", &properties)
        .await
        .unwrap();

    let premature = PropertyMap::from([(
        "Total Contacts".to_string(),
        PropertySpec::rollup("unresolved", "title", RollupFunction::Count),
    )]);
    let result = mock.update_database(&database.id, &premature).await;
    assert!(matches!(result, Err(NotionError::InvalidRequest(_))));
}

#[tokio::test]
async fn verification_error_surfaces_from_a_doctored_map() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), true, true);

    let mock = MockNotionClient::new();
    let orchestrator =
        ProvisionOrchestrator::new(workspace_over(&mock, &config), config.clone());
    let mut ids = orchestrator.run().await.unwrap();

    ids.databases.remove(catalog::TASKS);
    let error = verify(&ids, &config).unwrap_err();
    match error {
        ProvisionError::Verification { missing } => {
            assert_eq!(missing, vec![catalog::TASKS.to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
