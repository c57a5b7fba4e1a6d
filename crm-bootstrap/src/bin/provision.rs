//! Provision the CRM databases, dashboard page and identifier map.
use tracing::{error, info};

use crm_bootstrap::{Config, ProvisionError, ProvisionOrchestrator};
use notion::{ApiSource, Workspace};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    if let Err(error) = run().await {
        error!("provisioning failed: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ProvisionError> {
    let config = Config::from_env()?;
    config.log_summary();

    let api = ApiSource::live(config.notion_token.clone()).into_api();
    let workspace = Workspace::new(api, config.root_page_id.clone(), config.ids_path.clone());
    let orchestrator = ProvisionOrchestrator::new(workspace, config);
    let ids = orchestrator.run().await?;

    info!("=====================================");
    info!("Provisioning complete");
    for (name, database) in &ids.databases {
        info!("database {}: {}", name, database.url);
    }
    for (name, page) in &ids.pages {
        info!("page {}: {}", name, page.url);
    }
    info!("=====================================");
    Ok(())
}
