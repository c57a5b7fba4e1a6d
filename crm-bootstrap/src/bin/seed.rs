//! Seed the provisioned CRM databases with sample content.
use tracing::{error, info};

use crm_bootstrap::{Config, SeedError, SeedOrchestrator};
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
        error!("content seeding failed: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SeedError> {
    let config = Config::from_env()?;
    config.log_summary();

    let api = ApiSource::live(config.notion_token.clone()).into_api();
    let workspace = Workspace::new(api, config.root_page_id.clone(), config.ids_path.clone());
    let orchestrator = SeedOrchestrator::new(workspace, config);
    let summary = orchestrator.run().await?;

    info!("=====================================");
    info!("Seeded content");
    info!("research projects: {}", summary.projects);
    info!("companies: {}", summary.companies);
    info!("contacts: {}", summary.contacts);
    info!("interviews: {}", summary.interviews);
    info!("insights: {}", summary.insights);
    info!(
        "tasks: {} created, {} already present",
        summary.tasks_created, summary.tasks_skipped
    );
    info!("=====================================");
    Ok(())
}
