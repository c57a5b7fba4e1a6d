//! The seeding orchestrator.
//!
//! Populates a provisioned workspace with interlinked sample records.
//! Records are created in dependency order (project, companies,
//! contacts, interviews, insights, tasks) because each later record
//! references page ids returned by earlier creations. Task creation is
//! guarded by a query-before-create check so reruns do not duplicate.
use tracing::info;

use notion::Workspace;
use notion_types::{DatabaseInfo, Filter, PageInfo, WorkspaceIds};

use crate::catalog;
use crate::config::Config;
use crate::content;
use crate::errors::SeedError;

/// What a seeding run produced, for the final summary and for tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub companies: usize,
    pub contacts: usize,
    pub interviews: usize,
    pub insights: usize,
    pub tasks_created: usize,
    pub tasks_skipped: usize,
}

pub struct SeedOrchestrator {
    workspace: Workspace,
    config: Config,
}

impl SeedOrchestrator {
    pub fn new(workspace: Workspace, config: Config) -> Self {
        Self { workspace, config }
    }

    pub async fn run(&self) -> Result<SeedSummary, SeedError> {
        info!("starting content seeding");
        let ids = self.workspace.load_ids().ok_or_else(|| {
            SeedError::MissingState(self.workspace.ids_path().display().to_string())
        })?;
        let mut summary = SeedSummary::default();

        info!("creating sample research project");
        let projects_db = database(&ids, catalog::RESEARCH_PROJECTS)?;
        let project = self
            .workspace
            .create_record(&projects_db.id, &content::research_project_values(), &[])
            .await?;
        summary.projects += 1;

        info!("creating sample companies");
        let companies_db = database(&ids, catalog::COMPANIES)?;
        let anthropic = self
            .workspace
            .create_record(&companies_db.id, &content::anthropic_company_values(), &[])
            .await?;
        let openai = self
            .workspace
            .create_record(&companies_db.id, &content::openai_company_values(), &[])
            .await?;
        summary.companies += 2;

        info!("creating sample contacts");
        let contacts_db = database(&ids, catalog::CONTACTS)?;
        let sarah = self
            .workspace
            .create_record(
                &contacts_db.id,
                &content::contact_values(&content::SARAH_CHEN, &anthropic.id),
                &[],
            )
            .await?;
        let alex = self
            .workspace
            .create_record(
                &contacts_db.id,
                &content::contact_values(&content::ALEX_RODRIGUEZ, &anthropic.id),
                &[],
            )
            .await?;
        let maria = self
            .workspace
            .create_record(
                &contacts_db.id,
                &content::contact_values(&content::MARIA_GONZALEZ, &openai.id),
                &[],
            )
            .await?;
        summary.contacts += 3;

        info!("creating sample interviews");
        let interviews_db = database(&ids, catalog::INTERVIEWS)?;
        let deep_dive = self
            .workspace
            .create_record(
                &interviews_db.id,
                &content::deep_dive_interview_values(&sarah.id, &anthropic.id, &project.id),
                &content::interview_agenda_blocks(),
            )
            .await?;
        let strategy = self
            .workspace
            .create_record(
                &interviews_db.id,
                &content::product_strategy_interview_values(&alex.id, &anthropic.id, &project.id),
                &[],
            )
            .await?;
        summary.interviews += 2;

        info!("creating sample insights");
        let insights_db = database(&ids, catalog::INSIGHTS)?;
        self.workspace
            .create_record(
                &insights_db.id,
                &content::tool_integration_insight_values(&strategy.id),
                &[],
            )
            .await?;
        self.workspace
            .create_record(
                &insights_db.id,
                &content::multi_agent_insight_values(&deep_dive.id),
                &[],
            )
            .await?;
        summary.insights += 2;

        if self.config.include_tasks_db {
            if let Some(tasks_db) = ids.database(catalog::TASKS) {
                info!("creating sample tasks");
                let interviews = [Some(&deep_dive), Some(&strategy), None];
                let contacts = [&sarah, &alex, &maria];
                for ((task, interview), contact) in
                    content::SAMPLE_TASKS.iter().zip(interviews).zip(contacts)
                {
                    let created = self
                        .seed_task(tasks_db, task, interview, contact)
                        .await?;
                    if created {
                        summary.tasks_created += 1;
                    } else {
                        summary.tasks_skipped += 1;
                    }
                }
            } else {
                info!("tasks database not in the workspace ids, skipping task seeding");
            }
        }

        info!("content seeding complete");
        Ok(summary)
    }

    /// Create one sample task unless an identical one already exists.
    ///
    /// The idempotency key is the task title plus, when the task links
    /// an interview, a relation-containment clause on that interview.
    async fn seed_task(
        &self,
        tasks_db: &DatabaseInfo,
        task: &content::SampleTask,
        interview: Option<&PageInfo>,
        contact: &PageInfo,
    ) -> Result<bool, SeedError> {
        let filter = match interview {
            Some(page) => Filter::and(vec![
                Filter::title_equals("Task", task.title),
                Filter::relation_contains("Interview", &page.id),
            ]),
            None => Filter::title_equals("Task", task.title),
        };
        let existing = self.workspace.query(&tasks_db.id, &filter).await?;
        if !existing.is_empty() {
            info!("task \"{}\" already exists, skipping", task.title);
            return Ok(false);
        }

        let values = content::task_values(task, interview.map(|page| page.id.as_str()), &contact.id);
        self.workspace.create_record(&tasks_db.id, &values, &[]).await?;
        Ok(true)
    }
}

fn database<'a>(ids: &'a WorkspaceIds, name: &str) -> Result<&'a DatabaseInfo, SeedError> {
    ids.database(name)
        .ok_or_else(|| SeedError::MissingDatabase(name.to_string()))
}
