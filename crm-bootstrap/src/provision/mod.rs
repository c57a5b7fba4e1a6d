//! The provisioning orchestrator.
//!
//! Brings the full database topology into existence in a
//! dependency-consistent order, idempotently. The ordering is the core
//! contract: every configuration that needs a server-assigned
//! identifier runs strictly after the step that produces it.
use tracing::info;

use notion::Workspace;
use notion_types::{DatabaseInfo, WorkspaceIds};

use crate::catalog;
use crate::config::Config;
use crate::content;
use crate::errors::ProvisionError;

/// Runs the ordered provisioning sequence against one workspace.
///
/// Steps are strictly sequential: each remote call's output (an id, a
/// resolved property id) feeds the next call's input. Any failure
/// aborts the run; completed remote state is left in place and a rerun
/// picks it up again through the create-or-get lookups.
pub struct ProvisionOrchestrator {
    workspace: Workspace,
    config: Config,
}

impl ProvisionOrchestrator {
    pub fn new(workspace: Workspace, config: Config) -> Self {
        Self { workspace, config }
    }

    pub async fn run(&self) -> Result<WorkspaceIds, ProvisionError> {
        info!("starting CRM workspace provisioning");
        let mut ids = WorkspaceIds::default();

        // Base databases, in an order where every creation-time
        // relation targets an already-created database.
        let companies = self
            .workspace
            .create_or_get_database(catalog::COMPANIES, &catalog::companies_properties())
            .await?;

        let contacts = self
            .workspace
            .create_or_get_database(
                catalog::CONTACTS,
                &catalog::contacts_properties(&companies.id),
            )
            .await?;
        // The self-relation could not be expressed at creation time;
        // patch it now that the database id exists.
        self.workspace
            .update_database(&contacts.id, &catalog::referral_source_patch(&contacts.id))
            .await?;

        let interviews = self
            .workspace
            .create_or_get_database(
                catalog::INTERVIEWS,
                &catalog::interviews_properties(&contacts.id, &companies.id),
            )
            .await?;

        let insights = self
            .workspace
            .create_or_get_database(
                catalog::INSIGHTS,
                &catalog::insights_properties(&interviews.id),
            )
            .await?;

        let projects = self
            .workspace
            .create_or_get_database(
                catalog::RESEARCH_PROJECTS,
                &catalog::research_projects_properties(&interviews.id, &insights.id),
            )
            .await?;

        ids.insert_database(catalog::COMPANIES, companies.clone());
        ids.insert_database(catalog::CONTACTS, contacts.clone());
        ids.insert_database(catalog::INTERVIEWS, interviews.clone());
        ids.insert_database(catalog::INSIGHTS, insights.clone());
        ids.insert_database(catalog::RESEARCH_PROJECTS, projects.clone());

        // Back-reference relations need both sides to exist.
        info!("adding back-reference relations");
        self.workspace
            .update_database(
                &companies.id,
                &catalog::company_backrefs(&contacts.id, &interviews.id),
            )
            .await?;
        self.workspace
            .update_database(&contacts.id, &catalog::contact_backrefs(&interviews.id))
            .await?;
        self.workspace
            .update_database(
                &interviews.id,
                &catalog::interview_backrefs(&insights.id, &projects.id),
            )
            .await?;

        // Rollups reference relation properties by server-assigned id,
        // so each attach is preceded by a resolve against live state.
        info!("attaching rollup properties");
        let company_contacts_rel = self
            .workspace
            .resolve_property_id(&companies.id, "Contacts")
            .await?;
        let company_interviews_rel = self
            .workspace
            .resolve_property_id(&companies.id, "Interviews")
            .await?;
        self.workspace
            .update_database(
                &companies.id,
                &catalog::company_rollups(&company_contacts_rel, &company_interviews_rel),
            )
            .await?;

        let contact_interviews_rel = self
            .workspace
            .resolve_property_id(&contacts.id, "Interviews")
            .await?;
        self.workspace
            .update_database(&contacts.id, &catalog::contact_rollups(&contact_interviews_rel))
            .await?;

        let project_interviews_rel = self
            .workspace
            .resolve_property_id(&projects.id, "Interviews")
            .await?;
        let completed_num_id = self
            .workspace
            .resolve_property_id(&interviews.id, "CompletedNum")
            .await?;
        self.workspace
            .update_database(
                &projects.id,
                &catalog::project_rollups(&project_interviews_rel, &completed_num_id),
            )
            .await?;

        if self.config.include_tasks_db {
            let tasks = self.provision_tasks(&interviews, &contacts).await?;
            ids.insert_database(catalog::TASKS, tasks);
        }

        if self.config.include_dashboard {
            info!("provisioning dashboard page");
            let dashboard = self
                .workspace
                .create_or_get_page(catalog::DASHBOARD_PAGE, &content::dashboard_blocks())
                .await?;
            ids.insert_page(catalog::DASHBOARD_PAGE, dashboard);
        }

        self.workspace.save_ids(&ids)?;

        verify(&ids, &self.config)?;
        info!("provisioning complete");
        Ok(ids)
    }

    /// The optional Tasks database, plus the Contacts-side relation and
    /// rollup. Same two-phase pattern: create the relation, resolve its
    /// server-assigned id, then attach the rollup.
    async fn provision_tasks(
        &self,
        interviews: &DatabaseInfo,
        contacts: &DatabaseInfo,
    ) -> Result<DatabaseInfo, ProvisionError> {
        let tasks = self
            .workspace
            .create_or_get_database(
                catalog::TASKS,
                &catalog::tasks_properties(&interviews.id, &contacts.id),
            )
            .await?;

        self.workspace
            .update_database(&contacts.id, &catalog::contact_tasks_backref(&tasks.id))
            .await?;
        let contact_tasks_rel = self
            .workspace
            .resolve_property_id(&contacts.id, "Tasks")
            .await?;
        self.workspace
            .update_database(&contacts.id, &catalog::contact_task_rollup(&contact_tasks_rel))
            .await?;

        Ok(tasks)
    }
}

/// Confirm that every expected database and the dashboard page made it
/// into the produced identifier map. A miss means an earlier step
/// silently no-op'd or a prior run aborted partway.
pub fn verify(ids: &WorkspaceIds, config: &Config) -> Result<(), ProvisionError> {
    let mut missing = Vec::new();
    for name in catalog::expected_databases(config.include_tasks_db) {
        let present = ids
            .database(name)
            .is_some_and(|database| !database.id.is_empty());
        if !present {
            missing.push(name.to_string());
        }
    }
    if config.include_dashboard {
        let present = ids
            .pages
            .get(catalog::DASHBOARD_PAGE)
            .is_some_and(|page| !page.id.is_empty());
        if !present {
            missing.push(catalog::DASHBOARD_PAGE.to_string());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProvisionError::Verification { missing })
    }
}
