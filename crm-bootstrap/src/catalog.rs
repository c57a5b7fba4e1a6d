//! The CRM database catalog: names and property specifications for
//! every database the provisioner manages.
//!
//! Creation-time relations only ever target databases created in an
//! earlier provisioning step. The one exception is Contacts' own
//! `Referral Source` self-relation, which is created with an empty
//! placeholder target and patched via [`referral_source_patch`] once
//! the database id exists. Back-references and rollups live in their
//! own builders because they are attached in later passes.
use notion_types::{Color, PropertyMap, PropertySpec, RollupFunction, SelectOption};

pub const COMPANIES: &str = "Companies";
pub const CONTACTS: &str = "Contacts";
pub const INTERVIEWS: &str = "Interviews";
pub const INSIGHTS: &str = "Insights";
pub const RESEARCH_PROJECTS: &str = "Research Projects";
pub const TASKS: &str = "Tasks";
pub const DASHBOARD_PAGE: &str = "Research Dashboard";

/// Databases a complete provisioning run must produce.
pub fn expected_databases(include_tasks: bool) -> Vec<&'static str> {
    let mut expected = vec![COMPANIES, CONTACTS, INTERVIEWS, INSIGHTS, RESEARCH_PROJECTS];
    if include_tasks {
        expected.push(TASKS);
    }
    expected
}

fn options(pairs: &[(&str, Color)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(name, color)| SelectOption::new(*name, *color))
        .collect()
}

pub fn companies_properties() -> PropertyMap {
    PropertyMap::from([
        ("Company Name".to_string(), PropertySpec::Title {}),
        (
            "Company Type".to_string(),
            PropertySpec::select(options(&[
                ("Builder", Color::Blue),
                ("Orchestrator", Color::Green),
                ("Participant", Color::Yellow),
                ("Enabler", Color::Purple),
            ])),
        ),
        (
            "Size Category".to_string(),
            PropertySpec::select(options(&[
                ("Big Tech (1000+)", Color::Red),
                ("Medium (200-1000)", Color::Orange),
                ("Startup (<200)", Color::Green),
            ])),
        ),
        (
            "AI Capabilities".to_string(),
            PropertySpec::multi_select(options(&[
                ("Computer Vision", Color::Blue),
                ("NLP", Color::Green),
                ("Robotics", Color::Yellow),
                ("Forecasting", Color::Orange),
                ("Discovery", Color::Red),
                ("Planning", Color::Purple),
                ("Creation", Color::Pink),
                ("Reasoning", Color::Brown),
            ])),
        ),
        (
            "Funding Stage".to_string(),
            PropertySpec::select(options(&[
                ("Pre-seed", Color::Gray),
                ("Seed", Color::Brown),
                ("Series A", Color::Orange),
                ("Series B", Color::Yellow),
                ("Series C", Color::Green),
                ("Public", Color::Blue),
                ("Bootstrapped", Color::Purple),
            ])),
        ),
        (
            "Industries Served".to_string(),
            PropertySpec::multi_select(options(&[
                ("Financial Services", Color::Blue),
                ("Healthcare", Color::Green),
                ("Manufacturing", Color::Yellow),
                ("Retail", Color::Orange),
                ("Transportation", Color::Red),
            ])),
        ),
        (
            "Ecosystem Role".to_string(),
            PropertySpec::multi_select(options(&[
                ("Infrastructure Provider", Color::Blue),
                ("Model Developer", Color::Green),
                ("Application Builder", Color::Yellow),
                ("Data Provider", Color::Orange),
            ])),
        ),
        (
            "Geographic Presence".to_string(),
            PropertySpec::multi_select(options(&[
                ("North America", Color::Blue),
                ("Europe", Color::Green),
                ("APAC", Color::Yellow),
                ("LATAM", Color::Orange),
                ("Middle East", Color::Red),
                ("Africa", Color::Purple),
            ])),
        ),
    ])
}

pub fn contacts_properties(companies_id: &str) -> PropertyMap {
    PropertyMap::from([
        ("Name".to_string(), PropertySpec::Title {}),
        ("Company".to_string(), PropertySpec::relation(companies_id)),
        ("Role/Title".to_string(), PropertySpec::RichText {}),
        (
            "Stakeholder Type".to_string(),
            PropertySpec::multi_select(options(&[
                ("Investor", Color::Blue),
                ("Founder", Color::Green),
                ("Engineer", Color::Yellow),
                ("Academic", Color::Orange),
                ("Consultant", Color::Red),
            ])),
        ),
        (
            "Experience Level".to_string(),
            PropertySpec::select(options(&[
                ("Junior", Color::Gray),
                ("Mid-Level", Color::Brown),
                ("Senior", Color::Orange),
                ("Executive", Color::Red),
                ("Thought Leader", Color::Purple),
            ])),
        ),
        (
            "AI Focus Area".to_string(),
            PropertySpec::multi_select(options(&[
                ("Agentic AI", Color::Blue),
                ("LLM Reasoning", Color::Green),
                ("Computer Vision", Color::Yellow),
                ("Robotics", Color::Orange),
                ("Planning Systems", Color::Red),
            ])),
        ),
        (
            "Company Size Category".to_string(),
            PropertySpec::select(options(&[
                ("Big Tech", Color::Red),
                ("Medium Company", Color::Orange),
                ("Startup", Color::Green),
                ("Research Institution", Color::Blue),
            ])),
        ),
        (
            "Interview Status".to_string(),
            PropertySpec::select(options(&[
                ("Target", Color::Gray),
                ("Contacted", Color::Yellow),
                ("Scheduled", Color::Orange),
                ("Completed", Color::Green),
                ("Follow-up Needed", Color::Red),
            ])),
        ),
        (
            "Preferred Contact Method".to_string(),
            PropertySpec::select(options(&[
                ("Email", Color::Blue),
                ("LinkedIn", Color::Purple),
                ("Warm Introduction", Color::Green),
            ])),
        ),
        ("Last Contact Date".to_string(), PropertySpec::Date {}),
        ("LinkedIn URL".to_string(), PropertySpec::Url {}),
        // Self-relation: the target id does not exist yet at creation
        // time, so it starts empty and is patched right after.
        ("Referral Source".to_string(), PropertySpec::relation("")),
    ])
}

/// Patch for Contacts' `Referral Source` once the database id is known.
pub fn referral_source_patch(contacts_id: &str) -> PropertyMap {
    PropertyMap::from([(
        "Referral Source".to_string(),
        PropertySpec::relation(contacts_id),
    )])
}

pub fn interviews_properties(contacts_id: &str, companies_id: &str) -> PropertyMap {
    PropertyMap::from([
        ("Interview Title".to_string(), PropertySpec::Title {}),
        ("Contact".to_string(), PropertySpec::relation(contacts_id)),
        ("Company".to_string(), PropertySpec::relation(companies_id)),
        ("Date & Time".to_string(), PropertySpec::Date {}),
        (
            "Research Focus".to_string(),
            PropertySpec::multi_select(options(&[
                ("Agentic Workflows", Color::Blue),
                ("LLM Reasoning", Color::Green),
                ("Tool Use", Color::Yellow),
                ("Multi-Agent Systems", Color::Orange),
            ])),
        ),
        (
            "Interview Type".to_string(),
            PropertySpec::select(options(&[
                ("Discovery", Color::Blue),
                ("Deep Dive", Color::Green),
                ("Follow-up", Color::Yellow),
                ("Validation", Color::Orange),
            ])),
        ),
        (
            "Status".to_string(),
            PropertySpec::select(options(&[
                ("Scheduled", Color::Yellow),
                ("Completed", Color::Green),
                ("Cancelled", Color::Red),
                ("Rescheduled", Color::Orange),
            ])),
        ),
        ("Recording Link".to_string(), PropertySpec::Url {}),
        ("Granola Notes".to_string(), PropertySpec::Files {}),
        (
            "Workflow Patterns Discussed".to_string(),
            PropertySpec::multi_select(options(&[
                ("Reflection", Color::Blue),
                ("Tool Use", Color::Green),
                ("ReAct", Color::Yellow),
                ("Planning", Color::Orange),
                ("Multi-Agent", Color::Red),
            ])),
        ),
        (
            "Technical Depth".to_string(),
            PropertySpec::select(options(&[
                ("High-Level", Color::Gray),
                ("Detailed", Color::Yellow),
                ("Deep Technical", Color::Red),
            ])),
        ),
        ("Follow-up Actions".to_string(), PropertySpec::RichText {}),
        // Numeric helper for the Research Projects completion rollup.
        (
            "CompletedNum".to_string(),
            PropertySpec::formula("if(prop(\"Status\") == \"Completed\", 1, 0)"),
        ),
    ])
}

pub fn insights_properties(interviews_id: &str) -> PropertyMap {
    PropertyMap::from([
        ("Insight Title".to_string(), PropertySpec::Title {}),
        (
            "Category".to_string(),
            PropertySpec::select(options(&[
                ("Pain Point", Color::Red),
                ("Opportunity", Color::Green),
                ("Technical Challenge", Color::Orange),
                ("Market Trend", Color::Blue),
                ("Best Practice", Color::Purple),
            ])),
        ),
        (
            "AI Domain".to_string(),
            PropertySpec::multi_select(options(&[
                ("Reasoning Capabilities", Color::Blue),
                ("Agent Architecture", Color::Green),
                ("Tool Integration", Color::Yellow),
                ("Multi-Agent Coordination", Color::Orange),
            ])),
        ),
        (
            "Source Interview".to_string(),
            PropertySpec::relation(interviews_id),
        ),
        (
            "Impact Level".to_string(),
            PropertySpec::select(options(&[
                ("High", Color::Red),
                ("Medium", Color::Yellow),
                ("Low", Color::Gray),
            ])),
        ),
        (
            "Confidence Level".to_string(),
            PropertySpec::select(options(&[
                ("High Confidence", Color::Green),
                ("Needs Validation", Color::Yellow),
                ("Hypothesis", Color::Gray),
            ])),
        ),
        ("Supporting Evidence".to_string(), PropertySpec::RichText {}),
        (
            "Ecosystem Implications".to_string(),
            PropertySpec::RichText {},
        ),
        (
            "Actionable Opportunities".to_string(),
            PropertySpec::RichText {},
        ),
    ])
}

pub fn research_projects_properties(interviews_id: &str, insights_id: &str) -> PropertyMap {
    PropertyMap::from([
        ("Project Name".to_string(), PropertySpec::Title {}),
        ("Research Questions".to_string(), PropertySpec::RichText {}),
        (
            "Target Stakeholder Types".to_string(),
            PropertySpec::multi_select(options(&[
                ("Investor", Color::Blue),
                ("Founder", Color::Green),
                ("Engineer", Color::Yellow),
                ("Academic", Color::Orange),
                ("Consultant", Color::Red),
            ])),
        ),
        ("Interview Target".to_string(), PropertySpec::Number {}),
        (
            "Interviews".to_string(),
            PropertySpec::dual_relation(interviews_id),
        ),
        (
            "Key Findings".to_string(),
            PropertySpec::dual_relation(insights_id),
        ),
        ("Timeline".to_string(), PropertySpec::Date {}),
        (
            "Status".to_string(),
            PropertySpec::select(options(&[
                ("Planning", Color::Gray),
                ("Active", Color::Yellow),
                ("Analysis", Color::Orange),
                ("Completed", Color::Green),
            ])),
        ),
    ])
}

pub fn tasks_properties(interviews_id: &str, contacts_id: &str) -> PropertyMap {
    PropertyMap::from([
        ("Task".to_string(), PropertySpec::Title {}),
        (
            "Interview".to_string(),
            PropertySpec::relation(interviews_id),
        ),
        ("Contact".to_string(), PropertySpec::relation(contacts_id)),
        ("Due Date".to_string(), PropertySpec::Date {}),
        (
            "Priority".to_string(),
            PropertySpec::select(options(&[
                ("High", Color::Red),
                ("Medium", Color::Yellow),
                ("Low", Color::Gray),
            ])),
        ),
        (
            "Status".to_string(),
            PropertySpec::select(options(&[
                ("Backlog", Color::Gray),
                ("Next", Color::Yellow),
                ("In Progress", Color::Orange),
                ("Done", Color::Green),
            ])),
        ),
        (
            "Channel".to_string(),
            PropertySpec::select(options(&[
                ("Email", Color::Blue),
                ("LinkedIn", Color::Purple),
                ("Meeting", Color::Green),
                ("Phone", Color::Orange),
            ])),
        ),
        ("Next Action".to_string(), PropertySpec::RichText {}),
        ("Notes".to_string(), PropertySpec::RichText {}),
    ])
}

/// Dual back-references from Companies to Contacts and Interviews.
pub fn company_backrefs(contacts_id: &str, interviews_id: &str) -> PropertyMap {
    PropertyMap::from([
        (
            "Contacts".to_string(),
            PropertySpec::dual_relation(contacts_id),
        ),
        (
            "Interviews".to_string(),
            PropertySpec::dual_relation(interviews_id),
        ),
    ])
}

/// Count rollups on Companies over its relation property ids.
pub fn company_rollups(contacts_relation_id: &str, interviews_relation_id: &str) -> PropertyMap {
    PropertyMap::from([
        (
            "Total Contacts".to_string(),
            PropertySpec::rollup(contacts_relation_id, "title", RollupFunction::Count),
        ),
        (
            "Interview Count".to_string(),
            PropertySpec::rollup(interviews_relation_id, "title", RollupFunction::Count),
        ),
    ])
}

/// Dual back-reference from Contacts to Interviews.
pub fn contact_backrefs(interviews_id: &str) -> PropertyMap {
    PropertyMap::from([(
        "Interviews".to_string(),
        PropertySpec::dual_relation(interviews_id),
    )])
}

pub fn contact_rollups(interviews_relation_id: &str) -> PropertyMap {
    PropertyMap::from([(
        "Interview Count".to_string(),
        PropertySpec::rollup(interviews_relation_id, "title", RollupFunction::Count),
    )])
}

/// Dual back-references from Interviews to Insights and Research
/// Projects.
pub fn interview_backrefs(insights_id: &str, projects_id: &str) -> PropertyMap {
    PropertyMap::from([
        (
            "Key Insights".to_string(),
            PropertySpec::dual_relation(insights_id),
        ),
        (
            "Project".to_string(),
            PropertySpec::dual_relation(projects_id),
        ),
    ])
}

/// Completion tracking on Research Projects: a sum rollup over the
/// Interviews' `CompletedNum` helper plus a percentage formula.
pub fn project_rollups(interviews_relation_id: &str, completed_num_id: &str) -> PropertyMap {
    PropertyMap::from([
        (
            "Completed Interviews".to_string(),
            PropertySpec::rollup(interviews_relation_id, completed_num_id, RollupFunction::Sum),
        ),
        (
            "Completion %".to_string(),
            PropertySpec::formula(
                "if(prop(\"Interview Target\") > 0, round(100 * prop(\"Completed Interviews\") / prop(\"Interview Target\")), 0)",
            ),
        ),
    ])
}

/// Dual back-reference from Contacts to Tasks.
pub fn contact_tasks_backref(tasks_id: &str) -> PropertyMap {
    PropertyMap::from([("Tasks".to_string(), PropertySpec::dual_relation(tasks_id))])
}

pub fn contact_task_rollup(tasks_relation_id: &str) -> PropertyMap {
    PropertyMap::from([(
        "Task Count".to_string(),
        PropertySpec::rollup(tasks_relation_id, "title", RollupFunction::Count),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use notion_types::{RelationKind, RelationSpec};

    #[test]
    fn expected_databases_respects_tasks_flag() {
        assert_eq!(expected_databases(false).len(), 5);
        let with_tasks = expected_databases(true);
        assert_eq!(with_tasks.len(), 6);
        assert!(with_tasks.contains(&TASKS));
    }

    #[test]
    fn every_database_has_exactly_one_title_property() {
        let maps = [
            companies_properties(),
            contacts_properties("companies"),
            interviews_properties("contacts", "companies"),
            insights_properties("interviews"),
            research_projects_properties("interviews", "insights"),
            tasks_properties("interviews", "contacts"),
        ];
        for map in maps {
            let titles = map
                .values()
                .filter(|spec| matches!(spec, PropertySpec::Title {}))
                .count();
            assert_eq!(titles, 1);
        }
    }

    #[test]
    fn referral_source_starts_as_placeholder() {
        let contacts = contacts_properties("companies-id");
        assert_eq!(
            contacts["Referral Source"],
            PropertySpec::Relation(RelationSpec {
                database_id: String::new(),
                kind: RelationKind::SingleProperty {},
            })
        );

        let patch = referral_source_patch("contacts-id");
        assert_eq!(
            patch["Referral Source"],
            PropertySpec::relation("contacts-id")
        );
    }

    #[test]
    fn creation_time_relations_target_earlier_databases() {
        // Interviews is created after Contacts and Companies; its
        // creation-time relations must point at those ids and nothing
        // else.
        let interviews = interviews_properties("contacts-id", "companies-id");
        for spec in interviews.values() {
            if let PropertySpec::Relation(relation) = spec {
                assert!(
                    relation.database_id == "contacts-id" || relation.database_id == "companies-id"
                );
            }
        }
    }
}
