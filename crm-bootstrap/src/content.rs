//! Sample content for the seeding run and the static dashboard body.
use chrono::{Duration, Utc};

use notion_types::{Block, PropertyValue, ValueMap};

/// Static instructional content for the dashboard page.
pub fn dashboard_blocks() -> Vec<Block> {
    vec![
        Block::heading_1("Research Dashboard"),
        Block::paragraph(
            "This dashboard will contain linked views to your CRM databases. Add the \
             following linked databases manually after running the bootstrap script:",
        ),
        Block::bullet("This Week's Interviews: Calendar view of Interviews"),
        Block::bullet("Follow-up Pipeline: Board view of Contacts by Interview Status"),
        Block::bullet("High-Value Targets: Table view of Contacts filtered by criteria"),
        Block::bullet("Company Ecosystem Map: Board view of Companies by Ecosystem Role"),
    ]
}

pub fn research_project_values() -> ValueMap {
    ValueMap::from([
        (
            "Project Name".to_string(),
            PropertyValue::title("Agentic AI Interviews 2025-2026"),
        ),
        (
            "Research Questions".to_string(),
            PropertyValue::rich_text(
                "How are organizations implementing agentic AI workflows? What are the key \
                 challenges and opportunities in multi-agent systems? How do reasoning \
                 capabilities impact real-world AI applications?",
            ),
        ),
        (
            "Target Stakeholder Types".to_string(),
            PropertyValue::multi_select(["Founder", "Engineer", "Academic"]),
        ),
        ("Interview Target".to_string(), PropertyValue::number(25.0)),
        (
            "Timeline".to_string(),
            PropertyValue::date_range("2025-01-01", "2026-12-31"),
        ),
        ("Status".to_string(), PropertyValue::select("Active")),
    ])
}

pub fn anthropic_company_values() -> ValueMap {
    ValueMap::from([
        (
            "Company Name".to_string(),
            PropertyValue::title("Anthropic"),
        ),
        ("Company Type".to_string(), PropertyValue::select("Builder")),
        (
            "Size Category".to_string(),
            PropertyValue::select("Medium (200-1000)"),
        ),
        (
            "AI Capabilities".to_string(),
            PropertyValue::multi_select(["NLP", "Reasoning"]),
        ),
        (
            "Funding Stage".to_string(),
            PropertyValue::select("Series C"),
        ),
        (
            "Industries Served".to_string(),
            PropertyValue::multi_select(["Financial Services", "Healthcare"]),
        ),
        (
            "Ecosystem Role".to_string(),
            PropertyValue::multi_select(["Model Developer"]),
        ),
        (
            "Geographic Presence".to_string(),
            PropertyValue::multi_select(["North America"]),
        ),
    ])
}

pub fn openai_company_values() -> ValueMap {
    ValueMap::from([
        ("Company Name".to_string(), PropertyValue::title("OpenAI")),
        ("Company Type".to_string(), PropertyValue::select("Builder")),
        (
            "Size Category".to_string(),
            PropertyValue::select("Medium (200-1000)"),
        ),
        (
            "AI Capabilities".to_string(),
            PropertyValue::multi_select(["NLP", "Reasoning", "Computer Vision"]),
        ),
        (
            "Funding Stage".to_string(),
            PropertyValue::select("Series C"),
        ),
        (
            "Industries Served".to_string(),
            PropertyValue::multi_select(["Financial Services", "Healthcare", "Manufacturing"]),
        ),
        (
            "Ecosystem Role".to_string(),
            PropertyValue::multi_select(["Model Developer", "Infrastructure Provider"]),
        ),
        (
            "Geographic Presence".to_string(),
            PropertyValue::multi_select(["North America", "Europe"]),
        ),
    ])
}

pub struct SampleContact {
    pub name: &'static str,
    pub role: &'static str,
    pub stakeholder_type: &'static str,
    pub experience_level: &'static str,
    pub focus_areas: &'static [&'static str],
    pub interview_status: &'static str,
    pub contact_method: &'static str,
    pub last_contact: Option<&'static str>,
    pub linkedin: &'static str,
}

pub const SARAH_CHEN: SampleContact = SampleContact {
    name: "Dr. Sarah Chen",
    role: "Research Scientist",
    stakeholder_type: "Engineer",
    experience_level: "Senior",
    focus_areas: &["Agentic AI", "LLM Reasoning"],
    interview_status: "Scheduled",
    contact_method: "Email",
    last_contact: Some("2025-08-10"),
    linkedin: "https://linkedin.com/in/sarah-chen-ai",
};

pub const ALEX_RODRIGUEZ: SampleContact = SampleContact {
    name: "Alex Rodriguez",
    role: "Product Manager",
    stakeholder_type: "Founder",
    experience_level: "Executive",
    focus_areas: &["Agentic AI"],
    interview_status: "Contacted",
    contact_method: "LinkedIn",
    last_contact: Some("2025-08-08"),
    linkedin: "https://linkedin.com/in/alex-rodriguez-pm",
};

pub const MARIA_GONZALEZ: SampleContact = SampleContact {
    name: "Prof. Maria Gonzalez",
    role: "Senior Research Scientist",
    stakeholder_type: "Academic",
    experience_level: "Thought Leader",
    focus_areas: &["LLM Reasoning", "Planning Systems"],
    interview_status: "Target",
    contact_method: "Warm Introduction",
    last_contact: None,
    linkedin: "https://linkedin.com/in/maria-gonzalez-ai",
};

pub fn contact_values(contact: &SampleContact, company_id: &str) -> ValueMap {
    let mut values = ValueMap::from([
        ("Name".to_string(), PropertyValue::title(contact.name)),
        ("Company".to_string(), PropertyValue::relation(company_id)),
        ("Role/Title".to_string(), PropertyValue::rich_text(contact.role)),
        (
            "Stakeholder Type".to_string(),
            PropertyValue::multi_select([contact.stakeholder_type]),
        ),
        (
            "Experience Level".to_string(),
            PropertyValue::select(contact.experience_level),
        ),
        (
            "AI Focus Area".to_string(),
            PropertyValue::multi_select(contact.focus_areas.iter().copied()),
        ),
        (
            "Company Size Category".to_string(),
            PropertyValue::select("Medium Company"),
        ),
        (
            "Interview Status".to_string(),
            PropertyValue::select(contact.interview_status),
        ),
        (
            "Preferred Contact Method".to_string(),
            PropertyValue::select(contact.contact_method),
        ),
        (
            "LinkedIn URL".to_string(),
            PropertyValue::url(contact.linkedin),
        ),
    ]);
    if let Some(date) = contact.last_contact {
        values.insert("Last Contact Date".to_string(), PropertyValue::date(date));
    }
    values
}

pub fn deep_dive_interview_values(
    contact_id: &str,
    company_id: &str,
    project_id: &str,
) -> ValueMap {
    ValueMap::from([
        (
            "Interview Title".to_string(),
            PropertyValue::title("Agentic AI Research Deep Dive - Sarah Chen"),
        ),
        ("Contact".to_string(), PropertyValue::relation(contact_id)),
        ("Company".to_string(), PropertyValue::relation(company_id)),
        (
            "Date & Time".to_string(),
            PropertyValue::date("2025-08-15T14:00:00.000Z"),
        ),
        (
            "Research Focus".to_string(),
            PropertyValue::multi_select(["Agentic Workflows", "LLM Reasoning"]),
        ),
        (
            "Interview Type".to_string(),
            PropertyValue::select("Deep Dive"),
        ),
        ("Status".to_string(), PropertyValue::select("Scheduled")),
        (
            "Workflow Patterns Discussed".to_string(),
            PropertyValue::multi_select(["Reflection", "Tool Use"]),
        ),
        (
            "Technical Depth".to_string(),
            PropertyValue::select("Deep Technical"),
        ),
        ("Project".to_string(), PropertyValue::relation(project_id)),
    ])
}

pub fn product_strategy_interview_values(
    contact_id: &str,
    company_id: &str,
    project_id: &str,
) -> ValueMap {
    ValueMap::from([
        (
            "Interview Title".to_string(),
            PropertyValue::title("Product Strategy Discussion - Alex Rodriguez"),
        ),
        ("Contact".to_string(), PropertyValue::relation(contact_id)),
        ("Company".to_string(), PropertyValue::relation(company_id)),
        (
            "Date & Time".to_string(),
            PropertyValue::date("2025-08-12T16:00:00.000Z"),
        ),
        (
            "Research Focus".to_string(),
            PropertyValue::multi_select(["Agentic Workflows"]),
        ),
        (
            "Interview Type".to_string(),
            PropertyValue::select("Discovery"),
        ),
        ("Status".to_string(), PropertyValue::select("Completed")),
        (
            "Workflow Patterns Discussed".to_string(),
            PropertyValue::multi_select(["Planning", "Multi-Agent"]),
        ),
        (
            "Technical Depth".to_string(),
            PropertyValue::select("High-Level"),
        ),
        (
            "Follow-up Actions".to_string(),
            PropertyValue::rich_text(
                "Share product roadmap insights with research team. Schedule technical \
                 deep-dive with engineering team.",
            ),
        ),
        ("Project".to_string(), PropertyValue::relation(project_id)),
    ])
}

/// The full structured agenda for the deep-dive interview: checklist,
/// collapsible timed sections, insights callout and follow-up to-dos.
pub fn interview_agenda_blocks() -> Vec<Block> {
    vec![
        Block::heading_2("Pre-Interview Checklist"),
        Block::todo("Background research on Sarah's recent publications", false),
        Block::todo("Personalize interview guide for agentic AI focus", false),
        Block::todo("Test Google Meet + Granola setup", false),
        Block::todo("Draft follow-up email template", false),
        Block::heading_2("During Interview Notes"),
        Block::toggle(
            "Opening (5 minutes)",
            vec![
                Block::bullet("Introduction and context setting"),
                Block::bullet("Recording permission and agenda overview"),
            ],
        ),
        Block::toggle(
            "Core Discussion (35 minutes)",
            vec![
                Block::bullet("Current agentic AI projects and approaches"),
                Block::bullet("Key challenges in reasoning capabilities"),
                Block::bullet("Tool integration patterns and workflows"),
            ],
        ),
        Block::toggle(
            "Deep Dive (15 minutes)",
            vec![
                Block::bullet("Technical architecture details"),
                Block::bullet("Performance metrics and evaluation approaches"),
            ],
        ),
        Block::toggle(
            "Closing (5 minutes)",
            vec![
                Block::bullet("Summary of key insights"),
                Block::bullet("Follow-up questions and next steps"),
                Block::bullet("Additional contact recommendations"),
            ],
        ),
        Block::heading_2("Key Insights"),
        Block::callout(
            "Record key insights, pain points, and opportunities discovered during the \
             interview. Link to specific Insights database entries.",
            "💡",
        ),
        Block::heading_2("Follow-up Actions"),
        Block::todo("Send thank you email with summary", false),
        Block::todo("Create Insights entries for key findings", false),
        Block::todo("Schedule follow-up if needed", false),
    ]
}

pub fn tool_integration_insight_values(interview_id: &str) -> ValueMap {
    ValueMap::from([
        (
            "Insight Title".to_string(),
            PropertyValue::title("Tool Integration Complexity is Major Bottleneck"),
        ),
        ("Category".to_string(), PropertyValue::select("Pain Point")),
        (
            "AI Domain".to_string(),
            PropertyValue::multi_select(["Tool Integration", "Agent Architecture"]),
        ),
        (
            "Source Interview".to_string(),
            PropertyValue::relation(interview_id),
        ),
        ("Impact Level".to_string(), PropertyValue::select("High")),
        (
            "Confidence Level".to_string(),
            PropertyValue::select("High Confidence"),
        ),
        (
            "Supporting Evidence".to_string(),
            PropertyValue::rich_text(
                "Multiple teams report 60-80% of development time spent on tool integration \
                 rather than core AI capabilities. Standardization across different tool APIs \
                 is lacking.",
            ),
        ),
        (
            "Ecosystem Implications".to_string(),
            PropertyValue::rich_text(
                "Need for standardized tool integration frameworks. Opportunity for \
                 infrastructure providers to create abstraction layers.",
            ),
        ),
        (
            "Actionable Opportunities".to_string(),
            PropertyValue::rich_text(
                "Develop universal tool integration SDK. Create best practices guide for tool \
                 API design. Interview more infrastructure providers.",
            ),
        ),
    ])
}

pub fn multi_agent_insight_values(interview_id: &str) -> ValueMap {
    ValueMap::from([
        (
            "Insight Title".to_string(),
            PropertyValue::title("Multi-Agent Coordination Patterns Emerging"),
        ),
        ("Category".to_string(), PropertyValue::select("Market Trend")),
        (
            "AI Domain".to_string(),
            PropertyValue::multi_select(["Multi-Agent Coordination", "Agent Architecture"]),
        ),
        (
            "Source Interview".to_string(),
            PropertyValue::relation(interview_id),
        ),
        ("Impact Level".to_string(), PropertyValue::select("Medium")),
        (
            "Confidence Level".to_string(),
            PropertyValue::select("Needs Validation"),
        ),
        (
            "Supporting Evidence".to_string(),
            PropertyValue::rich_text(
                "Seeing consistent patterns across organizations: hierarchy-based \
                 coordination, message passing systems, and shared memory architectures.",
            ),
        ),
        (
            "Ecosystem Implications".to_string(),
            PropertyValue::rich_text(
                "Potential for standardization around coordination protocols. Infrastructure \
                 needs for agent communication and state management.",
            ),
        ),
        (
            "Actionable Opportunities".to_string(),
            PropertyValue::rich_text(
                "Interview more multi-agent system implementers. Map coordination pattern \
                 variations. Assess infrastructure requirements.",
            ),
        ),
    ])
}

/// One sample task. Interview and contact links are filled in by the
/// seeder from the pages it just created.
pub struct SampleTask {
    pub title: &'static str,
    pub due_in_days: i64,
    pub priority: &'static str,
    pub status: &'static str,
    pub channel: &'static str,
    pub next_action: &'static str,
    pub notes: &'static str,
}

pub const SAMPLE_TASKS: [SampleTask; 3] = [
    SampleTask {
        title: "Send thank-you email",
        due_in_days: 1,
        priority: "Medium",
        status: "Next",
        channel: "Email",
        next_action: "Draft personalized thank-you email with key discussion points and next steps.",
        notes: "Include summary of agentic AI insights and offer to share relevant research papers.",
    },
    SampleTask {
        title: "Schedule follow-up",
        due_in_days: 7,
        priority: "High",
        status: "Backlog",
        channel: "Meeting",
        next_action: "Coordinate calendars for technical deep-dive session with engineering team.",
        notes: "Focus on multi-agent coordination patterns and tool integration challenges.",
    },
    SampleTask {
        title: "Request referral to X",
        due_in_days: 14,
        priority: "Low",
        status: "Backlog",
        channel: "LinkedIn",
        next_action: "Draft LinkedIn message requesting introduction to Planning Systems team lead.",
        notes: "Mention specific interest in recent planning research and potential collaboration opportunities.",
    },
];

pub fn task_values(
    task: &SampleTask,
    interview_id: Option<&str>,
    contact_id: &str,
) -> ValueMap {
    let due = (Utc::now() + Duration::days(task.due_in_days))
        .format("%Y-%m-%d")
        .to_string();
    let mut values = ValueMap::from([
        ("Task".to_string(), PropertyValue::title(task.title)),
        ("Contact".to_string(), PropertyValue::relation(contact_id)),
        ("Due Date".to_string(), PropertyValue::date(due)),
        ("Priority".to_string(), PropertyValue::select(task.priority)),
        ("Status".to_string(), PropertyValue::select(task.status)),
        ("Channel".to_string(), PropertyValue::select(task.channel)),
        (
            "Next Action".to_string(),
            PropertyValue::rich_text(task.next_action),
        ),
        ("Notes".to_string(), PropertyValue::rich_text(task.notes)),
    ]);
    if let Some(id) = interview_id {
        values.insert("Interview".to_string(), PropertyValue::relation(id));
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agenda_has_checklist_and_toggles() {
        let blocks = interview_agenda_blocks();
        let todos = blocks
            .iter()
            .filter(|block| matches!(block, Block::ToDo { .. }))
            .count();
        let toggles = blocks
            .iter()
            .filter(|block| matches!(block, Block::Toggle { .. }))
            .count();
        assert_eq!(todos, 7);
        assert_eq!(toggles, 4);
    }

    #[test]
    fn task_values_link_interview_only_when_present() {
        let with = task_values(&SAMPLE_TASKS[0], Some("interview-1"), "contact-1");
        assert!(with.contains_key("Interview"));

        let without = task_values(&SAMPLE_TASKS[2], None, "contact-3");
        assert!(!without.contains_key("Interview"));
    }

    #[test]
    fn due_dates_are_iso_days() {
        let values = task_values(&SAMPLE_TASKS[1], None, "contact-2");
        match &values["Due Date"] {
            PropertyValue::Date(date) => {
                assert_eq!(date.start.len(), 10);
                assert!(date.end.is_none());
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }
}
