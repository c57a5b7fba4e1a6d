//! Environment configuration, read once at process start.
use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::errors::ConfigError;

const DEFAULT_IDS_PATH: &str = "output/notion-ids.json";

/// Application settings for both binaries.
#[derive(Debug, Clone)]
pub struct Config {
    /// Integration bearer token (`NOTION_TOKEN`).
    pub notion_token: String,
    /// Root page every database and the dashboard are created under
    /// (`ROOT_PAGE_ID`).
    pub root_page_id: String,
    /// Whether to provision and seed the Tasks database
    /// (`INCLUDE_TASKS_DB`, default true).
    pub include_tasks_db: bool,
    /// Whether to provision the dashboard page
    /// (`INCLUDE_DASHBOARD`, default true).
    pub include_dashboard: bool,
    /// Where the identifier map is persisted (`NOTION_IDS_PATH`).
    pub ids_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            notion_token: require("NOTION_TOKEN")?,
            root_page_id: require("ROOT_PAGE_ID")?,
            include_tasks_db: parse_flag(env::var("INCLUDE_TASKS_DB").ok().as_deref(), true),
            include_dashboard: parse_flag(env::var("INCLUDE_DASHBOARD").ok().as_deref(), true),
            ids_path: env::var("NOTION_IDS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_IDS_PATH)),
        })
    }

    /// Echo the effective settings at startup. Never logs the token.
    pub fn log_summary(&self) {
        info!(
            "config: tasks database {}, dashboard {}, ids path {}",
            onoff(self.include_tasks_db),
            onoff(self.include_dashboard),
            self.ids_path.display(),
        );
    }
}

fn onoff(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(raw) => matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        None => default,
    }
}
