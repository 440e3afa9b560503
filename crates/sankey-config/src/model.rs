use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable holding the personal access token.
pub const ENV_TOKEN: &str = "YNAB_TOKEN";
/// Environment variable holding the budget id.
pub const ENV_BUDGET_ID: &str = "BUDGET_ID";
/// Environment variable selecting the month (`current` or an ISO date).
pub const ENV_MONTH: &str = "YNAB_MONTH";
/// Environment variable overriding the output directory.
pub const ENV_OUTPUT_DIR: &str = "SANKEY_OUTPUT_DIR";

/// Settings required to fetch one budget month and write its flow graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub budget_id: String,
    #[serde(default = "Config::default_month_value")]
    pub month: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional directory for the generated JSON files. Defaults to the
    /// working directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            budget_id: String::new(),
            month: Self::default_month_value(),
            output_dir: None,
        }
    }
}

impl Config {
    pub fn default_month_value() -> String {
        "current".into()
    }

    /// Applies environment overrides on top of whatever was loaded from
    /// disk. Empty variables are ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(token) = non_empty(var(ENV_TOKEN)) {
            self.token = token;
        }
        if let Some(budget_id) = non_empty(var(ENV_BUDGET_ID)) {
            self.budget_id = budget_id;
        }
        if let Some(month) = non_empty(var(ENV_MONTH)) {
            self.month = month;
        }
        if let Some(dir) = non_empty(var(ENV_OUTPUT_DIR)) {
            self.output_dir = Some(PathBuf::from(dir));
        }
    }

    /// Fails fast on settings the upstream client cannot work without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::Missing("token"));
        }
        if self.budget_id.trim().is_empty() {
            return Err(ConfigError::Missing("budget_id"));
        }
        Ok(())
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
