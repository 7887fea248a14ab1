//! Startup-time configuration, read once from the process environment.

use anyhow::{bail, Result};
use std::env;
use url::Url;

use crate::environment::{env_var_or, required_env_var};

pub const DEFAULT_TRIGGER_COMMAND: &str = "!checkreleases";
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://github.com";
pub const DEFAULT_SLACK_API_BASE_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub slack_token: String,
    pub slack_channel: String,
    pub bot_user_id: Option<String>,
    pub repo_owner: String,
    pub repo_name: String,
    pub trigger_command: String,
    pub port: u16,
    pub github_base_url: String,
    pub slack_api_base_url: String,
}

impl Config {
    /// Loads the bot configuration. Missing required variables are fatal.
    pub fn from_env() -> Result<Self> {
        let config = Config {
            slack_token: required_env_var("SLACK_TOKEN")?,
            slack_channel: required_env_var("SLACK_CHANNEL")?,
            bot_user_id: env::var("SLACK_BOT_USER_ID").ok(),
            repo_owner: required_env_var("REPO_OWNER")?,
            repo_name: required_env_var("REPO_NAME")?,
            trigger_command: env_var_or("TRIGGER_COMMAND", DEFAULT_TRIGGER_COMMAND),
            port: env_var_or("PORT", "8080").parse().unwrap_or(8080),
            github_base_url: env_var_or("GITHUB_BASE_URL", DEFAULT_GITHUB_BASE_URL),
            slack_api_base_url: env_var_or("SLACK_API_BASE_URL", DEFAULT_SLACK_API_BASE_URL),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for base_url in [&self.github_base_url, &self.slack_api_base_url] {
            if !is_valid_url(base_url) {
                bail!("Invalid base URL in configuration: {}", base_url);
            }
        }
        Ok(())
    }
}

/// Helper function to validate a URL
pub fn is_valid_url(url: &str) -> bool {
    if let Ok(parsed) = Url::parse(url) {
        parsed.scheme() == "http" || parsed.scheme() == "https"
    } else {
        false
    }
}
