use anyhow::{Context, Result};
use std::env;

/// Retrieves a required environment variable, failing startup if it is unset.
pub fn required_env_var(var: &str) -> Result<String> {
    env::var(var).with_context(|| format!("{} environment variable required", var))
}

/// Retrieves an environment variable, falling back to a default when unset.
pub fn env_var_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}
