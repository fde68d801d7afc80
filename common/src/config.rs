//! Process-wide configuration.
//!
//! `Config` is loaded once from an optional `.env` file and the environment, then shared
//! through a `OnceCell`. Every key has a default, so loading never fails.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub short_text_case_sensitive: bool,
    pub short_text_collapse_whitespace: bool,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

impl Config {
    /// Reads configuration from the current environment without caching it.
    pub fn from_env() -> Self {
        Config {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "grader".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "logs/grader.log".into()),
            short_text_case_sensitive: env_flag("SHORT_TEXT_CASE_SENSITIVE", false),
            short_text_collapse_whitespace: env_flag("SHORT_TEXT_COLLAPSE_WHITESPACE", false),
        }
    }

    /// Loads `env_path` (if present) into the environment and initializes the shared config.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();
        CONFIG.get_or_init(Self::from_env)
    }

}
