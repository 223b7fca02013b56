//! App Configuration
//!
//! Settings and seed records embedded from `config/app.json`.

use serde::Deserialize;
use thiserror::Error;
use todo_item_core::TaskRecord;

const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Text of the confirm/cancel buttons shown while editing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActionLabels {
    pub confirm: String,
    pub cancel: String,
}

impl Default for ActionLabels {
    fn default() -> Self {
        Self {
            confirm: "확인".to_string(),
            cancel: "취소".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub labels: ActionLabels,
    /// Initial records for the list
    pub todos: Vec<TaskRecord>,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the config compiled into the bundle
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_item_core::{Importance, Status};

    #[test]
    fn test_embedded_config() {
        let config = AppConfig::embedded().expect("embedded config should parse");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.labels, ActionLabels::default());
        assert_eq!(config.todos.len(), 3);
        assert_eq!(
            config.todos[0],
            TaskRecord::new(1, "Write report", Status::Pending, Importance::High)
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{"labels":{"confirm":"OK"}}"#).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.labels.confirm, "OK");
        assert_eq!(config.labels.cancel, "취소");
        assert!(config.todos.is_empty());
    }

    #[test]
    fn test_rejects_unknown_status() {
        let json = r#"{"todos":[{"id":1,"task":"x","status":"done","importance":"low"}]}"#;
        assert!(matches!(AppConfig::from_json(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_log_level() {
        let config = AppConfig::from_json(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(config.log_level.as_tracing(), tracing::Level::DEBUG);
    }
}
