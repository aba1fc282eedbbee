//! Environment configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// Deployment environment, selecting the configuration preset and file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Read `ENVIRONMENT` (or `ENV`), defaulting to development
    pub fn from_env() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("ENV"))
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Get the configuration file stem for this environment
    pub fn config_file(&self) -> String {
        format!("config/{}", self.as_str())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, compact)
    #[serde(default)]
    pub format: LogFormat,

    /// Include timestamp in logs
    #[serde(default = "default_timestamp")]
    pub timestamp: bool,

    /// Level applied to the negotiation internals (header parsing, matching)
    #[serde(default)]
    pub negotiation_level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: LogFormat::default(),
            timestamp: default_timestamp(),
            negotiation_level: None,
        }
    }
}

impl LoggingConfig {
    /// Create logging config for environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: String::from("debug"),
                format: LogFormat::Pretty,
                timestamp: true,
                negotiation_level: Some(String::from("trace")),
            },
            Environment::Staging => Self {
                level: String::from("info"),
                format: LogFormat::Compact,
                timestamp: true,
                negotiation_level: None,
            },
            Environment::Production => Self {
                level: String::from("warn"),
                format: LogFormat::Compact,
                timestamp: true,
                negotiation_level: None,
            },
        }
    }

    /// Build a logger filter directive, e.g. `info,hal_core=trace`
    pub fn filter_directive(&self) -> String {
        match &self.negotiation_level {
            Some(level) => format!("{},hal_core={}", self.level, level),
            None => self.level.clone(),
        }
    }
}

/// Shape of a log line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Level, target and message
    #[default]
    Pretty,
    /// Level and message only
    Compact,
}

impl LogFormat {
    /// Whether the log target (module path) is printed
    pub fn shows_target(&self) -> bool {
        matches!(self, LogFormat::Pretty)
    }
}

fn default_timestamp() -> bool {
    true
}
