use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::command::CommandResult;

pub const CONFIG_ENV: &str = "OOP_PATTERNS_CONFIG";

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl From<String> for LogFormat {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

// Configuration abstracts process-wide options, read once at program entry
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_format: LogFormat,
    pub ansi: bool,
    pub prompts: bool,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            log_format: LogFormat::Text,
            ansi: false,
            prompts: true,
        }
    }

    pub fn from_json(json: &str) -> CommandResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // Falls back to defaults when the variable is not set.
    pub fn from_env() -> CommandResult<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(json) => Self::from_json(json.as_str()),
            Err(_) => Ok(Self::new()),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
