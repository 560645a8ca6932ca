//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection and transport settings
    pub model: FileModelConfig,
    /// Chat behavior settings
    pub chat: FileChatConfig,
    /// Diagnostics settings
    pub logging: FileLoggingConfig,
}

/// Model selection and transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model name as the API expects it
    pub name: String,
    /// Whole-request timeout for a single reply call, in seconds
    pub request_timeout_secs: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            request_timeout_secs: 300,
        }
    }
}

/// Chat behavior settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Override for the built-in persona instruction
    pub persona: Option<String>,
}

/// Diagnostics settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write a JSONL transcript of turn events under the user data dir
    pub conversation_log: bool,
}
