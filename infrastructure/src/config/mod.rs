//! Configuration loading
//!
//! Raw TOML structures plus the multi-source loader. The service
//! credential is deliberately not part of the file config — it comes from
//! the environment and is validated at gateway construction.

mod file_config;
mod loader;

pub use file_config::{FileChatConfig, FileConfig, FileLoggingConfig, FileModelConfig};
pub use loader::ConfigLoader;

use thiserror::Error;

/// Fatal startup configuration errors.
///
/// Either of these prevents the process from reaching message handling.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("environment variable {0} is not set")]
    MissingCredential(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] Box<figment::Error>),
}
