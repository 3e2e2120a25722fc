//! Configuration provider trait

use async_trait::async_trait;

use super::settings::RelevanceSettings;

/// Source of relevance settings
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory, for tests and hosts that push settings
/// - `FileConfigProvider`: YAML file (user or workspace level)
/// - Host adapters: e.g. an editor's settings store
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Load the (possibly partial) settings held by this source
    async fn load_settings(&self) -> ConfigResult<RelevanceSettings>;

    /// Replace the settings held by this source
    async fn save_settings(&self, settings: RelevanceSettings) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
