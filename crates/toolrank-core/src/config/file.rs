//! File-based configuration provider (YAML)
//!
//! Supports user-level (~/.config/toolrank/config.yaml) and workspace-level
//! (.config/toolrank/config.yaml) settings.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::settings::RelevanceSettings;
use super::traits::{ConfigProvider, ConfigResult};

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/toolrank/config.yaml)
    User,
    /// Workspace-level config (.config/toolrank/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// File-based configuration provider
///
/// A missing file reads as empty settings.
///
/// # Example
///
/// ```no_run
/// use toolrank_core::config::FileConfigProvider;
///
/// let user_config = FileConfigProvider::user();
/// let workspace_config = FileConfigProvider::workspace("/path/to/workspace");
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<RelevanceSettings>>,
}

impl FileConfigProvider {
    /// Create a provider for a specific path
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    /// User-level provider in the platform config directory
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("toolrank").join("config.yaml"), ConfigLevel::User)
    }

    /// Workspace-level provider under `<root>/.config/toolrank`
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root
            .as_ref()
            .join(".config")
            .join("toolrank")
            .join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> ConfigResult<RelevanceSettings> {
        if !self.path.exists() {
            return Ok(RelevanceSettings::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(RelevanceSettings::default());
        }
        let settings: RelevanceSettings = serde_yaml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn save(&self, settings: &RelevanceSettings) -> ConfigResult<()> {
        settings.validate()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml::to_string(settings)?)?;

        *self.cache.write() = Some(settings.clone());
        Ok(())
    }

    fn cached_or_load(&self) -> ConfigResult<RelevanceSettings> {
        if let Some(settings) = self.cache.read().as_ref() {
            return Ok(settings.clone());
        }
        self.reload()
    }

    /// Reload from disk, replacing the cache
    pub fn reload(&self) -> ConfigResult<RelevanceSettings> {
        let settings = self.load()?;
        *self.cache.write() = Some(settings.clone());
        Ok(settings)
    }

    /// Copy the current file next to itself with a `.backup` suffix
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }

    /// Export settings as JSON (for hosts that store JSON)
    pub fn export_json(&self) -> ConfigResult<String> {
        let settings = self.cached_or_load()?;
        Ok(serde_json::to_string_pretty(&settings)?)
    }

    /// Import settings from JSON and persist them as YAML
    pub fn import_json(&self, json: &str) -> ConfigResult<()> {
        let settings: RelevanceSettings = serde_json::from_str(json)?;
        self.save(&settings)
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    fn name(&self) -> &str {
        self.level.as_str()
    }

    async fn load_settings(&self) -> ConfigResult<RelevanceSettings> {
        self.cached_or_load()
    }

    async fn save_settings(&self, settings: RelevanceSettings) -> ConfigResult<()> {
        self.save(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::types::SelectionStrategy;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_config_provider() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"), ConfigLevel::User);

        // Missing file reads as empty
        assert!(!provider.exists());
        assert_eq!(provider.load_settings().await.unwrap(), RelevanceSettings::default());

        let settings = RelevanceSettings {
            max_tools: Some(6),
            selection_strategy: Some(SelectionStrategy::Priority),
            ..Default::default()
        };
        provider.save_settings(settings.clone()).await.unwrap();
        assert!(provider.exists());

        // Reload and verify persistence
        assert_eq!(provider.reload().unwrap(), settings);
        let content = fs::read_to_string(provider.path()).unwrap();
        assert!(content.contains("maxTools: 6"));
        assert!(content.contains("selectionStrategy: priority"));
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "toolRelevanceThreshold: 2.0\n").unwrap();

        let provider = FileConfigProvider::new(&path, ConfigLevel::Workspace);
        assert!(matches!(
            provider.load_settings().await,
            Err(ConfigError::InvalidValue { .. })
        ));

        fs::write(&path, "maxTools: [not, a, number]\n").unwrap();
        assert!(matches!(provider.reload(), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_workspace_path() {
        let provider = FileConfigProvider::workspace("/repo");
        assert_eq!(provider.path(), Path::new("/repo/.config/toolrank/config.yaml"));
        assert_eq!(provider.level(), ConfigLevel::Workspace);
    }

    #[test]
    fn test_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let provider = FileConfigProvider::new(&path, ConfigLevel::User);

        // No backup if file doesn't exist
        assert!(provider.backup().unwrap().is_none());

        fs::write(&path, "maxTools: 3\n").unwrap();

        let backup_path = provider.backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().ends_with("config.yaml.backup"));
    }

    #[test]
    fn test_json_round_trip_through_yaml() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("nested").join("config.yaml"), ConfigLevel::User);

        provider
            .import_json(r#"{"domainWeights": {"cairo": 0.7}, "maxTools": 4}"#)
            .unwrap();
        let yaml = fs::read_to_string(provider.path()).unwrap();
        assert!(yaml.contains("cairo: 0.7"));

        let json = provider.export_json().unwrap();
        assert!(json.contains("\"maxTools\": 4"));
    }
}
