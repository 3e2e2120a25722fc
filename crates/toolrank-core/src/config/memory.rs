//! In-memory configuration provider

use async_trait::async_trait;
use parking_lot::RwLock;

use super::settings::RelevanceSettings;
use super::traits::{ConfigProvider, ConfigResult};

/// In-memory configuration provider
///
/// Useful for tests and for hosts that push settings from their own store.
#[derive(Debug)]
pub struct MemoryConfigProvider {
    name: String,
    settings: RwLock<RelevanceSettings>,
}

impl Default for MemoryConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryConfigProvider {
    /// Create a provider holding empty settings
    pub fn new() -> Self {
        Self::with_settings(RelevanceSettings::default())
    }

    /// Create a provider holding `settings`
    pub fn with_settings(settings: RelevanceSettings) -> Self {
        Self {
            name: "memory".to_string(),
            settings: RwLock::new(settings),
        }
    }

    /// Rename the provider (shows up in resolver logs)
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Reset to empty settings
    pub fn clear(&self) {
        *self.settings.write() = RelevanceSettings::default();
    }
}

#[async_trait]
impl ConfigProvider for MemoryConfigProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load_settings(&self) -> ConfigResult<RelevanceSettings> {
        Ok(self.settings.read().clone())
    }

    async fn save_settings(&self, settings: RelevanceSettings) -> ConfigResult<()> {
        settings.validate()?;
        *self.settings.write() = settings;
        Ok(())
    }
}
