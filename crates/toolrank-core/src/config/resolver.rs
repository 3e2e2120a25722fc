//! Layered configuration resolution
//!
//! Providers are applied in order; later layers override earlier ones.
//! The native layout is:
//! 1. User YAML (~/.config/toolrank/config.yaml)
//! 2. Workspace YAML (.config/toolrank/config.yaml), overrides user
//!
//! Domain weight maps are merged key by key rather than replaced.

use std::path::Path;
use std::sync::Arc;

use crate::logging::{Logger, NoOpLogger};
use crate::{log_debug, log_info, log_warn};

use super::file::FileConfigProvider;
use super::settings::{RelevanceConfig, RelevanceSettings};
use super::traits::{ConfigProvider, ConfigResult};

/// Resolved configuration with source tracking
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub config: RelevanceConfig,
    /// Names of the layers that contributed at least one setting, in order
    pub sources: Vec<String>,
}

/// Merges settings from an ordered list of providers
pub struct ConfigResolver {
    layers: Vec<Arc<dyn ConfigProvider>>,
    logger: Arc<dyn Logger>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(Arc::new(NoOpLogger::new()))
    }
}

impl ConfigResolver {
    /// Create a resolver with no layers; resolves to defaults
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            layers: Vec::new(),
            logger,
        }
    }

    /// User YAML, then workspace YAML when a workspace root is given
    pub fn native(workspace_root: Option<&Path>, logger: Arc<dyn Logger>) -> Self {
        let mut resolver = Self::new(logger).with_layer(Arc::new(FileConfigProvider::user()));
        if let Some(root) = workspace_root {
            resolver = resolver.with_layer(Arc::new(FileConfigProvider::workspace(root)));
        }
        resolver
    }

    /// Append a layer; it overrides every layer added before it
    pub fn with_layer(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.layers.push(provider);
        self
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Merge every layer and validate the result
    ///
    /// A layer that fails to load, or holds out-of-range values, aborts
    /// resolution.
    pub async fn resolve(&self) -> ConfigResult<ResolvedConfig> {
        let mut merged = RelevanceSettings::default();
        let mut sources = Vec::new();

        for layer in &self.layers {
            let settings = layer.load_settings().await.map_err(|e| {
                self.logger
                    .error(&format!("[ConfigResolver] Failed to load {} settings: {}", layer.name(), e));
                e
            })?;

            if let Err(e) = settings.validate() {
                log_warn!(self.logger, "[ConfigResolver] Rejected {} settings: {}", layer.name(), e);
                return Err(e);
            }

            if settings != RelevanceSettings::default() {
                log_debug!(self.logger, "[ConfigResolver] Applying {} settings", layer.name());
                sources.push(layer.name().to_string());
            }
            merged.merge(settings);
        }

        let config = merged.resolve()?;
        log_info!(
            self.logger,
            "[ConfigResolver] Resolved config: threshold {:.2}, max {} tools, {} strategy, {} domain overrides",
            config.tool_relevance_threshold,
            config.max_tools,
            config.selection_strategy,
            config.domain_weights.len()
        );

        Ok(ResolvedConfig { config, sources })
    }
}
