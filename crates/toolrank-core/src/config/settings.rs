//! Relevance settings and the resolved configuration

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::SelectionStrategy;

use super::traits::{ConfigError, ConfigResult};

pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_MAX_TOOLS: usize = 10;

/// Partial settings as stored by one configuration source
///
/// ```yaml
/// domainWeights:
///   solidity: 1.0
///   vyper: 0.8
/// toolRelevanceThreshold: 0.25
/// maxTools: 8
/// selectionStrategy: hybrid
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceSettings {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub domain_weights: HashMap<String, f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_relevance_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tools: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_strategy: Option<SelectionStrategy>,
}

impl RelevanceSettings {
    /// Lay `other` on top of `self`; set fields win, domain maps merge per key
    pub fn merge(&mut self, other: RelevanceSettings) {
        self.domain_weights.extend(other.domain_weights);
        if other.tool_relevance_threshold.is_some() {
            self.tool_relevance_threshold = other.tool_relevance_threshold;
        }
        if other.max_tools.is_some() {
            self.max_tools = other.max_tools;
        }
        if other.selection_strategy.is_some() {
            self.selection_strategy = other.selection_strategy;
        }
    }

    /// Check ranges: weights and threshold in [0, 1], max tools above zero
    pub fn validate(&self) -> ConfigResult<()> {
        for (domain, weight) in &self.domain_weights {
            check_unit(&format!("domainWeights.{}", domain), *weight)?;
        }
        if let Some(threshold) = self.tool_relevance_threshold {
            check_unit("toolRelevanceThreshold", threshold)?;
        }
        if self.max_tools == Some(0) {
            return Err(ConfigError::invalid("maxTools", "must be at least 1"));
        }
        Ok(())
    }

    /// Validate and fill in defaults
    pub fn resolve(self) -> ConfigResult<RelevanceConfig> {
        self.validate()?;
        Ok(RelevanceConfig {
            domain_weights: self.domain_weights,
            tool_relevance_threshold: self
                .tool_relevance_threshold
                .unwrap_or(DEFAULT_RELEVANCE_THRESHOLD),
            max_tools: self.max_tools.unwrap_or(DEFAULT_MAX_TOOLS),
            selection_strategy: self.selection_strategy.unwrap_or_default(),
        })
    }
}

fn check_unit(field: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{} is outside [0, 1]", value)))
    }
}

/// Fully resolved configuration consumed by the relevance service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceConfig {
    /// Domain weights merged over the built-in priors
    pub domain_weights: HashMap<String, f64>,
    /// Tools scoring strictly below this are dropped
    pub tool_relevance_threshold: f64,
    /// Upper bound on the selected tool count
    pub max_tools: usize,
    pub selection_strategy: SelectionStrategy,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            domain_weights: HashMap::new(),
            tool_relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            max_tools: DEFAULT_MAX_TOOLS,
            selection_strategy: SelectionStrategy::default(),
        }
    }
}

impl RelevanceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relevance threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.tool_relevance_threshold = threshold;
        self
    }

    /// Set the maximum number of selected tools
    pub fn with_max_tools(mut self, max_tools: usize) -> Self {
        self.max_tools = max_tools;
        self
    }

    /// Set the selection strategy
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.selection_strategy = strategy;
        self
    }

    /// Override the weight of one domain
    pub fn with_domain_weight(mut self, domain: impl Into<String>, weight: f64) -> Self {
        self.domain_weights.insert(domain.into(), weight);
        self
    }
}
