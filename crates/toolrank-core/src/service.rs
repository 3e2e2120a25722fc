//! Tool relevance service
//!
//! Entry point for hosts: score a tool list against an intent and a prompt,
//! then reduce it to a bounded, diverse selection.
//!
//! ```rust,ignore
//! use toolrank_core::{IntentType, RelevanceConfig, Tool, ToolEntry, ToolRelevanceService, UserIntent};
//!
//! let service = ToolRelevanceService::new();
//! let tools = vec![ToolEntry::new(
//!     Tool::new("compile_contract").with_description("Compiles solidity contracts"),
//!     "hardhat",
//! )];
//! let intent = UserIntent::new(IntentType::Coding)
//!     .with_keywords(["compile"])
//!     .with_domains(["solidity"]);
//!
//! let selected = service
//!     .select_tools(&tools, &intent, "please compile my contract", &RelevanceConfig::default())
//!     .await;
//! assert_eq!(selected[0].tool.name, "compile_contract");
//! ```

use std::sync::Arc;

use crate::config::RelevanceConfig;
use crate::logging::{Logger, NoOpLogger};
use crate::scoring::{Scorer, ToolScore};
use crate::selection::Selector;
use crate::tables::ReferenceTables;
use crate::types::{ScoredTool, SelectionStrategy, Tool, ToolEntry, UserIntent};
use crate::{log_debug, log_info};

/// Stateless scorer and selector over immutable reference tables
#[derive(Clone)]
pub struct ToolRelevanceService {
    tables: Arc<ReferenceTables>,
    logger: Arc<dyn Logger>,
}

impl Default for ToolRelevanceService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRelevanceService {
    /// Service over the built-in tables with a silent logger
    pub fn new() -> Self {
        Self::with_tables(
            Arc::new(ReferenceTables::default()),
            Arc::new(NoOpLogger::new()),
        )
    }

    /// Service over the built-in tables
    pub fn with_logger(logger: Arc<dyn Logger>) -> Self {
        Self::with_tables(Arc::new(ReferenceTables::default()), logger)
    }

    /// Service over custom reference tables
    pub fn with_tables(tables: Arc<ReferenceTables>, logger: Arc<dyn Logger>) -> Self {
        Self { tables, logger }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Score a single tool
    pub fn score(&self, tool: &Tool, intent: &UserIntent, prompt: &str, config: &RelevanceConfig) -> ToolScore {
        Scorer::new(&self.tables, &config.domain_weights).score(tool, intent, prompt)
    }

    /// Score every entry, drop those under the threshold, best first
    ///
    /// Async for pipeline uniformity only; this never awaits anything.
    pub async fn score_tools(
        &self,
        entries: &[ToolEntry],
        intent: &UserIntent,
        prompt: &str,
        config: &RelevanceConfig,
    ) -> Vec<ScoredTool> {
        let scorer = Scorer::new(&self.tables, &config.domain_weights);
        let scored = scorer.score_all(entries, intent, prompt, config.tool_relevance_threshold);

        log_debug!(
            self.logger,
            "[ToolRelevance] Scored {} tools for {} intent, {} at or above threshold {:.2}",
            entries.len(),
            intent.intent_type,
            scored.len(),
            config.tool_relevance_threshold
        );

        scored
    }

    /// Reduce a scored list to at most `max_count` tools
    pub fn select(
        &self,
        scored: &[ScoredTool],
        max_count: usize,
        strategy: SelectionStrategy,
    ) -> Vec<ScoredTool> {
        let selected = Selector::new(&self.tables, self.logger.as_ref()).select(scored, max_count, strategy);

        log_debug!(
            self.logger,
            "[ToolRelevance] Selected {} of {} tools ({} strategy, max {})",
            selected.len(),
            scored.len(),
            strategy,
            max_count
        );

        selected
    }

    /// Score, filter and select in one call using `config`
    pub async fn select_tools(
        &self,
        entries: &[ToolEntry],
        intent: &UserIntent,
        prompt: &str,
        config: &RelevanceConfig,
    ) -> Vec<ScoredTool> {
        let scored = self.score_tools(entries, intent, prompt, config).await;
        let selected = self.select(&scored, config.max_tools, config.selection_strategy);

        log_info!(
            self.logger,
            "[ToolRelevance] {} of {} candidate tools selected",
            selected.len(),
            entries.len()
        );

        selected
    }

    /// Category the hybrid strategy assigns to a tool name
    pub fn category_of<'a>(&'a self, tool_name: &str) -> &'a str {
        self.tables.category_of(tool_name)
    }
}
