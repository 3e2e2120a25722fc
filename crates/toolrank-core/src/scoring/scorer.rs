//! Multi-factor relevance scorer

use std::collections::HashMap;

use crate::tables::ReferenceTables;
use crate::types::{ScoreBreakdown, ScoredTool, Tool, ToolEntry, UserIntent};

use super::components::{action_match, domain_relevance, keyword_match, type_relevance};
use super::reasoning::explain;

/// Score of a single tool, before it is attached to its server
#[derive(Debug, Clone, PartialEq)]
pub struct ToolScore {
    pub breakdown: ScoreBreakdown,
    pub reasoning: String,
}

impl ToolScore {
    /// Weighted aggregate of the breakdown
    pub fn aggregate(&self) -> f64 {
        self.breakdown.aggregate()
    }
}

/// Scores tools against one set of reference tables and domain weights
///
/// Domain overrides are merged over the table priors once, at construction.
#[derive(Debug)]
pub struct Scorer<'a> {
    tables: &'a ReferenceTables,
    domain_weights: HashMap<String, f64>,
}

impl<'a> Scorer<'a> {
    pub fn new(tables: &'a ReferenceTables, domain_overrides: &HashMap<String, f64>) -> Self {
        Self {
            tables,
            domain_weights: tables.merged_domain_weights(domain_overrides),
        }
    }

    /// Merged domain weights in effect for this scorer
    pub fn domain_weights(&self) -> &HashMap<String, f64> {
        &self.domain_weights
    }

    /// Compute the four components and the explanation for one tool
    pub fn score(&self, tool: &Tool, intent: &UserIntent, prompt: &str) -> ToolScore {
        let verbs = self.tables.verbs_for(intent.intent_type);

        let breakdown = ScoreBreakdown {
            keyword_match: keyword_match(tool, &intent.keywords, prompt),
            domain_relevance: domain_relevance(tool, &intent.domains, &self.domain_weights),
            type_relevance: type_relevance(tool, verbs),
            action_match: action_match(tool, prompt, &self.tables.action_categories, verbs),
        };
        let reasoning = explain(&breakdown, intent);

        ToolScore { breakdown, reasoning }
    }

    /// Score one catalog entry into a `ScoredTool`
    pub fn score_entry(&self, entry: &ToolEntry, intent: &UserIntent, prompt: &str) -> ScoredTool {
        let ToolScore { breakdown, reasoning } = self.score(&entry.tool, intent, prompt);
        ScoredTool::new(entry.tool.clone(), entry.server_name.clone(), breakdown, reasoning)
    }

    /// Score every entry, drop those below `threshold`, best first
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn score_all(
        &self,
        entries: &[ToolEntry],
        intent: &UserIntent,
        prompt: &str,
        threshold: f64,
    ) -> Vec<ScoredTool> {
        let mut scored: Vec<ScoredTool> = entries
            .iter()
            .map(|entry| self.score_entry(entry, intent, prompt))
            .filter(|s| s.score >= threshold)
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}
