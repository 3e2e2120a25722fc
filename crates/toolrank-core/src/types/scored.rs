//! Scored tool types

use serde::{Deserialize, Serialize};

use super::tool::Tool;

/// Weight of the keyword component in the aggregate score
pub const KEYWORD_WEIGHT: f64 = 0.35;
/// Weight of the domain component in the aggregate score
pub const DOMAIN_WEIGHT: f64 = 0.25;
/// Weight of the intent-type component in the aggregate score
pub const TYPE_WEIGHT: f64 = 0.20;
/// Weight of the action component in the aggregate score
pub const ACTION_WEIGHT: f64 = 0.20;

/// The four relevance components behind an aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub keyword_match: f64,
    pub domain_relevance: f64,
    pub type_relevance: f64,
    pub action_match: f64,
}

impl ScoreBreakdown {
    /// Fixed weighted sum of the components
    pub fn aggregate(&self) -> f64 {
        self.keyword_match * KEYWORD_WEIGHT
            + self.domain_relevance * DOMAIN_WEIGHT
            + self.type_relevance * TYPE_WEIGHT
            + self.action_match * ACTION_WEIGHT
    }

    /// Mean of the content-based components; intent type is left out
    pub fn semantic(&self) -> f64 {
        (self.keyword_match + self.domain_relevance + self.action_match) / 3.0
    }
}

/// A tool annotated with its relevance for one intent and prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTool {
    pub tool: Tool,
    pub server_name: String,
    /// Aggregate relevance, always `breakdown.aggregate()`
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Human-readable explanation of the score
    pub reasoning: String,
}

impl ScoredTool {
    /// Build a scored tool; the aggregate is derived from the breakdown
    pub fn new(
        tool: Tool,
        server_name: impl Into<String>,
        breakdown: ScoreBreakdown,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            tool,
            server_name: server_name.into(),
            score: breakdown.aggregate(),
            breakdown,
            reasoning: reasoning.into(),
        }
    }

    /// Tool name
    pub fn name(&self) -> &str {
        &self.tool.name
    }
}
