//! Selection strategy option

use serde::{Deserialize, Serialize};

/// How a scored list is reduced to the final tool set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStrategy {
    /// Highest aggregate score first
    Priority,
    /// Highest content match first, ignoring intent type
    Semantic,
    /// Score order with a diversity penalty per source and category
    Hybrid,
    /// Any other tag; selection falls back to plain truncation
    #[serde(other)]
    Unrecognized,
}

impl Default for SelectionStrategy {
    fn default() -> Self {
        SelectionStrategy::Hybrid
    }
}

impl SelectionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStrategy::Priority => "priority",
            SelectionStrategy::Semantic => "semantic",
            SelectionStrategy::Hybrid => "hybrid",
            SelectionStrategy::Unrecognized => "unrecognized",
        }
    }
}

impl From<&str> for SelectionStrategy {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "priority" => SelectionStrategy::Priority,
            "semantic" => SelectionStrategy::Semantic,
            "hybrid" => SelectionStrategy::Hybrid,
            _ => SelectionStrategy::Unrecognized,
        }
    }
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
