//! User intent types
//!
//! Intents are produced by an external classifier and are read-only here.

use serde::{Deserialize, Serialize};

/// What kind of task the user is trying to accomplish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentType {
    Coding,
    Documentation,
    Debugging,
    Explanation,
    Generation,
    Completion,
}

impl IntentType {
    /// All intent types, in declaration order
    pub const ALL: [IntentType; 6] = [
        IntentType::Coding,
        IntentType::Documentation,
        IntentType::Debugging,
        IntentType::Explanation,
        IntentType::Generation,
        IntentType::Completion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentType::Coding => "coding",
            IntentType::Documentation => "documentation",
            IntentType::Debugging => "debugging",
            IntentType::Explanation => "explanation",
            IntentType::Generation => "generation",
            IntentType::Completion => "completion",
        }
    }
}

impl std::fmt::Display for IntentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified user intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIntent {
    /// Intent category
    #[serde(rename = "type")]
    pub intent_type: IntentType,
    /// Free-text keywords extracted from the prompt
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Technical domains the prompt touches (e.g. "solidity")
    #[serde(default)]
    pub domains: Vec<String>,
}

impl UserIntent {
    /// Create an intent with no keywords or domains
    pub fn new(intent_type: IntentType) -> Self {
        Self {
            intent_type,
            keywords: Vec::new(),
            domains: Vec::new(),
        }
    }

    /// Set the keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the domains
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }
}
