//! Static reference tables used by the scorer and the selector
//!
//! Three read-only lookups:
//! - domain priors: how much a matched domain is worth
//! - intent verbs: action verbs expected for each intent type
//! - action categories: verb families used for action matching and
//!   diversity classification
//!
//! Tables are plain data. The service receives them at construction, so
//! hosts and tests can swap in their own without touching global state.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::IntentType;

/// Weight used when a domain has neither an override nor a prior
pub const DEFAULT_DOMAIN_WEIGHT: f64 = 0.5;

/// Category assigned when no action verb appears in a tool name
pub const GENERAL_CATEGORY: &str = "general";

/// A named family of action verbs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCategory {
    pub name: String,
    pub verbs: Vec<String>,
}

impl ActionCategory {
    pub fn new(name: &str, verbs: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            verbs: verbs.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Reference data consulted while scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTables {
    /// Built-in relevance weight per domain, in [0, 1]
    pub domain_priors: HashMap<String, f64>,
    /// Expected action verbs per intent type
    pub intent_verbs: HashMap<IntentType, Vec<String>>,
    /// Action categories; order matters, the first match classifies a tool
    pub action_categories: Vec<ActionCategory>,
}

static BUILTIN: Lazy<ReferenceTables> = Lazy::new(|| {
    let domain_priors = [
        ("solidity", 1.0),
        ("ethereum", 0.9),
        ("smart-contracts", 0.9),
        ("security", 0.9),
        ("defi", 0.8),
        ("web3", 0.8),
        ("hardhat", 0.8),
        ("foundry", 0.8),
        ("testing", 0.7),
        ("deployment", 0.7),
        ("javascript", 0.6),
        ("typescript", 0.6),
        ("python", 0.6),
        ("rust", 0.6),
        ("general", 0.3),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let verbs = |list: &[&str]| list.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    let intent_verbs = HashMap::from([
        (
            IntentType::Coding,
            verbs(&["compile", "build", "write", "implement", "refactor", "format", "lint", "test"]),
        ),
        (
            IntentType::Documentation,
            verbs(&["docs", "document", "readme", "reference", "search", "lookup"]),
        ),
        (
            IntentType::Debugging,
            verbs(&["debug", "trace", "inspect", "breakpoint", "step", "watch"]),
        ),
        (
            IntentType::Explanation,
            verbs(&["explain", "describe", "analyze", "summarize", "show"]),
        ),
        (
            IntentType::Generation,
            verbs(&["generate", "create", "scaffold", "template", "new"]),
        ),
        (
            IntentType::Completion,
            verbs(&["complete", "suggest", "autocomplete", "fill", "snippet"]),
        ),
    ]);

    let action_categories = vec![
        ActionCategory::new(
            "file_operations",
            &["read", "write", "create", "delete", "list", "copy", "move", "rename"],
        ),
        ActionCategory::new("compilation", &["compile", "build", "transpile", "bundle"]),
        ActionCategory::new("deployment", &["deploy", "publish", "release", "migrate"]),
        ActionCategory::new("debugging", &["debug", "trace", "inspect", "breakpoint", "profile"]),
        ActionCategory::new("analysis", &["analyze", "audit", "scan", "lint", "check", "review"]),
        ActionCategory::new("configuration", &["config", "setup", "install", "init"]),
        ActionCategory::new("tutorial", &["learn", "tutorial", "guide", "example"]),
    ];

    ReferenceTables {
        domain_priors,
        intent_verbs,
        action_categories,
    }
});

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl ReferenceTables {
    /// Shared built-in tables
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN
    }

    /// Tables with nothing in them; every lookup falls back to its neutral value
    pub fn empty() -> Self {
        Self {
            domain_priors: HashMap::new(),
            intent_verbs: HashMap::new(),
            action_categories: Vec::new(),
        }
    }

    /// Expected verbs for an intent type; empty when the type has no entry
    pub fn verbs_for(&self, intent_type: IntentType) -> &[String] {
        self.intent_verbs
            .get(&intent_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Priors with `overrides` laid on top; explicit entries win
    pub fn merged_domain_weights(&self, overrides: &HashMap<String, f64>) -> HashMap<String, f64> {
        let mut merged = self.domain_priors.clone();
        merged.extend(overrides.iter().map(|(k, v)| (k.clone(), *v)));
        merged
    }

    /// First category whose verbs appear in `tool_name`, or `"general"`
    pub fn category_of(&self, tool_name: &str) -> &str {
        let name = tool_name.to_lowercase();
        self.action_categories
            .iter()
            .find(|c| c.verbs.iter().any(|v| name.contains(v.as_str())))
            .map(|c| c.name.as_str())
            .unwrap_or(GENERAL_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_intent() {
        let tables = ReferenceTables::builtin();
        for ty in IntentType::ALL {
            assert!(!tables.verbs_for(ty).is_empty(), "no verbs for {}", ty);
        }
        assert_eq!(tables.domain_priors.get("solidity"), Some(&1.0));
    }

    #[test]
    fn test_category_order_is_fixed() {
        let names: Vec<_> = ReferenceTables::builtin()
            .action_categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "file_operations",
                "compilation",
                "deployment",
                "debugging",
                "analysis",
                "configuration",
                "tutorial"
            ]
        );
    }

    #[test]
    fn test_category_first_match_wins() {
        let tables = ReferenceTables::builtin();
        // "write" (file_operations) is listed before "build" (compilation)
        assert_eq!(tables.category_of("write_build_config"), "file_operations");
        assert_eq!(tables.category_of("Deploy_Contract"), "deployment");
        assert_eq!(tables.category_of("weather"), GENERAL_CATEGORY);
    }

    #[test]
    fn test_merged_weights_prefer_overrides() {
        let tables = ReferenceTables::builtin();
        let overrides = HashMap::from([
            ("solidity".to_string(), 0.2),
            ("vyper".to_string(), 0.9),
        ]);
        let merged = tables.merged_domain_weights(&overrides);

        assert_eq!(merged["solidity"], 0.2);
        assert_eq!(merged["vyper"], 0.9);
        assert_eq!(merged["ethereum"], 0.9);
    }

    #[test]
    fn test_empty_tables() {
        let tables = ReferenceTables::empty();
        assert!(tables.verbs_for(IntentType::Coding).is_empty());
        assert_eq!(tables.category_of("compile"), GENERAL_CATEGORY);
    }
}
