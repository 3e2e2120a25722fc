//! The four relevance components
//!
//! Each function is pure and returns a value in [0, 1]. Text comparisons are
//! plain lowercase substring checks.

use std::collections::HashMap;

use crate::tables::{ActionCategory, DEFAULT_DOMAIN_WEIGHT};
use crate::types::Tool;

/// Award for a keyword found verbatim in the tool text
const DIRECT_MATCH: f64 = 1.0;
/// Award for a keyword whose stem is found in the tool text
const STEM_MATCH: f64 = 0.7;
/// Added once when the prompt names the tool
const NAME_IN_PROMPT_BONUS: f64 = 1.0;

/// Domain score when the intent carries no domains
const NEUTRAL_DOMAIN: f64 = 0.5;
/// Type score when the intent type has no expected verbs
const NEUTRAL_TYPE: f64 = 0.5;
/// Type score when none of the expected verbs appear
const BASELINE_TYPE: f64 = 0.3;

/// Action verb in the tool name and in the prompt
const ACTION_IN_PROMPT: f64 = 1.0;
/// Intent verb in the tool name
const ACTION_FOR_INTENT: f64 = 0.8;
/// Action verb in the tool name only
const ACTION_IN_NAME: f64 = 0.6;

/// Leading part of a keyword used for fuzzy matching
///
/// Keeps `max(4, len - 2)` characters, so short keywords are kept whole.
pub fn fuzzy_stem(keyword: &str) -> String {
    let len = keyword.chars().count();
    keyword.chars().take(len.saturating_sub(2).max(4)).collect()
}

/// How well the intent keywords describe the tool
///
/// The name-in-prompt bonus is added before dividing by the keyword count,
/// so its weight shrinks as keywords are added. The final clamp caps the
/// ratio at 1.0.
pub fn keyword_match(tool: &Tool, keywords: &[String], prompt: &str) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }

    let text = tool.search_text();
    let mut total: f64 = keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.to_lowercase();
            if text.contains(&keyword) {
                DIRECT_MATCH
            } else if text.contains(&fuzzy_stem(&keyword)) {
                STEM_MATCH
            } else {
                0.0
            }
        })
        .sum();

    if prompt.to_lowercase().contains(&tool.name.to_lowercase()) {
        total += NAME_IN_PROMPT_BONUS;
    }

    (total / keywords.len() as f64).min(1.0)
}

/// Mean weight of the intent domains mentioned by the tool
///
/// Domains are lowercased before the containment test, so `"Solidity"`
/// matches a tool described as "solidity". The weight is looked up under
/// the domain as given, then lowercased, then falls back to 0.5.
///
/// Returns 0.5 when no domains were supplied but 0.0 when domains were
/// supplied and none matched.
pub fn domain_relevance(tool: &Tool, domains: &[String], weights: &HashMap<String, f64>) -> f64 {
    if domains.is_empty() {
        return NEUTRAL_DOMAIN;
    }

    let text = tool.name_and_description();
    let mut accumulated = 0.0;
    let mut matches = 0usize;

    for domain in domains {
        let needle = domain.to_lowercase();
        if !text.contains(&needle) {
            continue;
        }
        let weight = weights
            .get(domain)
            .or_else(|| weights.get(&needle))
            .copied()
            .unwrap_or(DEFAULT_DOMAIN_WEIGHT);
        accumulated += weight;
        matches += 1;
    }

    if matches == 0 {
        0.0
    } else {
        accumulated / matches as f64
    }
}

/// Whether the tool looks like it performs the kind of task the intent asks for
pub fn type_relevance(tool: &Tool, expected_verbs: &[String]) -> f64 {
    if expected_verbs.is_empty() {
        return NEUTRAL_TYPE;
    }

    let text = tool.name_and_description();
    if expected_verbs.iter().any(|verb| text.contains(verb.as_str())) {
        1.0
    } else {
        BASELINE_TYPE
    }
}

/// Strongest action signal carried by the tool name
///
/// Both passes raise one running maximum; a later, weaker match never
/// lowers a stronger earlier one.
pub fn action_match(
    tool: &Tool,
    prompt: &str,
    categories: &[ActionCategory],
    expected_verbs: &[String],
) -> f64 {
    let name = tool.name.to_lowercase();
    let prompt = prompt.to_lowercase();
    let mut best: f64 = 0.0;

    for verb in categories.iter().flat_map(|c| c.verbs.iter()) {
        if name.contains(verb.as_str()) {
            let award = if prompt.contains(verb.as_str()) {
                ACTION_IN_PROMPT
            } else {
                ACTION_IN_NAME
            };
            best = best.max(award);
        }
    }

    for verb in expected_verbs {
        if name.contains(verb.as_str()) {
            best = best.max(ACTION_FOR_INTENT);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::ReferenceTables;
    use crate::types::IntentType;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fuzzy_stem() {
        assert_eq!(fuzzy_stem("compilation"), "compilati");
        assert_eq!(fuzzy_stem("compiler"), "compil");
        assert_eq!(fuzzy_stem("tests"), "test");
        assert_eq!(fuzzy_stem("abc"), "abc");
        assert_eq!(fuzzy_stem("déployer"), "déploy");
    }

    #[test]
    fn test_keyword_empty_is_zero() {
        let tool = Tool::new("compile_contract");
        assert_eq!(keyword_match(&tool, &[], "compile_contract please"), 0.0);
    }

    #[test]
    fn test_keyword_direct_and_stem() {
        let tool = Tool::new("compile_contract").with_description("Compiles Solidity contracts");

        assert!(approx(keyword_match(&tool, &strings(&["COMPILE"]), ""), 1.0));
        // "compiler" -> "compil"
        assert!(approx(keyword_match(&tool, &strings(&["compiler"]), ""), 0.7));
        assert!(approx(
            keyword_match(&tool, &strings(&["compile", "compiler", "wallet", "bridge"]), ""),
            1.7 / 4.0
        ));
    }

    #[test]
    fn test_keyword_matches_schema_text() {
        let tool = Tool::new("run").with_schema(json!({
            "properties": { "network": { "type": "string" } }
        }));
        assert!(approx(keyword_match(&tool, &strings(&["network"]), ""), 1.0));
    }

    #[test]
    fn test_keyword_bonus_is_clamped() {
        let tool = Tool::new("compile_contract");
        let score = keyword_match(&tool, &strings(&["compile", "zzzz"]), "run COMPILE_CONTRACT now");
        // (1.0 + 0.0 + 1.0) / 2
        assert!(approx(score, 1.0));

        let score = keyword_match(&tool, &strings(&["compile"]), "compile_contract");
        assert!(approx(score, 1.0));
    }

    #[test]
    fn test_keyword_bonus_shrinks_with_count() {
        let tool = Tool::new("fmt");
        let score = keyword_match(&tool, &strings(&["aaaa", "bbbb", "cccc"]), "use fmt");
        assert!(approx(score, 1.0 / 3.0));
    }

    #[test]
    fn test_domain_neutral_when_empty() {
        let tool = Tool::new("anything");
        assert_eq!(domain_relevance(&tool, &[], &HashMap::new()), 0.5);
    }

    #[test]
    fn test_domain_zero_when_nothing_matches() {
        let tool = Tool::new("weather").with_description("Get the forecast");
        let weights = ReferenceTables::builtin().domain_priors.clone();
        assert_eq!(domain_relevance(&tool, &strings(&["solidity"]), &weights), 0.0);
    }

    #[test]
    fn test_domain_mean_of_matches() {
        let tool = Tool::new("Audit").with_description("Audit Solidity and Rust sources");
        let weights = ReferenceTables::builtin().domain_priors.clone();

        let score = domain_relevance(&tool, &strings(&["solidity", "rust", "python"]), &weights);
        assert!(approx(score, (1.0 + 0.6) / 2.0));

        // unknown domain falls back to 0.5
        let score = domain_relevance(&tool, &strings(&["sources"]), &weights);
        assert!(approx(score, 0.5));
    }

    #[test]
    fn test_domain_lookup_case() {
        let tool = Tool::new("solidity_lint");
        let weights = HashMap::from([("solidity".to_string(), 0.4)]);
        assert!(approx(domain_relevance(&tool, &strings(&["Solidity"]), &weights), 0.4));
    }

    #[test]
    fn test_type_relevance() {
        let tables = ReferenceTables::builtin();
        let debugging = tables.verbs_for(IntentType::Debugging);

        let hit = Tool::new("session").with_description("Set a breakpoint");
        assert_eq!(type_relevance(&hit, debugging), 1.0);

        let miss = Tool::new("weather");
        assert_eq!(type_relevance(&miss, debugging), 0.3);

        assert_eq!(type_relevance(&miss, &[]), 0.5);
    }

    #[test]
    fn test_action_name_only_and_prompt() {
        let tables = ReferenceTables::builtin();
        let tool = Tool::new("deploy_contract");

        let verbs = tables.verbs_for(IntentType::Documentation);
        assert_eq!(action_match(&tool, "ship it", &tables.action_categories, verbs), 0.6);
        assert_eq!(action_match(&tool, "please DEPLOY", &tables.action_categories, verbs), 1.0);
    }

    #[test]
    fn test_action_intent_pass_raises_max() {
        let tables = ReferenceTables::builtin();
        let debugging = tables.verbs_for(IntentType::Debugging);

        // "list" scores 0.6 in the category pass, "step" lifts it to 0.8
        let tool = Tool::new("step_list");
        assert_eq!(action_match(&tool, "x", &tables.action_categories, debugging), 0.8);
    }

    #[test]
    fn test_action_intent_pass_never_lowers() {
        let tables = ReferenceTables::builtin();
        let debugging = tables.verbs_for(IntentType::Debugging);

        let tool = Tool::new("compile_step");
        assert_eq!(
            action_match(&tool, "compile it", &tables.action_categories, debugging),
            1.0
        );
    }

    #[test]
    fn test_action_nothing_matched() {
        let tables = ReferenceTables::builtin();
        let tool = Tool::new("weather");
        assert_eq!(
            action_match(&tool, "weather", &tables.action_categories, tables.verbs_for(IntentType::Coding)),
            0.0
        );
    }
}
