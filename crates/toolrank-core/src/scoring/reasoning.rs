//! Human-readable explanation of a score breakdown

use crate::types::{ScoreBreakdown, UserIntent};

/// A component must exceed this to be mentioned
const MENTION_THRESHOLD: f64 = 0.7;

const FALLBACK: &str = "General utility tool";

/// Explain a breakdown, one clause per strong component
///
/// Clauses follow component order: keyword, domain, type, action.
pub fn explain(breakdown: &ScoreBreakdown, intent: &UserIntent) -> String {
    let mut clauses = Vec::new();

    if breakdown.keyword_match > MENTION_THRESHOLD {
        clauses.push(format!(
            "Matches {:.0}% of keywords",
            breakdown.keyword_match * 100.0
        ));
    }
    if breakdown.domain_relevance > MENTION_THRESHOLD {
        clauses.push(format!("Relevant to {} domain", intent.domains.join(", ")));
    }
    if breakdown.type_relevance > MENTION_THRESHOLD {
        clauses.push(format!("Suited to {} tasks", intent.intent_type));
    }
    if breakdown.action_match > MENTION_THRESHOLD {
        clauses.push("Supports the requested action".to_string());
    }

    if clauses.is_empty() {
        FALLBACK.to_string()
    } else {
        clauses.join("; ")
    }
}
