//! Tool relevance scoring
//!
//! A tool is scored on four components, each in [0, 1]:
//!
//! | component          | weight | signal                                   |
//! |--------------------|--------|------------------------------------------|
//! | `keyword_match`    | 0.35   | intent keywords in name/description/schema |
//! | `domain_relevance` | 0.25   | weighted intent domains in name/description |
//! | `type_relevance`   | 0.20   | intent-type verbs in name/description    |
//! | `action_match`     | 0.20   | action verbs in the tool name            |
//!
//! The aggregate is the fixed weighted sum of the components.

mod components;
mod reasoning;
mod scorer;

pub use components::{action_match, domain_relevance, fuzzy_stem, keyword_match, type_relevance};
pub use reasoning::explain;
pub use scorer::{Scorer, ToolScore};
