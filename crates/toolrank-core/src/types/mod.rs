//! Core types for tool relevance scoring
//!
//! This module contains the data shared between the scorer, the selector
//! and the callers that feed them.

mod tool;
mod intent;
mod scored;
mod strategy;

pub use tool::{Tool, ToolEntry};
pub use intent::{IntentType, UserIntent};
pub use scored::{
    ScoreBreakdown, ScoredTool,
    KEYWORD_WEIGHT, DOMAIN_WEIGHT, TYPE_WEIGHT, ACTION_WEIGHT,
};
pub use strategy::SelectionStrategy;
