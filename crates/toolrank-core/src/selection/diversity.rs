//! Diversity bookkeeping for hybrid selection

use std::collections::HashMap;

/// Penalty per tool already taken from the same server
const SOURCE_STEP: f64 = 0.05;
const SOURCE_CAP: f64 = 0.2;
/// Penalty per tool already taken from the same category
const CATEGORY_STEP: f64 = 0.10;
const CATEGORY_CAP: f64 = 0.3;

/// Discount applied to a candidate that shares a server or category with
/// earlier selections; at most 0.5
pub fn diversity_penalty(source_count: usize, category_count: usize) -> f64 {
    (source_count as f64 * SOURCE_STEP).min(SOURCE_CAP)
        + (category_count as f64 * CATEGORY_STEP).min(CATEGORY_CAP)
}

/// Running counts of accepted tools per server and per category
#[derive(Debug, Default)]
pub struct DiversityTracker {
    sources: HashMap<String, usize>,
    categories: HashMap<String, usize>,
}

impl DiversityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Penalty a candidate from `source` in `category` would receive now
    pub fn penalty(&self, source: &str, category: &str) -> f64 {
        diversity_penalty(self.source_count(source), self.category_count(category))
    }

    /// Record an accepted candidate
    pub fn record(&mut self, source: &str, category: &str) {
        *self.sources.entry(source.to_string()).or_insert(0) += 1;
        *self.categories.entry(category.to_string()).or_insert(0) += 1;
    }

    pub fn source_count(&self, source: &str) -> usize {
        self.sources.get(source).copied().unwrap_or(0)
    }

    pub fn category_count(&self, category: &str) -> usize {
        self.categories.get(category).copied().unwrap_or(0)
    }
}
