//! Strategy-based reduction of a scored tool list

use crate::log_debug;
use crate::logging::Logger;
use crate::tables::ReferenceTables;
use crate::types::{ScoredTool, SelectionStrategy};

use super::diversity::DiversityTracker;

/// Hybrid candidates must keep more than this after the diversity penalty
pub const MIN_ADJUSTED_SCORE: f64 = 0.15;

/// Picks at most `max_count` tools from a scored list
pub struct Selector<'a> {
    tables: &'a ReferenceTables,
    logger: &'a dyn Logger,
}

impl<'a> Selector<'a> {
    pub fn new(tables: &'a ReferenceTables, logger: &'a dyn Logger) -> Self {
        Self { tables, logger }
    }

    /// Reduce `scored` to at most `max_count` tools under `strategy`
    pub fn select(
        &self,
        scored: &[ScoredTool],
        max_count: usize,
        strategy: SelectionStrategy,
    ) -> Vec<ScoredTool> {
        match strategy {
            SelectionStrategy::Priority => select_by_priority(scored, max_count),
            SelectionStrategy::Semantic => select_by_semantic(scored, max_count),
            SelectionStrategy::Hybrid => self.select_hybrid(scored, max_count),
            SelectionStrategy::Unrecognized => scored.iter().take(max_count).cloned().collect(),
        }
    }

    /// Greedy pass in input order, discounting repeated servers and categories
    ///
    /// A rejected candidate is never reconsidered and accepted tools keep
    /// their input order.
    pub fn select_hybrid(&self, scored: &[ScoredTool], max_count: usize) -> Vec<ScoredTool> {
        let mut tracker = DiversityTracker::new();
        let mut selected = Vec::with_capacity(max_count.min(scored.len()));

        for candidate in scored {
            if selected.len() >= max_count {
                break;
            }

            let category = self.tables.category_of(candidate.name());
            let penalty = tracker.penalty(&candidate.server_name, category);
            let adjusted = candidate.score * (1.0 - penalty);

            if adjusted > MIN_ADJUSTED_SCORE {
                tracker.record(&candidate.server_name, category);
                selected.push(candidate.clone());
            } else {
                log_debug!(
                    self.logger,
                    "[Selector] Skipping {}/{} ({}): adjusted {:.3} after penalty {:.2}",
                    candidate.server_name,
                    candidate.name(),
                    category,
                    adjusted,
                    penalty
                );
            }
        }

        selected
    }
}

/// Highest aggregate first; ties keep input order
pub fn select_by_priority(scored: &[ScoredTool], max_count: usize) -> Vec<ScoredTool> {
    let mut sorted = scored.to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted.truncate(max_count);
    sorted
}

/// Highest mean of keyword, domain and action match first
pub fn select_by_semantic(scored: &[ScoredTool], max_count: usize) -> Vec<ScoredTool> {
    let mut sorted = scored.to_vec();
    sorted.sort_by(|a, b| b.breakdown.semantic().total_cmp(&a.breakdown.semantic()));
    sorted.truncate(max_count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{MemoryLogger, NoOpLogger};
    use crate::types::{ScoreBreakdown, Tool};

    /// Scored tool whose aggregate is exactly `score`
    fn scored(name: &str, server: &str, score: f64) -> ScoredTool {
        let breakdown = ScoreBreakdown {
            keyword_match: score,
            domain_relevance: score,
            type_relevance: score,
            action_match: score,
        };
        let mut tool = ScoredTool::new(Tool::new(name), server, breakdown, "");
        // pin the aggregate so boundary checks are not at the mercy of rounding
        tool.score = score;
        tool
    }

    fn with_breakdown(name: &str, k: f64, d: f64, t: f64, a: f64) -> ScoredTool {
        let breakdown = ScoreBreakdown {
            keyword_match: k,
            domain_relevance: d,
            type_relevance: t,
            action_match: a,
        };
        ScoredTool::new(Tool::new(name), "srv", breakdown, "")
    }

    fn names(tools: &[ScoredTool]) -> Vec<&str> {
        tools.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_priority_sorts_and_truncates() {
        let input = vec![
            scored("a", "s", 0.4),
            scored("b", "s", 0.9),
            scored("c", "s", 0.6),
            scored("d", "s", 0.9),
        ];
        let out = select_by_priority(&input, 3);

        assert_eq!(names(&out), vec!["b", "d", "c"]);
        for pair in out.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_semantic_ignores_type() {
        let input = vec![
            with_breakdown("typed", 0.2, 0.2, 1.0, 0.2),
            with_breakdown("content", 0.8, 0.5, 0.0, 0.6),
            with_breakdown("middle", 0.5, 0.5, 0.3, 0.5),
        ];
        let out = select_by_semantic(&input, 2);
        assert_eq!(names(&out), vec!["content", "middle"]);
    }

    #[test]
    fn test_hybrid_same_source_and_category() {
        let tables = ReferenceTables::builtin();
        let logger = NoOpLogger::new();
        let selector = Selector::new(tables, &logger);

        let input = vec![
            scored("compile_a", "chain", 0.9),
            scored("compile_b", "chain", 0.85),
            scored("compile_c", "chain", 0.8),
            // third repeat: 0.2 * (1 - 0.45) = 0.11, rejected
            scored("compile_d", "chain", 0.2),
        ];
        let out = selector.select(&input, 4, SelectionStrategy::Hybrid);
        assert_eq!(names(&out), vec!["compile_a", "compile_b", "compile_c"]);

        let category = tables.category_of("compile_a");
        assert_eq!(category, "compilation");

        let mut tracker = DiversityTracker::new();
        assert_eq!(tracker.penalty("chain", category), 0.0);
        tracker.record("chain", category);
        let second = tracker.penalty("chain", category);
        assert!((second - 0.15).abs() < 1e-9);
        assert!((0.85 * (1.0 - second) - 0.7225).abs() < 1e-9);
        tracker.record("chain", category);
        let third = tracker.penalty("chain", category);
        assert!((third - 0.30).abs() < 1e-9);
        assert!((0.8 * (1.0 - third) - 0.56).abs() < 1e-9);
        tracker.record("chain", category);
        assert!(0.2 * (1.0 - tracker.penalty("chain", category)) <= MIN_ADJUSTED_SCORE);
    }

    #[test]
    fn test_hybrid_rejects_low_adjusted_and_keeps_order() {
        let tables = ReferenceTables::builtin();
        let logger = MemoryLogger::new();
        let selector = Selector::new(tables, &logger);

        let input = vec![
            scored("build_x", "chain", 0.5),
            // penalty 0.15 -> 0.17 * 0.85 = 0.1445, rejected
            scored("build_y", "chain", 0.17),
            // different server and category, no penalty
            scored("weather", "misc", 0.16),
            // penalty 0.05 + 0.10 -> 0.4 * 0.85 = 0.34
            scored("bundle_z", "chain", 0.4),
        ];
        let out = selector.select_hybrid(&input, 10);

        assert_eq!(names(&out), vec!["build_x", "weather", "bundle_z"]);
        assert!(logger.contains("build_y"));
    }

    #[test]
    fn test_hybrid_rejects_exact_boundary() {
        let tables = ReferenceTables::builtin();
        let logger = NoOpLogger::new();
        let selector = Selector::new(tables, &logger);

        let input = vec![scored("weather", "misc", 0.15)];
        assert!(selector.select_hybrid(&input, 5).is_empty());
    }

    #[test]
    fn test_hybrid_stops_at_max() {
        let tables = ReferenceTables::builtin();
        let logger = NoOpLogger::new();
        let selector = Selector::new(tables, &logger);

        let input: Vec<_> = (0..8)
            .map(|i| scored(&format!("tool_{}", i), &format!("srv{}", i), 0.9))
            .collect();
        let out = selector.select(&input, 5, SelectionStrategy::Hybrid);
        assert_eq!(out.len(), 5);
        assert_eq!(out[4].name(), "tool_4");
    }

    #[test]
    fn test_unrecognized_truncates_without_sorting() {
        let tables = ReferenceTables::builtin();
        let logger = NoOpLogger::new();
        let selector = Selector::new(tables, &logger);

        let input = vec![
            scored("a", "s", 0.2),
            scored("b", "s", 0.9),
            scored("c", "s", 0.5),
        ];
        let out = selector.select(&input, 2, SelectionStrategy::Unrecognized);
        assert_eq!(names(&out), vec!["a", "b"]);
    }

    #[test]
    fn test_zero_max_selects_nothing() {
        let tables = ReferenceTables::builtin();
        let logger = NoOpLogger::new();
        let selector = Selector::new(tables, &logger);
        let input = vec![scored("a", "s", 0.9)];

        for strategy in [
            SelectionStrategy::Priority,
            SelectionStrategy::Semantic,
            SelectionStrategy::Hybrid,
            SelectionStrategy::Unrecognized,
        ] {
            assert!(selector.select(&input, 0, strategy).is_empty());
        }
    }
}
