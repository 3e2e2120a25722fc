//! Tool selection strategies
//!
//! - `priority`: best aggregate score first
//! - `semantic`: best content match first (keyword, domain, action)
//! - `hybrid`: score order with a diversity penalty for repeated servers
//!   and categories
//!
//! Any other strategy tag truncates the input as-is.

mod diversity;
mod selector;

pub use diversity::{diversity_penalty, DiversityTracker};
pub use selector::{select_by_priority, select_by_semantic, Selector, MIN_ADJUSTED_SCORE};
