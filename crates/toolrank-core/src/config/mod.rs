//! Relevance configuration
//!
//! Settings come from one or more providers:
//! - `MemoryConfigProvider`: In-memory, for tests and host-pushed settings
//! - `FileConfigProvider`: YAML file-based (user/workspace level)
//!
//! `ConfigResolver` layers them into a validated `RelevanceConfig`.

mod traits;
mod settings;
mod memory;
mod file;
mod resolver;

pub use traits::{ConfigProvider, ConfigError, ConfigResult};
pub use settings::{RelevanceConfig, RelevanceSettings, DEFAULT_MAX_TOOLS, DEFAULT_RELEVANCE_THRESHOLD};
pub use memory::MemoryConfigProvider;
pub use file::{FileConfigProvider, ConfigLevel};
pub use resolver::{ConfigResolver, ResolvedConfig};
