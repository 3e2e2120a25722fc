//! ToolRank Core
//!
//! Runtime-agnostic tool relevance scoring and selection.
//! Hosts (editor extensions, agent gateways, CLIs) hand in the tools their
//! MCP servers advertise, a classified user intent and the raw prompt, and
//! get back a ranked, bounded and diverse subset.
//!
//! ## Pipeline
//!
//! ```text
//! ToolCatalog ──▶ Vec<ToolEntry> ──▶ score_tools ──▶ threshold + sort ──▶ select ──▶ Vec<ScoredTool>
//!                                     (4 components)                    (priority | semantic | hybrid)
//! ```
//!
//! ```rust,ignore
//! use toolrank_core::{ConfigResolver, ToolCatalog, CatalogFilter, ToolRelevanceService};
//!
//! let config = ConfigResolver::native(Some(workspace), logger.clone()).resolve().await?.config;
//!
//! catalog.register_server("hardhat", hardhat_tools);
//! let entries = catalog.entries(&CatalogFilter::new());
//!
//! let service = ToolRelevanceService::with_logger(logger);
//! let selected = service.select_tools(&entries, &intent, prompt, &config).await;
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod tables;
pub mod scoring;
pub mod selection;
pub mod catalog;
pub mod service;

// Re-export commonly used types
pub use types::{
    Tool, ToolEntry,
    IntentType, UserIntent,
    ScoreBreakdown, ScoredTool,
    SelectionStrategy,
};

pub use logging::{Logger, NoOpLogger, ConsoleLogger, FileLogger, MemoryLogger, LogLevel};

pub use config::{
    ConfigProvider, ConfigError, ConfigResult,
    MemoryConfigProvider, FileConfigProvider, ConfigLevel,
    ConfigResolver, ResolvedConfig,
    RelevanceConfig, RelevanceSettings,
};

pub use tables::{ReferenceTables, ActionCategory};

pub use scoring::{Scorer, ToolScore};

pub use selection::Selector;

pub use catalog::{ToolCatalog, CatalogFilter};

pub use service::ToolRelevanceService;
