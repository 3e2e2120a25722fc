//! Tool catalog
//!
//! Aggregates the tools advertised by several servers into one list of
//! `ToolEntry` values for the relevance service.
//!
//! ```text
//! server "hardhat" ──┐
//! server "fs"      ──┼──▶ ToolCatalog ──(CatalogFilter)──▶ Vec<ToolEntry>
//! server "docs"    ──┘
//! ```

mod filter;
mod registry;

pub use filter::CatalogFilter;
pub use registry::ToolCatalog;
