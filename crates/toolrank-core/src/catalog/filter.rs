//! Catalog filtering

use std::collections::HashSet;

/// Which catalog entries to hand to the scorer
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    /// If set, only include tools from these servers
    pub include_servers: Option<HashSet<String>>,
    /// Exclude tools from these servers
    pub exclude_servers: HashSet<String>,
    /// Exclude tools with these names, whatever their server
    pub exclude_tools: HashSet<String>,
    /// Only include enabled tools (default: true)
    pub only_enabled: bool,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFilter {
    /// Enabled tools from every server
    pub fn new() -> Self {
        Self {
            include_servers: None,
            exclude_servers: HashSet::new(),
            exclude_tools: HashSet::new(),
            only_enabled: true,
        }
    }

    /// Every tool, enabled or not
    pub fn all() -> Self {
        Self {
            only_enabled: false,
            ..Self::new()
        }
    }

    /// Restrict to specific servers
    pub fn with_servers(mut self, servers: impl IntoIterator<Item = String>) -> Self {
        self.include_servers = Some(servers.into_iter().collect());
        self
    }

    /// Exclude specific servers
    pub fn without_servers(mut self, servers: impl IntoIterator<Item = String>) -> Self {
        self.exclude_servers = servers.into_iter().collect();
        self
    }

    /// Exclude specific tool names
    pub fn without_tools(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.exclude_tools = names.into_iter().collect();
        self
    }

    /// Check if a tool from `server` passes this filter
    pub fn matches(&self, server: &str, tool_name: &str, enabled: bool) -> bool {
        if self.only_enabled && !enabled {
            return false;
        }
        if self.exclude_servers.contains(server) || self.exclude_tools.contains(tool_name) {
            return false;
        }
        match self.include_servers {
            Some(ref include) => include.contains(server),
            None => true,
        }
    }
}
