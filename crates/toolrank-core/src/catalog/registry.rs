//! Tool catalog aggregating tools from several servers

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::Logger;
use crate::log_info;
use crate::types::{Tool, ToolEntry};

use super::filter::CatalogFilter;

/// A catalog slot: one tool from one server
#[derive(Debug, Clone)]
struct CatalogSlot {
    entry: ToolEntry,
    enabled: bool,
}

/// In-memory catalog of tools, keyed by server
///
/// Enabled/disabled state is remembered per `(server, tool)` and survives a
/// server re-registering its tools.
pub struct ToolCatalog {
    /// Slots in registration order
    slots: RwLock<Vec<CatalogSlot>>,
    /// User-configured enabled/disabled state
    tool_states: RwLock<HashMap<(String, String), bool>>,
    logger: Arc<dyn Logger>,
}

impl ToolCatalog {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            slots: RwLock::new(Vec::new()),
            tool_states: RwLock::new(HashMap::new()),
            logger,
        }
    }

    /// Replace every tool advertised by `server`
    ///
    /// The state guard is held until the new slots are in place; a
    /// concurrent `set_tool_enabled` is either read here or applied to the
    /// new slot.
    pub fn register_server(&self, server: &str, tools: Vec<Tool>) {
        let count = {
            let states = self.tool_states.read();
            let new_slots: Vec<CatalogSlot> = tools
                .into_iter()
                .map(|tool| {
                    let enabled = states
                        .get(&(server.to_string(), tool.name.clone()))
                        .copied()
                        .unwrap_or(true);
                    CatalogSlot {
                        entry: ToolEntry::new(tool, server),
                        enabled,
                    }
                })
                .collect();
            let count = new_slots.len();

            let mut slots = self.slots.write();
            slots.retain(|s| s.entry.server_name != server);
            slots.extend(new_slots);
            count
        };

        log_info!(
            self.logger,
            "[ToolCatalog] Registered {} tools from {}",
            count,
            server
        );
    }

    /// Drop every tool from `server`; returns how many were removed
    pub fn remove_server(&self, server: &str) -> usize {
        let mut slots = self.slots.write();
        let before = slots.len();
        slots.retain(|s| s.entry.server_name != server);
        before - slots.len()
    }

    /// Enable or disable a tool
    pub fn set_tool_enabled(&self, server: &str, name: &str, enabled: bool) {
        // states before slots, same order as register_server
        let mut states = self.tool_states.write();
        states.insert((server.to_string(), name.to_string()), enabled);

        let mut slots = self.slots.write();
        if let Some(slot) = slots
            .iter_mut()
            .find(|s| s.entry.server_name == server && s.entry.tool.name == name)
        {
            slot.enabled = enabled;
        }
    }

    /// Entries passing `filter`, in registration order
    pub fn entries(&self, filter: &CatalogFilter) -> Vec<ToolEntry> {
        self.slots
            .read()
            .iter()
            .filter(|s| filter.matches(&s.entry.server_name, &s.entry.tool.name, s.enabled))
            .map(|s| s.entry.clone())
            .collect()
    }

    /// Registered servers, in first-registration order
    pub fn servers(&self) -> Vec<String> {
        let mut servers: Vec<String> = Vec::new();
        for slot in self.slots.read().iter() {
            if !servers.contains(&slot.entry.server_name) {
                servers.push(slot.entry.server_name.clone());
            }
        }
        servers
    }

    /// Saved enabled/disabled state for a tool, if one was ever set
    pub fn tool_state(&self, server: &str, name: &str) -> Option<bool> {
        self.tool_states
            .read()
            .get(&(server.to_string(), name.to_string()))
            .copied()
    }

    /// Count of all registered tools
    pub fn tool_count(&self) -> usize {
        self.slots.read().len()
    }

    /// Count of enabled tools
    pub fn enabled_tool_count(&self) -> usize {
        self.entries(&CatalogFilter::new()).len()
    }
}
