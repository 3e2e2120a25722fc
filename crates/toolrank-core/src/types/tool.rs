//! Tool catalog types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition as advertised by an MCP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (unique within its server)
    pub name: String,
    /// Description of what the tool does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema", default)]
    pub input_schema: Value,
}

impl Tool {
    /// Create a new tool definition with an empty object schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: Value::Object(Default::default()),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the input schema
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Description, or an empty string when the server did not provide one
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Lowercased `name description`, used for domain and verb matching
    pub fn name_and_description(&self) -> String {
        format!("{} {}", self.name, self.description_or_empty()).to_lowercase()
    }

    /// Lowercased `name description schema`, used for keyword matching
    pub fn search_text(&self) -> String {
        let schema = serde_json::to_string(&self.input_schema).unwrap_or_default();
        format!("{} {} {}", self.name, self.description_or_empty(), schema).to_lowercase()
    }
}

/// A tool together with the server it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// The tool definition
    pub tool: Tool,
    /// Source identifier of the originating server
    #[serde(rename = "serverName")]
    pub server_name: String,
}

impl ToolEntry {
    /// Pair a tool with its server
    pub fn new(tool: Tool, server_name: impl Into<String>) -> Self {
        Self {
            tool,
            server_name: server_name.into(),
        }
    }
}
