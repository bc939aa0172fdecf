//! Tool registry
//!
//! Holds the agent-callable tools and turns every call into a [`ToolResult`];
//! failures become error results instead of propagating.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::detect_stack::DetectStackTool;
use super::integrate_checkout::IntegrateCheckoutTool;
use super::trait_def::{Tool, ToolError};
use crate::integration::IntegrationGenerator;

/// Name, description and JSON schema of one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Outcome of a tool call as reported to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub is_error: bool,
    pub content: Value,
}

impl ToolResult {
    pub fn success(content: Value) -> Self {
        Self {
            is_error: false,
            content,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            content: Value::String(message.into()),
        }
    }
}

impl From<Result<Value, ToolError>> for ToolResult {
    fn from(result: Result<Value, ToolError>) -> Self {
        match result {
            Ok(content) => Self::success(content),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

/// Registry of all available tools
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Registry with `detect_stack` and `integrate_checkout`
    pub fn new(generator: IntegrationGenerator) -> Self {
        let tools: Vec<Arc<dyn Tool>> = vec![
            Arc::new(DetectStackTool::new()),
            Arc::new(IntegrateCheckoutTool::new(generator)),
        ];
        Self { tools }
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.schema(),
            })
            .collect()
    }

    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Runs `name` with `arguments`; never fails
    pub async fn call(&self, name: &str, arguments: Value) -> ToolResult {
        let result = match self.get_tool(name) {
            Some(tool) => {
                info!(tool = name, "Executing tool");
                tool.execute(arguments).await
            }
            None => Err(ToolError::UnknownTool(name.to_string())),
        };

        if let Err(e) = &result {
            warn!(tool = name, error = %e, "Tool call failed");
        }
        result.into()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
