//! Agent-callable tool interface

pub mod detect_stack;
pub mod integrate_checkout;
pub mod registry;
pub mod trait_def;

pub use detect_stack::DetectStackTool;
pub use integrate_checkout::IntegrateCheckoutTool;
pub use registry::{ToolDefinition, ToolRegistry, ToolResult};
pub use trait_def::{Tool, ToolError};
