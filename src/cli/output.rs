//! Output formatting for JSON, YAML and human-readable text
//!
//! JSON and YAML print the same camelCase documents the agent tools return.
//! The human format is a compact summary meant for a terminal.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::detection::StackProfile;
use crate::integration::{FileAction, IntegrationPlan};
use crate::tools::{ToolDefinition, ToolResult};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_profile(&self, profile: &StackProfile) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(profile_human(profile)),
            _ => self.structured(profile, "stack profile"),
        }
    }

    pub fn format_plan(&self, plan: &IntegrationPlan) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(plan_human(plan)),
            _ => self.structured(plan, "integration plan"),
        }
    }

    pub fn format_definitions(&self, definitions: &[ToolDefinition]) -> Result<String> {
        match self.format {
            OutputFormat::Human => {
                let mut output = String::new();
                for def in definitions {
                    let required = def.input_schema["required"]
                        .as_array()
                        .map(|r| {
                            r.iter()
                                .filter_map(|v| v.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        })
                        .unwrap_or_default();
                    let _ = writeln!(output, "{}\n  {}", def.name, def.description);
                    let _ = writeln!(output, "  required: {}\n", required);
                }
                Ok(output)
            }
            _ => self.structured(&definitions, "tool definitions"),
        }
    }

    /// Tool results carry arbitrary JSON, so the human format falls back to
    /// pretty JSON for the content
    pub fn format_tool_result(&self, result: &ToolResult) -> Result<String> {
        match self.format {
            OutputFormat::Human => {
                let status = if result.is_error { "\u{2717} error" } else { "\u{2713} ok" };
                let content = match &result.content {
                    serde_json::Value::String(s) => s.clone(),
                    other => serde_json::to_string_pretty(other)
                        .context("Failed to serialize tool result")?,
                };
                Ok(format!("{}\n{}\n", status, content))
            }
            _ => self.structured(result, "tool result"),
        }
    }

    fn structured<T: Serialize + ?Sized>(&self, value: &T, what: &str) -> Result<String> {
        match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value)
                .with_context(|| format!("Failed to serialize {} to YAML", what)),
            _ => serde_json::to_string_pretty(value)
                .with_context(|| format!("Failed to serialize {} to JSON", what)),
        }
    }
}

fn profile_human(profile: &StackProfile) -> String {
    let mut output = String::new();

    if profile.is_unknown() {
        output.push_str("\u{26A0} Stack Detection Result (Unknown)\n");
    } else {
        output.push_str("\u{2713} Stack Detection Result\n");
    }
    let _ = writeln!(output, "{}\n", RULE);

    let _ = writeln!(output, "Language:         {}", profile.language.name());
    let _ = writeln!(output, "Framework:        {}", profile.framework.name());
    let _ = writeln!(
        output,
        "Frontend:         {}",
        profile
            .frontend
            .as_ref()
            .map(|f| f.name())
            .unwrap_or_else(|| "(none)".to_string())
    );
    let _ = writeln!(output, "Package Manager:  {}", profile.package_manager.name());
    let _ = writeln!(
        output,
        "Full Stack:       {}\n",
        if profile.is_full_stack { "yes" } else { "no" }
    );

    let filled = ((profile.confidence * 10.0).round() as usize).min(10);
    let _ = writeln!(
        output,
        "Confidence: {}{} {}%\n",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(10 - filled),
        (profile.confidence * 100.0).round() as u8
    );

    if !profile.notes.is_empty() {
        output.push_str("Notes:\n");
        for note in &profile.notes {
            let _ = writeln!(output, "  - {}", note);
        }
    }

    output
}

fn plan_human(plan: &IntegrationPlan) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "\u{2713} {}", plan.summary);
    let _ = writeln!(output, "{}\n", RULE);

    output.push_str("Files:\n");
    for (i, file) in plan.files.iter().enumerate() {
        let connector = if i + 1 == plan.files.len() { "\u{2514}" } else { "\u{251C}" };
        let _ = writeln!(
            output,
            "{}\u{2500} [{}] {}  {}",
            connector,
            file.action(),
            file.path(),
            file.description()
        );
        write_edits(&mut output, file);
    }
    output.push('\n');

    output.push_str("Dependencies:\n");
    for dep in &plan.dependencies {
        let _ = writeln!(output, "  {:<16} {}", dep.name, dep.install_command);
    }
    output.push('\n');

    output.push_str("Environment:\n");
    for var in &plan.env_vars {
        let value = if var.name.ends_with("SECRET") { "********" } else { var.value.as_str() };
        let _ = writeln!(output, "  {}={}", var.name, value);
    }
    output.push('\n');

    let _ = writeln!(output, "Testing: {}\n", plan.test_instructions);
    output.push_str(&plan.ai_instructions);
    output.push('\n');

    output
}

fn write_edits(output: &mut String, file: &FileAction) {
    for (step, edit) in file.edits().iter().enumerate() {
        let _ = writeln!(output, "     {}. {}: {}", step + 1, edit.line, edit.add);
    }
}
