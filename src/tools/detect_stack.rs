use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::info;

use super::trait_def::{parse_arguments, Tool, ToolError};
use crate::detection::{Evidence, StackDetector};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectStackArgs {
    files: Vec<String>,
    #[serde(default)]
    package_json: Option<Map<String, Value>>,
    #[serde(default)]
    requirements_txt: Option<String>,
    #[serde(default)]
    go_mod: Option<String>,
    #[serde(default)]
    pubspec_yaml: Option<String>,
}

impl DetectStackArgs {
    fn into_evidence(self) -> Evidence {
        let mut evidence = Evidence::new(self.files);
        if let Some(manifest) = &self.package_json {
            evidence = evidence.with_package_json(manifest);
        }
        if let Some(content) = self.requirements_txt {
            evidence = evidence.with_requirements(content);
        }
        if let Some(content) = self.go_mod {
            evidence = evidence.with_go_mod(content);
        }
        if let Some(content) = self.pubspec_yaml {
            evidence = evidence.with_pubspec(content);
        }
        evidence
    }
}

pub struct DetectStackTool {
    detector: StackDetector,
}

impl DetectStackTool {
    pub fn new() -> Self {
        Self {
            detector: StackDetector::new(),
        }
    }
}

impl Default for DetectStackTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for DetectStackTool {
    fn name(&self) -> &'static str {
        "detect_stack"
    }

    fn description(&self) -> &'static str {
        "Detect the technology stack of a project from its file listing and manifest contents. \
         Returns language, backend framework, frontend framework, package manager and a confidence score."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "files": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Project file paths relative to the root (e.g., 'package.json', 'src/index.ts')"
                },
                "packageJson": {
                    "type": "object",
                    "description": "Parsed package.json contents, if the project has one"
                },
                "requirementsTxt": {
                    "type": "string",
                    "description": "Contents of requirements.txt or pyproject.toml"
                },
                "goMod": {
                    "type": "string",
                    "description": "Contents of go.mod"
                },
                "pubspecYaml": {
                    "type": "string",
                    "description": "Contents of pubspec.yaml"
                }
            },
            "required": ["files"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: DetectStackArgs = parse_arguments(self.name(), arguments)?;
        let evidence = args.into_evidence();
        let profile = self.detector.detect(&evidence);

        info!(
            files = evidence.files.len(),
            profile = %profile,
            "detect_stack finished"
        );
        Ok(serde_json::to_value(profile)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detects_express_react() {
        let tool = DetectStackTool::new();
        let result = tool
            .execute(json!({
                "files": ["package.json", "server.js", "yarn.lock"],
                "packageJson": {
                    "dependencies": { "express": "^4.18.0", "react": "^18.0.0" }
                }
            }))
            .await
            .unwrap();

        assert_eq!(result["language"], "javascript");
        assert_eq!(result["framework"], "express");
        assert_eq!(result["frontend"], "react");
        assert_eq!(result["packageManager"], "yarn");
        assert_eq!(result["isFullStack"], false);
    }

    #[tokio::test]
    async fn test_missing_files_is_invalid() {
        let tool = DetectStackTool::new();
        let err = tool.execute(json!({ "goMod": "module x" })).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { tool: "detect_stack", .. }));
    }

    #[tokio::test]
    async fn test_package_json_must_be_object() {
        let tool = DetectStackTool::new();
        let err = tool
            .execute(json!({ "files": [], "packageJson": "express" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }
}
