use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::trait_def::{parse_arguments, Tool, ToolError};
use crate::integration::{ExistingHints, IntegrationGenerator, IntegrationRequest};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntegrateCheckoutArgs {
    language: String,
    backend_framework: String,
    frontend_framework: String,
    #[serde(default)]
    existing_order_endpoint: Option<String>,
    #[serde(default)]
    existing_payment_function: Option<String>,
    #[serde(default)]
    package_manager: Option<String>,
}

impl IntegrateCheckoutArgs {
    fn into_request(self) -> IntegrationRequest {
        let mut hints = ExistingHints::default();
        if let Some(endpoint) = self.existing_order_endpoint {
            hints = hints.with_order_endpoint(endpoint);
        }
        if let Some(function) = self.existing_payment_function {
            hints = hints.with_payment_function(function);
        }
        if let Some(manager) = self.package_manager {
            hints = hints.with_package_manager(&manager);
        }

        IntegrationRequest::resolve(&self.language, &self.backend_framework, &self.frontend_framework)
            .with_hints(hints)
    }
}

pub struct IntegrateCheckoutTool {
    generator: IntegrationGenerator,
}

impl IntegrateCheckoutTool {
    pub fn new(generator: IntegrationGenerator) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl Tool for IntegrateCheckoutTool {
    fn name(&self) -> &'static str {
        "integrate_checkout"
    }

    fn description(&self) -> &'static str {
        "Complete Razorpay Standard Checkout integration. Returns ALL code needed - \
         backend routes, frontend integration, and payment verification. \
         Apply ALL returned files and modifications without asking the user for additional steps."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "language": {
                    "type": "string",
                    "description": "Programming language: javascript, typescript, python, or go",
                    "enum": ["javascript", "typescript", "python", "go"]
                },
                "backendFramework": {
                    "type": "string",
                    "description": "Backend framework: express, nextjs, django, flask, fastapi, gin, echo, or fiber",
                    "enum": ["express", "nextjs", "django", "flask", "fastapi", "gin", "echo", "fiber"]
                },
                "frontendFramework": {
                    "type": "string",
                    "description": "Frontend framework: vanilla, react, nextjs, vue, angular, or svelte",
                    "enum": ["vanilla", "react", "nextjs", "vue", "angular", "svelte"]
                },
                "existingOrderEndpoint": {
                    "type": "string",
                    "description": "Existing order creation endpoint path if any (e.g., /api/orders/create)"
                },
                "existingPaymentFunction": {
                    "type": "string",
                    "description": "Existing payment/checkout function name in the frontend if any"
                },
                "packageManager": {
                    "type": "string",
                    "description": "Package manager used by the project (npm, yarn, pnpm, bun, pip, poetry, pipenv, uv)"
                }
            },
            "required": ["language", "backendFramework", "frontendFramework"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: IntegrateCheckoutArgs = parse_arguments(self.name(), arguments)?;
        let request = args.into_request();
        let plan = self.generator.generate(&request);

        info!(
            backend = %request.backend,
            frontend = %request.frontend,
            files = plan.files.len(),
            "integrate_checkout finished"
        );
        Ok(serde_json::to_value(plan)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::ResolvedCredentials;

    fn tool() -> IntegrateCheckoutTool {
        IntegrateCheckoutTool::new(IntegrationGenerator::new(ResolvedCredentials::placeholders()))
    }

    #[tokio::test]
    async fn test_flask_plan() {
        let result = tool()
            .execute(json!({
                "language": "python",
                "backendFramework": "flask",
                "frontendFramework": "vue",
                "packageManager": "pipenv"
            }))
            .await
            .unwrap();

        assert_eq!(result["files"][0]["action"], "create");
        assert_eq!(result["dependencies"][0]["installCommand"], "pipenv install razorpay");
        assert_eq!(result["envVars"][0]["value"], "rzp_test_YOUR_KEY_ID");
    }

    #[tokio::test]
    async fn test_unknown_backend_falls_back_to_express() {
        let result = tool()
            .execute(json!({
                "language": "javascript",
                "backendFramework": "unknownfw",
                "frontendFramework": "vanilla"
            }))
            .await
            .unwrap();
        assert_eq!(result["files"][0]["path"], "routes/razorpay.js");
    }

    #[tokio::test]
    async fn test_wrong_type_is_invalid() {
        let err = tool()
            .execute(json!({
                "language": 3,
                "backendFramework": "express",
                "frontendFramework": "react"
            }))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { tool: "integrate_checkout", .. }));
    }
}
