//! Agent tool contract: definitions, argument handling and error results

use checkout_pilot::credentials::ResolvedCredentials;
use checkout_pilot::integration::IntegrationGenerator;
use checkout_pilot::tools::{ToolRegistry, ToolResult};
use serde_json::{json, Value};

fn registry() -> ToolRegistry {
    ToolRegistry::new(IntegrationGenerator::new(ResolvedCredentials::placeholders()))
}

fn schema_enum(registry: &ToolRegistry, tool: &str, property: &str) -> Vec<String> {
    let def = registry
        .definitions()
        .into_iter()
        .find(|d| d.name == tool)
        .unwrap();
    def.input_schema["properties"][property]["enum"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_integrate_schema_enums() {
    let registry = registry();
    assert_eq!(
        schema_enum(&registry, "integrate_checkout", "language"),
        vec!["javascript", "typescript", "python", "go"]
    );
    assert_eq!(
        schema_enum(&registry, "integrate_checkout", "backendFramework"),
        vec!["express", "nextjs", "django", "flask", "fastapi", "gin", "echo", "fiber"]
    );
    assert_eq!(
        schema_enum(&registry, "integrate_checkout", "frontendFramework"),
        vec!["vanilla", "react", "nextjs", "vue", "angular", "svelte"]
    );
}

#[test]
fn test_detect_schema_requires_files() {
    let def = registry()
        .definitions()
        .into_iter()
        .find(|d| d.name == "detect_stack")
        .unwrap();
    assert_eq!(def.input_schema["required"], json!(["files"]));
    assert_eq!(def.input_schema["properties"]["packageJson"]["type"], "object");
}

#[tokio::test]
async fn test_detect_stack_call() {
    let result = registry()
        .call(
            "detect_stack",
            json!({
                "files": ["requirements.txt", "manage.py", "Pipfile.lock"],
                "requirementsTxt": "gunicorn\n"
            }),
        )
        .await;

    assert!(!result.is_error);
    assert_eq!(result.content["language"], "python");
    assert_eq!(result.content["framework"], "django");
    assert_eq!(result.content["packageManager"], "pipenv");
    assert!(result.content.get("frontend").is_none());
}

#[tokio::test]
async fn test_integrate_checkout_call() {
    let result = registry()
        .call(
            "integrate_checkout",
            json!({
                "language": "go",
                "backendFramework": "fiber",
                "frontendFramework": "angular",
                "existingPaymentFunction": "submitOrder"
            }),
        )
        .await;

    assert!(!result.is_error);
    let files = result.content["files"].as_array().unwrap();
    assert_eq!(files[0]["path"], "handlers/razorpay.go");
    assert_eq!(files.last().unwrap()["action"], "wire_payment");
    assert!(files.last().unwrap()["code"].as_str().unwrap().contains("submitOrder"));
    assert_eq!(
        result.content["dependencies"][0]["installCommand"],
        "go get github.com/razorpay/razorpay-go"
    );
}

#[tokio::test]
async fn test_malformed_arguments_are_error_results() {
    let registry = registry();
    let cases: Vec<(&str, Value)> = vec![
        ("detect_stack", json!("package.json")),
        ("detect_stack", json!({ "files": "package.json" })),
        ("detect_stack", json!({ "files": [1, 2] })),
        ("integrate_checkout", json!({ "language": "javascript" })),
        ("integrate_checkout", json!(null)),
        (
            "integrate_checkout",
            json!({ "language": "go", "backendFramework": ["gin"], "frontendFramework": "react" }),
        ),
    ];

    for (tool, args) in cases {
        let result = registry.call(tool, args.clone()).await;
        assert!(result.is_error, "{} accepted {}", tool, args);
        assert!(result.content.as_str().unwrap().starts_with("Invalid arguments"));
    }
}

#[tokio::test]
async fn test_unknown_tool() {
    let result = registry().call("create_refund", json!({})).await;
    assert_eq!(result, ToolResult::error("Unknown tool: create_refund"));
}

#[tokio::test]
async fn test_result_serialization() {
    let result = registry().call("detect_stack", json!({ "files": [] })).await;
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["isError"], false);
    assert_eq!(value["content"]["language"], "unknown");
}
