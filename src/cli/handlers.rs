use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

use super::commands::{CallArgs, CliArgs, Commands, DetectArgs, IntegrateArgs};
use super::output::OutputFormatter;
use crate::config::CheckoutConfig;
use crate::credentials;
use crate::detection::{Evidence, StackDetector};
use crate::integration::{ExistingHints, IntegrationGenerator, IntegrationRequest};
use crate::tools::ToolRegistry;

/// Applies the global CLI overrides on top of the environment configuration
pub fn build_config(args: &CliArgs, base: CheckoutConfig) -> CheckoutConfig {
    let mut config = base.with_credentials(args.key_id.clone(), args.key_secret.clone());

    if let Some(level) = &args.log_level {
        config = config.with_log_level(level.as_str());
    } else if args.verbose {
        config = config.with_log_level("debug");
    } else if args.quiet {
        config = config.with_log_level("error");
    }
    config
}

/// Runs the selected command and returns the process exit code
pub async fn run(args: &CliArgs, config: &CheckoutConfig) -> Result<i32> {
    let formatter = OutputFormatter::new(args.format.into());
    let generator = IntegrationGenerator::new(credentials::resolve(config).resolve_or_placeholder());

    if generator.credentials().is_placeholder() {
        debug!("Razorpay credentials not configured, plans will carry placeholders");
    }

    match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, &formatter),
        Commands::Integrate(integrate_args) => {
            handle_integrate(integrate_args, &generator, &formatter)
        }
        Commands::Tools => {
            let registry = ToolRegistry::new(generator);
            println!("{}", formatter.format_definitions(&registry.definitions())?);
            Ok(0)
        }
        Commands::Call(call_args) => handle_call(call_args, generator, &formatter).await,
    }
}

fn handle_detect(args: &DetectArgs, formatter: &OutputFormatter) -> Result<i32> {
    let path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    info!(path = %path.display(), "Scanning project");

    let evidence = Evidence::from_directory(&path)
        .with_context(|| format!("Failed to collect evidence from {}", path.display()))?;
    let profile = StackDetector::new().detect(&evidence);

    println!("{}", formatter.format_profile(&profile)?);
    Ok(0)
}

fn handle_integrate(
    args: &IntegrateArgs,
    generator: &IntegrationGenerator,
    formatter: &OutputFormatter,
) -> Result<i32> {
    let mut hints = ExistingHints::default();
    if let Some(endpoint) = &args.order_endpoint {
        hints = hints.with_order_endpoint(endpoint.as_str());
    }
    if let Some(function) = &args.payment_function {
        hints = hints.with_payment_function(function.as_str());
    }
    if let Some(manager) = &args.package_manager {
        hints = hints.with_package_manager(manager);
    }

    let request = IntegrationRequest::resolve(&args.language, &args.backend, &args.frontend)
        .with_hints(hints);
    let plan = generator.generate(&request);

    println!("{}", formatter.format_plan(&plan)?);
    Ok(0)
}

async fn handle_call(
    args: &CallArgs,
    generator: IntegrationGenerator,
    formatter: &OutputFormatter,
) -> Result<i32> {
    let raw = match &args.arguments {
        Some(raw) => raw.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read tool arguments from stdin")?;
            buffer
        }
    };

    let arguments: serde_json::Value = if raw.trim().is_empty() {
        serde_json::Value::Object(Default::default())
    } else {
        serde_json::from_str(&raw).context("Tool arguments are not valid JSON")?
    };

    let registry = ToolRegistry::new(generator);
    let result = registry.call(&args.tool, arguments).await;

    println!("{}", formatter.format_tool_result(&result)?);
    Ok(if result.is_error { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn empty_config() -> CheckoutConfig {
        CheckoutConfig::from_lookup(|_| None)
    }

    #[test]
    fn test_flags_override_environment() {
        let args = CliArgs::parse_from([
            "checkout-pilot",
            "--key-id",
            "rzp_test_cli",
            "-v",
            "tools",
        ]);
        let base = CheckoutConfig::from_lookup(|name| match name {
            "RAZORPAY_KEY_ID" => Some("rzp_test_env".to_string()),
            "RAZORPAY_KEY_SECRET" => Some("env-secret".to_string()),
            _ => None,
        });
        let config = build_config(&args, base);
        assert_eq!(config.key_id.as_deref(), Some("rzp_test_cli"));
        assert_eq!(config.key_secret.as_deref(), Some("env-secret"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_explicit_level_wins_over_quiet() {
        let args = CliArgs::parse_from(["checkout-pilot", "--log-level", "WARN", "-q", "tools"]);
        let config = build_config(&args, empty_config());
        assert_eq!(config.log_level, "warn");
    }

    #[tokio::test]
    async fn test_call_unknown_tool_exits_nonzero() {
        let args = CliArgs::parse_from(["checkout-pilot", "call", "nope", "{}"]);
        let code = run(&args, &empty_config()).await.unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_call_rejects_invalid_json() {
        let args = CliArgs::parse_from(["checkout-pilot", "call", "detect_stack", "{not json"]);
        assert!(run(&args, &empty_config()).await.is_err());
    }
}
