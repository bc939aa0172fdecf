use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Razorpay Standard Checkout integration planner
#[derive(Parser, Debug)]
#[command(
    name = "checkout-pilot",
    about = "Detect a project's stack and plan a Razorpay Standard Checkout integration",
    version,
    long_about = "checkout-pilot classifies a project's technology stack from its files and \
                  manifests, and produces an ordered, multi-file plan that adds Razorpay \
                  Standard Checkout to it. Plans are printed, never applied."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'f',
        long,
        global = true,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        value_name = "KEY_ID",
        help = "Razorpay key id (overrides RAZORPAY_KEY_ID)"
    )]
    pub key_id: Option<String>,

    #[arg(
        long,
        global = true,
        value_name = "SECRET",
        help = "Razorpay key secret (overrides RAZORPAY_KEY_SECRET)"
    )]
    pub key_secret: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the technology stack of a project directory",
        long_about = "Lists the project files (honoring .gitignore), reads package.json, \
                      requirements.txt or pyproject.toml, go.mod and pubspec.yaml, and \
                      classifies the stack.\n\n\
                      Examples:\n  \
                      checkout-pilot detect\n  \
                      checkout-pilot detect /path/to/project --format json"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Generate a Razorpay Checkout integration plan",
        long_about = "Prints the files, edits, dependencies and instructions needed to add \
                      Razorpay Standard Checkout. Unknown names fall back to \
                      javascript / express / vanilla.\n\n\
                      Examples:\n  \
                      checkout-pilot integrate --language typescript --backend express --frontend react\n  \
                      checkout-pilot integrate --language python --backend django --frontend vue --format json"
    )]
    Integrate(IntegrateArgs),

    #[command(about = "List the agent tools and their JSON schemas")]
    Tools,

    #[command(
        about = "Run an agent tool with JSON arguments",
        long_about = "Runs a tool exactly as an agent host would and prints the tool result.\n\n\
                      Examples:\n  \
                      checkout-pilot call detect_stack '{\"files\": [\"go.mod\"]}'\n  \
                      echo '{...}' | checkout-pilot call integrate_checkout"
    )]
    Call(CallArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the project (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct IntegrateArgs {
    #[arg(short = 'l', long, help = "javascript, typescript, python or go")]
    pub language: String,

    #[arg(
        short = 'b',
        long,
        help = "express, nextjs, django, flask, fastapi, gin, echo or fiber"
    )]
    pub backend: String,

    #[arg(
        long,
        help = "vanilla, react, nextjs, vue, nuxt, angular, svelte or solid"
    )]
    pub frontend: String,

    #[arg(long, value_name = "PATH", help = "Existing order creation endpoint")]
    pub order_endpoint: Option<String>,

    #[arg(long, value_name = "NAME", help = "Existing frontend payment function")]
    pub payment_function: Option<String>,

    #[arg(long, value_name = "MANAGER", help = "Package manager used by the project")]
    pub package_manager: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CallArgs {
    #[arg(value_name = "TOOL", help = "Tool name (see `checkout-pilot tools`)")]
    pub tool: String,

    #[arg(
        value_name = "ARGS_JSON",
        help = "Tool arguments as a JSON object (read from stdin when omitted)"
    )]
    pub arguments: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
