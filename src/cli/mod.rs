pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CallArgs, CliArgs, Commands, DetectArgs, IntegrateArgs};
pub use handlers::{build_config, run};
pub use output::{OutputFormat, OutputFormatter};
