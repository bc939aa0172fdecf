use checkout_pilot::cli::{build_config, run, CliArgs};
use checkout_pilot::config::CheckoutConfig;
use checkout_pilot::util::{init_logging, LoggingConfig};
use checkout_pilot::VERSION;

use clap::Parser;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let config = match CheckoutConfig::try_from_env() {
        Ok(config) => build_config(&args, config),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    init_logging(LoggingConfig::from_checkout_config(&config));

    debug!("checkout-pilot v{} starting", VERSION);
    debug!(config = %config, "Configuration loaded");

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let exit_code = match run(&args, &config).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
