//! checkout-pilot - stack detection and Razorpay Standard Checkout
//! integration plans for coding agents
//!
//! Two operations, both pure and deterministic:
//!
//! - [`StackDetector::detect`] classifies a project from an [`Evidence`]
//!   record (file listing plus manifest contents).
//! - [`IntegrationGenerator::generate`] turns an [`IntegrationRequest`] into
//!   an [`IntegrationPlan`]: ordered file actions, dependencies, environment
//!   variables and instructions for the agent applying them.
//!
//! Both are exposed to agent hosts through the [`tools`] module.
//!
//! # Example
//!
//! ```
//! use checkout_pilot::credentials::ResolvedCredentials;
//! use checkout_pilot::detection::{Evidence, StackDetector};
//! use checkout_pilot::integration::{IntegrationGenerator, IntegrationRequest};
//!
//! let evidence = Evidence::new(["go.mod", "main.go"])
//!     .with_go_mod("module shop\n\nrequire github.com/gin-gonic/gin v1.9.1\n");
//! let profile = StackDetector::new().detect(&evidence);
//! assert_eq!(profile.framework.as_str(), "gin");
//!
//! let generator = IntegrationGenerator::new(ResolvedCredentials::placeholders());
//! let plan = generator.generate(&IntegrationRequest::from_profile(&profile));
//! assert_eq!(plan.files[0].path(), "handlers/razorpay.go");
//! ```

pub mod cli;
pub mod config;
pub mod credentials;
pub mod detection;
pub mod integration;
pub mod stack;
pub mod tools;
pub mod util;

pub use config::{CheckoutConfig, ConfigError};
pub use credentials::{Credentials, ResolvedCredentials};
pub use detection::{Evidence, StackDetector, StackProfile};
pub use integration::{IntegrationGenerator, IntegrationPlan, IntegrationRequest};
pub use tools::{Tool, ToolError, ToolRegistry, ToolResult};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "checkout-pilot");
    }
}
