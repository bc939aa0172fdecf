//! Configuration management for checkout-pilot
//!
//! Settings are loaded once from environment variables at startup and passed
//! explicitly to whatever needs them; nothing reads the environment during a
//! request.
//!
//! # Environment Variables
//!
//! - `RAZORPAY_KEY_ID`: Razorpay API key id (`rzp_test_...` or `rzp_live_...`) - optional
//! - `RAZORPAY_KEY_SECRET`: Razorpay API key secret - optional
//! - `CHECKOUT_LOG_LEVEL`: Logging level - default: "info"
//! - `CHECKOUT_LOG_JSON`: Emit JSON logs (true|false) - default: "false"
//!
//! Missing credentials are not an error: generated plans then carry
//! recognizable placeholders instead of real keys.
//!
//! # Example
//!
//! ```no_run
//! use checkout_pilot::CheckoutConfig;
//!
//! let config = CheckoutConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use std::env;
use std::fmt;
use thiserror::Error;

pub const KEY_ID_VAR: &str = "RAZORPAY_KEY_ID";
pub const KEY_SECRET_VAR: &str = "RAZORPAY_KEY_SECRET";
pub const LOG_LEVEL_VAR: &str = "CHECKOUT_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "CHECKOUT_LOG_JSON";

const DEFAULT_LOG_LEVEL: &str = "info";
const KEY_ID_PREFIX: &str = "rzp_";

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Malformed Razorpay key id '{0}': expected a value starting with 'rzp_'")]
    MalformedKeyId(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Process-wide settings, built once in `main`
#[derive(Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Razorpay key id, `None` when unset or blank
    pub key_id: Option<String>,

    /// Razorpay key secret, `None` when unset or blank
    pub key_secret: Option<String>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for CheckoutConfig {
    /// Loads the configuration from the process environment
    fn default() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }
}

impl CheckoutConfig {
    /// Loads the process environment, rejecting malformed values
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset. An unparseable `CHECKOUT_LOG_JSON`
    /// falls back to `false`; use [`CheckoutConfig::try_from_lookup`] to
    /// surface it instead.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            key_id: read(KEY_ID_VAR),
            key_secret: read(KEY_SECRET_VAR),
            log_level: read(LOG_LEVEL_VAR)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
                .to_lowercase(),
            log_json: read(LOG_JSON_VAR)
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(false),
        }
    }

    /// Like [`CheckoutConfig::from_lookup`] but rejects a non-boolean
    /// `CHECKOUT_LOG_JSON`
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(LOG_JSON_VAR).filter(|v| !v.trim().is_empty()) {
            raw.trim()
                .parse::<bool>()
                .map_err(|e| ConfigError::ParseError {
                    field: LOG_JSON_VAR.to_string(),
                    error: e.to_string(),
                })?;
        }
        Ok(Self::from_lookup(lookup))
    }

    /// Overrides the credentials, ignoring blank values
    pub fn with_credentials(mut self, key_id: Option<String>, key_secret: Option<String>) -> Self {
        if let Some(id) = key_id.filter(|v| !v.trim().is_empty()) {
            self.key_id = Some(id.trim().to_string());
        }
        if let Some(secret) = key_secret.filter(|v| !v.trim().is_empty()) {
            self.key_secret = Some(secret.trim().to_string());
        }
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into().to_lowercase();
        self
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the log level is unknown or the key id does
    /// not look like a Razorpay key id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }

        if let Some(key_id) = &self.key_id {
            if !key_id.starts_with(KEY_ID_PREFIX) {
                return Err(ConfigError::MalformedKeyId(key_id.clone()));
            }
        }

        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        self.key_id.is_some() && self.key_secret.is_some()
    }
}

impl fmt::Debug for CheckoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &self.key_secret.as_ref().map(|_| "***"))
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl fmt::Display for CheckoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "checkout-pilot Configuration:")?;
        writeln!(
            f,
            "  Key ID: {}",
            self.key_id.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(
            f,
            "  Key Secret: {}",
            if self.key_secret.is_some() {
                "(set)"
            } else {
                "(not set)"
            }
        )?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  JSON Logs: {}", self.log_json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = CheckoutConfig::from_lookup(lookup(&[]));
        assert_eq!(config.key_id, None);
        assert_eq!(config.key_secret, None);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(!config.log_json);
        assert!(!config.has_credentials());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = CheckoutConfig::from_lookup(lookup(&[
            (KEY_ID_VAR, "   "),
            (KEY_SECRET_VAR, ""),
        ]));
        assert_eq!(config.key_id, None);
        assert_eq!(config.key_secret, None);
    }

    #[test]
    fn test_values_are_read() {
        let config = CheckoutConfig::from_lookup(lookup(&[
            (KEY_ID_VAR, "rzp_test_abc"),
            (KEY_SECRET_VAR, "shh"),
            (LOG_LEVEL_VAR, "DEBUG"),
            (LOG_JSON_VAR, "true"),
        ]));
        assert_eq!(config.key_id.as_deref(), Some("rzp_test_abc"));
        assert_eq!(config.key_secret.as_deref(), Some("shh"));
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert!(config.has_credentials());
    }

    #[test]
    fn test_invalid_log_level() {
        let config = CheckoutConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "loud")]));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_malformed_key_id() {
        let config = CheckoutConfig::from_lookup(lookup(&[(KEY_ID_VAR, "abc123")]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MalformedKeyId(_))
        ));
    }

    #[test]
    fn test_try_from_lookup_rejects_bad_bool() {
        let result = CheckoutConfig::try_from_lookup(lookup(&[(LOG_JSON_VAR, "yes")]));
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_credential_overrides() {
        let config = CheckoutConfig::from_lookup(lookup(&[(KEY_ID_VAR, "rzp_test_env")]))
            .with_credentials(Some("rzp_test_cli".to_string()), Some(" ".to_string()));
        assert_eq!(config.key_id.as_deref(), Some("rzp_test_cli"));
        assert_eq!(config.key_secret, None);
    }

    #[test]
    fn test_secret_is_masked() {
        let config = CheckoutConfig::from_lookup(lookup(&[(KEY_SECRET_VAR, "top-secret")]));
        assert!(!format!("{:?}", config).contains("top-secret"));
        assert!(!config.to_string().contains("top-secret"));
    }

    #[test]
    #[serial]
    fn test_default_reads_process_environment() {
        let _guards = vec![
            EnvGuard::set(KEY_ID_VAR, "rzp_test_from_env"),
            EnvGuard::set(LOG_LEVEL_VAR, "warn"),
        ];

        let config = CheckoutConfig::default();
        assert_eq!(config.key_id.as_deref(), Some("rzp_test_from_env"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_try_from_env_rejects_malformed_log_json() {
        let _guard = EnvGuard::set(LOG_JSON_VAR, "yes");

        match CheckoutConfig::try_from_env() {
            Err(ConfigError::ParseError { field, .. }) => assert_eq!(field, LOG_JSON_VAR),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }
}
