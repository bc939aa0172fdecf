//! Razorpay credential resolution
//!
//! Generated plans must never carry an empty key: absent values are replaced
//! by fixed placeholders that are obviously not real credentials.

use crate::config::CheckoutConfig;
use std::fmt;

pub const PLACEHOLDER_KEY_ID: &str = "rzp_test_YOUR_KEY_ID";
pub const PLACEHOLDER_KEY_SECRET: &str = "YOUR_KEY_SECRET";

/// Credentials as configured; either field may be missing
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub key_id: Option<String>,
    pub key_secret: Option<String>,
}

/// Credentials with every field guaranteed non-empty
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub key_id: String,
    pub key_secret: String,
}

/// Reads credentials from the loaded configuration
pub fn resolve(config: &CheckoutConfig) -> Credentials {
    Credentials::new(config.key_id.clone(), config.key_secret.clone())
}

/// Returns `(key_id, key_secret)`, substituting placeholders for empty fields
pub fn resolve_or_placeholder(credentials: &Credentials) -> (String, String) {
    let resolved = credentials.resolve_or_placeholder();
    (resolved.key_id, resolved.key_secret)
}

impl Credentials {
    pub fn new(key_id: Option<String>, key_secret: Option<String>) -> Self {
        Self { key_id, key_secret }
    }

    pub fn resolve_or_placeholder(&self) -> ResolvedCredentials {
        ResolvedCredentials {
            key_id: non_empty_or(&self.key_id, PLACEHOLDER_KEY_ID),
            key_secret: non_empty_or(&self.key_secret, PLACEHOLDER_KEY_SECRET),
        }
    }
}

impl ResolvedCredentials {
    pub fn placeholders() -> Self {
        Credentials::default().resolve_or_placeholder()
    }

    pub fn is_placeholder(&self) -> bool {
        self.key_id == PLACEHOLDER_KEY_ID || self.key_secret == PLACEHOLDER_KEY_SECRET
    }
}

fn non_empty_or(value: &Option<String>, placeholder: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &self.key_secret.as_ref().map(|_| "***"))
            .finish()
    }
}

impl fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_for_missing_fields() {
        let (key_id, key_secret) = resolve_or_placeholder(&Credentials::default());
        assert_eq!(key_id, PLACEHOLDER_KEY_ID);
        assert_eq!(key_secret, PLACEHOLDER_KEY_SECRET);
        assert!(!key_id.is_empty() && !key_secret.is_empty());
    }

    #[test]
    fn test_values_returned_unchanged() {
        let creds = Credentials::new(Some("k".to_string()), Some("s".to_string()));
        assert_eq!(
            resolve_or_placeholder(&creds),
            ("k".to_string(), "s".to_string())
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_kept() {
        let creds = Credentials::new(Some(" k ".to_string()), Some("s\n".to_string()));
        assert_eq!(
            resolve_or_placeholder(&creds),
            (" k ".to_string(), "s\n".to_string())
        );
    }

    #[test]
    fn test_fields_are_resolved_independently() {
        let creds = Credentials::new(Some("rzp_test_abc".to_string()), Some(String::new()));
        let resolved = creds.resolve_or_placeholder();
        assert_eq!(resolved.key_id, "rzp_test_abc");
        assert_eq!(resolved.key_secret, PLACEHOLDER_KEY_SECRET);
        assert!(resolved.is_placeholder());
    }

    #[test]
    fn test_resolve_from_config() {
        let config = CheckoutConfig::from_lookup(|name| match name {
            "RAZORPAY_KEY_ID" => Some("rzp_live_xyz".to_string()),
            _ => None,
        });
        let creds = resolve(&config);
        assert_eq!(creds.key_id.as_deref(), Some("rzp_live_xyz"));
        assert_eq!(creds.key_secret, None);
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::new(None, Some("hunter2".to_string()));
        assert!(!format!("{:?}", creds).contains("hunter2"));
        assert!(!format!("{:?}", creds.resolve_or_placeholder()).contains("hunter2"));
    }
}
