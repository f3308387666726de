//! Seeder configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MEDUSA_ADMIN_URL` - Base URL of the Medusa backend (e.g., `http://localhost:9000`)
//! - `MEDUSA_ADMIN_TOKEN` - Admin API bearer token (HIGH PRIVILEGE - full store access)
//!
//! ## Optional
//! - `MEDUSA_SALES_CHANNEL` - Sales channel name to attach seeded products to
//!   (default: "Default Sales Channel")

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use crate::seed::DEFAULT_SALES_CHANNEL;

const MIN_TOKEN_LENGTH: usize = 16;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Connection settings for the target Medusa store.
///
/// Implements `Debug` manually to redact the HIGH PRIVILEGE admin token.
#[derive(Clone)]
pub struct MedusaConfig {
    /// Base URL of the Medusa backend
    pub admin_url: Url,
    /// Admin API bearer token (HIGH PRIVILEGE - full store access)
    pub api_token: SecretString,
    /// Name of the sales channel seeded products are attached to
    pub sales_channel: String,
}

impl std::fmt::Debug for MedusaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MedusaConfig")
            .field("admin_url", &self.admin_url.as_str())
            .field("api_token", &"[REDACTED]")
            .field("sales_channel", &self.sales_channel)
            .finish()
    }
}

impl MedusaConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, the URL does
    /// not parse, or the token fails placeholder/length validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let admin_url = get_required_env("MEDUSA_ADMIN_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MEDUSA_ADMIN_URL".to_owned(), e.to_string())
            })?;

        let api_token = get_validated_secret("MEDUSA_ADMIN_TOKEN")?;
        let sales_channel = get_env_or_default("MEDUSA_SALES_CHANNEL", DEFAULT_SALES_CHANNEL);

        Ok(Self {
            admin_url,
            api_token,
            sales_channel,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Validate that a secret is not a placeholder and has a plausible length.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_owned(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    if secret.len() < MIN_TOKEN_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_owned(),
            format!(
                "must be at least {} characters (got {})",
                MIN_TOKEN_LENGTH,
                secret.len()
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
