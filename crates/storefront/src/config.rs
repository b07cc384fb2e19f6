//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//! - `BOT_API_URL` - Base URL of the ToyMix bot API server
//! - `IDENTITY_API_KEY` - Identity provider API key (high entropy)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `BOT_API_IMAGE_URL` - Base URL for product images (default: `BOT_API_URL`)
//! - `IDENTITY_API_URL` - Identity provider endpoint (default: Google Identity Toolkit)
//! - `ADVISOR_API_URL` - Generative AI endpoint (default: Google Generative Language)
//! - `ADVISOR_API_KEY` - Generative AI API key; the advisor answers with a
//!   canned reply when unset
//! - `ADVISOR_MODEL` - Advisor model name (default: gemini-3-flash-preview)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
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

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Bot API configuration
    pub bot_api: BotApiConfig,
    /// Identity provider configuration
    pub identity: IdentityConfig,
    /// AI gift advisor configuration
    pub advisor: AdvisorConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Bot API server configuration.
///
/// The bot API is the Telegram-bot-administered backend that owns all
/// product and page content. It carries no credentials; every endpoint the
/// storefront consumes is public.
#[derive(Debug, Clone)]
pub struct BotApiConfig {
    /// Base URL of the bot API server (e.g., <https://api.toymix.uz>)
    pub base_url: String,
    /// Base URL prepended to product image paths in API responses
    pub image_base_url: String,
}

/// Identity provider configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct IdentityConfig {
    /// Identity provider endpoint
    pub base_url: String,
    /// Identity provider API key (passed as a query parameter)
    pub api_key: SecretString,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// AI gift advisor configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AdvisorConfig {
    /// Generative AI endpoint
    pub base_url: String,
    /// API key; `None` disables remote calls (canned replies only)
    pub api_key: Option<SecretString>,
    /// Model name passed in the request path
    pub model: String,
}

impl std::fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_required_env("STOREFRONT_BASE_URL")?;
        validate_url(&base_url, "STOREFRONT_BASE_URL")?;

        let bot_api = BotApiConfig::from_env()?;
        let identity = IdentityConfig::from_env()?;
        let advisor = AdvisorConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            bot_api,
            identity,
            advisor,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BotApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = trim_trailing_slash(get_required_env("BOT_API_URL")?);
        validate_url(&base_url, "BOT_API_URL")?;
        // Images are served directly by the API server, so the image base
        // defaults to the API base rather than the storefront's own URL.
        let image_base_url = get_optional_env("BOT_API_IMAGE_URL")
            .map_or_else(|| base_url.clone(), trim_trailing_slash);
        validate_url(&image_base_url, "BOT_API_IMAGE_URL")?;

        Ok(Self {
            base_url,
            image_base_url,
        })
    }
}

impl IdentityConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: trim_trailing_slash(get_env_or_default(
                "IDENTITY_API_URL",
                "https://identitytoolkit.googleapis.com",
            )),
            api_key: get_validated_secret("IDENTITY_API_KEY")?,
        })
    }
}

impl AdvisorConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = match get_optional_env("ADVISOR_API_KEY") {
            Some(value) => {
                validate_secret_strength(&value, "ADVISOR_API_KEY")?;
                Some(SecretString::from(value))
            }
            None => None,
        };

        Ok(Self {
            base_url: trim_trailing_slash(get_env_or_default(
                "ADVISOR_API_URL",
                "https://generativelanguage.googleapis.com",
            )),
            api_key,
            model: get_env_or_default("ADVISOR_MODEL", "gemini-3-flash-preview"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Trim a single trailing slash so URL joins stay predictable.
fn trim_trailing_slash(mut url: String) -> String {
    if url.ends_with('/') {
        url.pop();
    }
    url
}

/// Check that a value parses as an absolute URL.
fn validate_url(value: &str, var_name: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real secrets like API keys have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_shannon_entropy_high() {
        // Random-looking string should have high entropy
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-api-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_changeme() {
        let result = validate_secret_strength("changeme123", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // Shaped like a real identity toolkit key
        let result = validate_secret_strength("AIzaSyBnXD9ni0Hkbhdtpt6ANC94YDhdkPXYWk", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("http://localhost:8000", "TEST_VAR").is_ok());
        assert!(validate_url("https://api.toymix.uz", "TEST_VAR").is_ok());
        assert!(validate_url("not a url", "TEST_VAR").is_err());
    }

    #[test]
    fn test_trim_trailing_slash() {
        assert_eq!(
            trim_trailing_slash("http://localhost:8000/".to_string()),
            "http://localhost:8000"
        );
        assert_eq!(
            trim_trailing_slash("http://localhost:8000".to_string()),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            bot_api: BotApiConfig {
                base_url: "http://localhost:8000".to_string(),
                image_base_url: "http://localhost:8000".to_string(),
            },
            identity: IdentityConfig {
                base_url: "https://identitytoolkit.googleapis.com".to_string(),
                api_key: SecretString::from("k3y"),
            },
            advisor: AdvisorConfig {
                base_url: "https://generativelanguage.googleapis.com".to_string(),
                api_key: None,
                model: "gemini-3-flash-preview".to_string(),
            },
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_identity_config_debug_redacts_key() {
        let config = IdentityConfig {
            base_url: "https://identitytoolkit.googleapis.com".to_string(),
            api_key: SecretString::from("AIzaSyVeryRealKey123"),
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("identitytoolkit"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("AIzaSyVeryRealKey123"));
    }

    #[test]
    fn test_advisor_config_debug_redacts_key() {
        let config = AdvisorConfig {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: Some(SecretString::from("AIzaSyAnotherRealKey99")),
            model: "gemini-3-flash-preview".to_string(),
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("AIzaSyAnotherRealKey99"));
    }
}
