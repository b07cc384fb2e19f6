//! ToyMix bot API client.
//!
//! The catalog and all site copy live in a Telegram-bot-managed backend.
//! This module talks to its REST endpoints and normalizes the payloads
//! into domain types.
//!
//! # Architecture
//!
//! - `reqwest` with a per-endpoint timeout so a slow backend never hangs
//!   a page render
//! - In-memory caching via `moka` for the product list and site content
//!   (5 minute TTL)
//! - Every public method fails soft: on any error it serves the fallback
//!   data from `crate::content` instead of propagating
//!
//! # Example
//!
//! ```rust,ignore
//! use toymix_storefront::botapi::BotApiClient;
//!
//! let client = BotApiClient::new(&config.bot_api)?;
//!
//! // Never errors: falls back to the built-in catalog
//! let toys = client.products().await;
//!
//! // None when the product does not exist or the API is down
//! let toy = client.product(ProductId::new(42)).await;
//! ```

mod cache;
mod client;
mod conversions;
pub mod types;

pub use client::BotApiClient;

use thiserror::Error;

/// Errors that can occur when talking to the bot API.
///
/// These stay internal to the fetch layer: public client methods log
/// them and degrade to fallback data.
#[derive(Debug, Error)]
pub enum BotApiError {
    /// HTTP request failed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = BotApiError::Api {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            message: "maintenance".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API returned 503 Service Unavailable: maintenance"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let json_err =
            serde_json::from_str::<serde_json::Value>("not json").expect_err("should fail");
        let err = BotApiError::Parse(json_err);
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
