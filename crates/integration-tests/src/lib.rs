//! Integration tests for the ToyMix storefront.
//!
//! The tests drive the storefront as a library: they build the real
//! router with the real session layer, but point every upstream client
//! at a discard port on localhost. Every request therefore exercises
//! the fallback paths the production site relies on when the bot API
//! or the identity provider is down.
//!
//! # Test Categories
//!
//! - `content_fallback` - Fetch layer degradation and caching
//! - `auth_gate` - Route protection for cart, checkout and account
//! - `storefront_pages` - Public pages rendering over fallback data
//!
//! No network access and no external services are required; `cargo test`
//! from the workspace root runs everything.

use axum::Router;
use secrecy::SecretString;

use toymix_storefront::config::{
    AdvisorConfig, BotApiConfig, IdentityConfig, StorefrontConfig,
};
use toymix_storefront::state::AppState;
use toymix_storefront::{error, middleware, routes};

/// Port 9 (discard) is never listening, so connections are refused
/// immediately instead of waiting out request timeouts.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// A configuration whose upstreams are all unreachable.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        bot_api: BotApiConfig {
            base_url: UNREACHABLE_URL.to_string(),
            image_base_url: UNREACHABLE_URL.to_string(),
        },
        identity: IdentityConfig {
            base_url: UNREACHABLE_URL.to_string(),
            api_key: SecretString::from("wq7PmXv4Kb9ZtR2nYf8J"),
        },
        advisor: AdvisorConfig {
            base_url: UNREACHABLE_URL.to_string(),
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
        },
        sentry_dsn: None,
    }
}

/// Application state backed by [`test_config`].
#[must_use]
pub fn test_state() -> AppState {
    AppState::new(test_config()).expect("HTTP clients should build without a network")
}

/// The full storefront router with the session layer attached, ready
/// for `tower::ServiceExt::oneshot`.
#[must_use]
pub fn test_app() -> Router {
    let config = test_config();
    let state = AppState::new(config.clone()).expect("HTTP clients should build without a network");

    Router::new()
        .merge(routes::routes())
        .fallback(error::handle_not_found)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(middleware::create_session_layer(&config))
        .with_state(state)
}
