//! Application state shared across handlers.

use std::sync::Arc;

use crate::botapi::BotApiClient;
use crate::config::StorefrontConfig;
use crate::services::advisor::AdvisorClient;
use crate::services::identity::IdentityClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the bot API client and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    bot_api: BotApiClient,
    identity: IdentityClient,
    advisor: AdvisorClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the HTTP clients fail to build.
    pub fn new(config: StorefrontConfig) -> Result<Self, reqwest::Error> {
        let bot_api = BotApiClient::new(&config.bot_api)?;
        let identity = IdentityClient::new(&config.identity)?;
        let advisor = AdvisorClient::new(&config.advisor)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                bot_api,
                identity,
                advisor,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the bot API client.
    #[must_use]
    pub fn bot_api(&self) -> &BotApiClient {
        &self.inner.bot_api
    }

    /// Get a reference to the identity provider client.
    #[must_use]
    pub fn identity(&self) -> &IdentityClient {
        &self.inner.identity
    }

    /// Get a reference to the AI gift advisor client.
    #[must_use]
    pub fn advisor(&self) -> &AdvisorClient {
        &self.inner.advisor
    }
}
