//! Identity provider API client.
//!
//! Email/password accounts live in a hosted identity service with a
//! Firebase-style REST surface: `accounts:signInWithPassword` and
//! `accounts:signUp`, keyed by a project API key in the query string.
//! This client covers exactly those two calls; session state is ours,
//! kept server-side, so the provider's tokens are verified and dropped.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::IdentityConfig;

/// Cap on every provider call so a login form never hangs.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when talking to the identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider rejected the request with an error code such as
    /// `EMAIL_NOT_FOUND`. Some codes carry a trailing explanation
    /// ("WEAK_PASSWORD : Password should be at least 6 characters").
    #[error("identity provider error: {0}")]
    Provider(String),

    /// Failed to parse the provider response.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl IdentityError {
    /// The bare provider error code, with any explanation stripped.
    #[must_use]
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::Provider(code) => code.split_whitespace().next(),
            _ => None,
        }
    }
}

/// An authenticated account as the provider reports it.
#[derive(Debug, Clone)]
pub struct IdentityUser {
    /// Provider-assigned opaque account ID.
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Request body for both sign-in and sign-up.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    return_secure_token: bool,
}

/// Successful response from either endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Error envelope: `{"error": {"message": "EMAIL_NOT_FOUND"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Identity provider API client.
#[derive(Clone)]
pub struct IdentityClient {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl IdentityClient {
    /// Create a new identity client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &IdentityConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Provider` with the provider's error code
    /// when the credentials are rejected.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError> {
        self.credentials_call("accounts:signInWithPassword", email, password, None)
            .await
    }

    /// Create an account with email and password.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Provider` with the provider's error code
    /// when the account cannot be created (existing email, weak
    /// password).
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<IdentityUser, IdentityError> {
        self.credentials_call("accounts:signUp", email, password, display_name)
            .await
    }

    async fn credentials_call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<IdentityUser, IdentityError> {
        let url = format!(
            "{}/v1/{endpoint}?key={}",
            self.base_url,
            self.api_key.expose_secret()
        );

        let body = CredentialsBody {
            email,
            password,
            display_name,
            return_secure_token: true,
        };

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let code = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| format!("HTTP_{}", status.as_u16()));
            return Err(IdentityError::Provider(code));
        }

        let account: AccountResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))?;

        Ok(IdentityUser {
            id: account.local_id,
            email: account.email,
            display_name: account.display_name.filter(|name| !name.is_empty()),
        })
    }
}
