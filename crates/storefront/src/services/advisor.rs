//! AI gift advisor backed by a Generative Language API.
//!
//! Parents describe the child's age, interests and budget; the advisor
//! replies with a free-form toy recommendation in Uzbek. The reply is
//! advisory text only, so this client never surfaces errors: every
//! failure path falls back to a canned Uzbek message and the page
//! renders normally.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::config::AdvisorConfig;

/// Generation can take a while; cap it so the request handler returns.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shown when the advisor is not configured or replies with no text.
pub const UNAVAILABLE_REPLY: &str =
    "Kechirasiz, hozirda maslahat bera olmayman. Iltimos, birozdan so'ng urinib ko'ring.";

/// Shown when the API call itself fails.
pub const FAILURE_REPLY: &str =
    "Tizimda xatolik yuz berdi. Iltimos, internet aloqasini tekshiring.";

/// Generative AI advisor client.
#[derive(Clone)]
pub struct AdvisorClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
}

impl AdvisorClient {
    /// Create a new advisor client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &AdvisorConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Ask for a toy recommendation. Always returns displayable text.
    #[instrument(skip(self))]
    pub async fn advice(&self, age: &str, interest: &str, budget: &str) -> String {
        let Some(api_key) = &self.api_key else {
            warn!("Advisor API key not configured, returning canned reply");
            return UNAVAILABLE_REPLY.to_string();
        };

        let prompt = build_prompt(age, interest, budget);
        match self.generate(api_key, &prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("Advisor returned an empty response");
                UNAVAILABLE_REPLY.to_string()
            }
            Err(err) => {
                warn!(error = %err, "Advisor request failed");
                FAILURE_REPLY.to_string()
            }
        }
    }

    async fn generate(
        &self,
        api_key: &SecretString,
        prompt: &str,
    ) -> Result<Option<String>, reqwest::Error> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            api_key.expose_secret()
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_p: 0.9,
            },
        };

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let generated: GenerateResponse = response.json().await?;
        Ok(generated.text())
    }
}

fn build_prompt(age: &str, interest: &str, budget: &str) -> String {
    format!(
        "Siz ToyMix do'konining aqlli yordamchisiz. Ota-onaga quyidagi ma'lumotlar asosida farzandi uchun o'yinchoq tanlashda yordam bering:\n  - Bolaning yoshi: {age}\n  - Qiziqishlari: {interest}\n  - Budjet (taxminan): {budget}\n\n  Iltimos, o'yinchoq turini, uning foydali jihatlarini va nega aynan shu yoshga mosligini tushuntirib bering. Javobni o'zbek tilida, do'stona va bolalarga g'amxo'rlik ruhida yozing. Faqat matnli maslahat bering, narxlarni aniq aytishingiz shart emas."
    )
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// Text of the first candidate, with multi-part replies joined.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<String>();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
