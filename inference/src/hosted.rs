//! Client for seq2seq models hosted behind the shared inference API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::traits::{InferenceError, TextGenerator};

/// Production base URL of the hosted inference API.
pub const HUB_API_BASE: &str = "https://api-inference.huggingface.co";

#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    wait_for_model: bool,
}

/// Outcome of one generation call.
///
/// A loaded model answers with `[{"generated_text": ...}]`. Anything else
/// the service sends back (still loading, rate limited) is carried verbatim
/// in [`GenerationOutcome::Unready`] so the caller can show it as-is.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationOutcome {
    Ready(String),
    Unready(serde_json::Value),
}

pub struct HostedModelClient {
    http: Client,
    base_url: String,
    token: String,
}

impl HostedModelClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for HostedModelClient {
    async fn generate(
        &self,
        identifier: &str,
        prompt: &str,
    ) -> Result<GenerationOutcome, InferenceError> {
        let url = format!("{}/models/{}", self.base_url.trim_end_matches('/'), identifier);
        debug!(model = identifier, "requesting generation");
        let body: serde_json::Value = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&GenerationRequest {
                inputs: prompt,
                wait_for_model: true,
            })
            .send()
            .await?
            .json()
            .await?;
        Ok(classify(body))
    }
}

fn classify(body: serde_json::Value) -> GenerationOutcome {
    match body
        .get(0)
        .and_then(|item| item.get("generated_text"))
        .and_then(|text| text.as_str())
    {
        Some(text) => GenerationOutcome::Ready(text.to_string()),
        None => GenerationOutcome::Unready(body),
    }
}
