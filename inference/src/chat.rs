//! Client for the chat-completion endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::traits::{ChatCompleter, InferenceError};

/// Production base URL of the chat-completion API.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

pub struct OpenAiChatClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiChatClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ChatCompleter for OpenAiChatClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, InferenceError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!(model, "requesting chat completion");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest { model, messages })
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            warn!(%status, "chat endpoint error");
            return Err(InferenceError::ChatStatus { status, body });
        }
        let val: serde_json::Value = resp.json().await?;
        extract_reply(&val).ok_or(InferenceError::InvalidResponse)
    }
}

fn extract_reply(v: &serde_json::Value) -> Option<String> {
    v.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.to_string())
}
