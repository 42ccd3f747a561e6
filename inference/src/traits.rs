use async_trait::async_trait;
use thiserror::Error;

use crate::chat::ChatMessage;
use crate::hosted::GenerationOutcome;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unexpected response shape")]
    InvalidResponse,
    #[error("chat endpoint returned status {status}: {body}")]
    ChatStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A remote model that turns a text prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Request a generation from the model named by `identifier`.
    ///
    /// A transport failure is an error; a reachable service that did not
    /// return generated text is a [`GenerationOutcome::Unready`].
    async fn generate(
        &self,
        identifier: &str,
        prompt: &str,
    ) -> Result<GenerationOutcome, InferenceError>;
}

/// A remote chat engine that completes a role-tagged conversation.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    /// Send `messages` to the engine named by `model` and return the
    /// assistant's reply text.
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, InferenceError>;
}
