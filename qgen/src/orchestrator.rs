//! Sequential driver for one question-generation cycle.

use std::sync::Arc;

use async_stream::stream;
use futures::stream::BoxStream;
use serde::Serialize;
use tracing::{debug, warn};

use inference::{ChatCompleter, ChatMessage, GenerationOutcome, TextGenerator};

use crate::model::{INSTRUCTION_PREFIX, ModelSpec, roster};

/// Chat engine queried after the hosted models.
pub const CHAT_ENGINE: &str = "gpt-3.5-turbo";

/// Role fixed for the chat engine before the passage is presented.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates questions from text.";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    /// The model produced a question.
    Question { text: String },
    /// The service answered with something other than generated text; the
    /// payload is carried verbatim.
    Unready { payload: serde_json::Value },
    /// The call itself failed.
    Failed { message: String },
}

/// One labeled result of a cycle, in emission order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Emission {
    pub label: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

pub struct Orchestrator {
    roster: Vec<ModelSpec>,
    generator: Arc<dyn TextGenerator>,
    chat: Arc<dyn ChatCompleter>,
}

impl Orchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>, chat: Arc<dyn ChatCompleter>) -> Self {
        Self {
            roster: roster(),
            generator,
            chat,
        }
    }

    /// Run one cycle over `source_text`, yielding each result as its remote
    /// call completes.
    ///
    /// Blank input yields nothing and performs no calls. The hosted models
    /// are queried strictly in roster order; the first [`Outcome::Unready`]
    /// or [`Outcome::Failed`] ends the stream with no further calls. After
    /// three questions the chat engine is queried once.
    pub fn generate_questions(&self, source_text: &str) -> BoxStream<'static, Emission> {
        let source = source_text.to_string();
        let roster = self.roster.clone();
        let generator = Arc::clone(&self.generator);
        let chat = Arc::clone(&self.chat);
        Box::pin(stream! {
            if source.trim().is_empty() {
                debug!("blank passage; nothing to do");
                return;
            }
            for spec in roster {
                let prompt = spec.prompt_for(&source);
                match generator.generate(&spec.identifier, &prompt).await {
                    Ok(GenerationOutcome::Ready(text)) => {
                        debug!(model = %spec.display_name, "question generated");
                        yield Emission {
                            label: spec.display_name,
                            outcome: Outcome::Question { text },
                        };
                    }
                    Ok(GenerationOutcome::Unready(payload)) => {
                        warn!(model = %spec.display_name, "service not ready; stopping cycle");
                        yield Emission {
                            label: spec.display_name,
                            outcome: Outcome::Unready { payload },
                        };
                        return;
                    }
                    Err(e) => {
                        warn!(model = %spec.display_name, error = %e, "generation call failed; stopping cycle");
                        yield Emission {
                            label: spec.display_name,
                            outcome: Outcome::Failed { message: e.to_string() },
                        };
                        return;
                    }
                }
            }
            let messages = vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(format!("{INSTRUCTION_PREFIX}{source}")),
            ];
            // Chat failures are surfaced like every other failure in the
            // cycle instead of aborting the stream.
            match chat.complete(CHAT_ENGINE, &messages).await {
                Ok(reply) => {
                    debug!(engine = CHAT_ENGINE, "chat reply received");
                    yield Emission {
                        label: CHAT_ENGINE.to_string(),
                        outcome: Outcome::Question { text: reply },
                    };
                }
                Err(e) => {
                    warn!(engine = CHAT_ENGINE, error = %e, "chat completion failed");
                    yield Emission {
                        label: CHAT_ENGINE.to_string(),
                        outcome: Outcome::Failed { message: e.to_string() },
                    };
                }
            }
        })
    }
}
