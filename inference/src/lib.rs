//! Clients for the remote text-generation services.
//!
//! Two families of service are spoken here: hosted seq2seq models reached
//! through a shared inference API ([`HostedModelClient`]) and a
//! chat-completion endpoint ([`OpenAiChatClient`]). Both implement the
//! traits in [`traits`] so callers stay decoupled from the transport.

pub mod chat;
pub mod hosted;
pub mod traits;

pub use chat::{ChatMessage, OpenAiChatClient, Role, OPENAI_API_BASE};
pub use hosted::{GenerationOutcome, HostedModelClient, HUB_API_BASE};
pub use traits::{ChatCompleter, InferenceError, TextGenerator};
