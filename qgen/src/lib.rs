//! Core orchestration for the question-generation demo.
//!
//! One cycle takes a passage of text, queries the fixed [`model::roster`]
//! of hosted models in order, then a chat engine, and emits each labeled
//! result as it arrives. The first result that is not generated text stops
//! the cycle.

pub mod model;
pub mod orchestrator;

pub use model::{ModelSpec, INSTRUCTION_PREFIX, roster};
pub use orchestrator::{CHAT_ENGINE, Emission, Orchestrator, Outcome, SYSTEM_PROMPT};
