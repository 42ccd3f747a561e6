//! The fixed roster of remote models queried for each passage.

/// Instruction prepended for models that expect a task description.
pub const INSTRUCTION_PREFIX: &str = "generate a question: ";

/// Marker naming the instruction-tuned model family.
const FAMILY_MARKER: &str = "flan";

/// One remote text-generation endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelSpec {
    /// Opaque name of the model on the hosted inference API.
    pub identifier: String,
    /// The segment of the identifier after the last `/`.
    pub display_name: String,
    /// Whether the model expects [`INSTRUCTION_PREFIX`] before the passage.
    pub instruction_prefixed: bool,
}

impl ModelSpec {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let display_name = identifier
            .rsplit('/')
            .next()
            .unwrap_or(&identifier)
            .to_string();
        let instruction_prefixed = display_name.to_lowercase().contains(FAMILY_MARKER);
        Self {
            identifier,
            display_name,
            instruction_prefixed,
        }
    }

    /// Prompt sent to this model for `source_text`.
    pub fn prompt_for(&self, source_text: &str) -> String {
        if self.instruction_prefixed {
            format!("{INSTRUCTION_PREFIX}{source_text}")
        } else {
            source_text.to_string()
        }
    }
}

/// The three checkpoints queried, in call order. The first two are
/// fine-tuned on the r/AskScience split of ELI5; the third is used
/// zero-shot.
pub fn roster() -> Vec<ModelSpec> {
    [
        "dhmeltzer/bart-large_askscience-qg",
        "dhmeltzer/flan-t5-base_askscience-qg",
        "google/flan-t5-xxl",
    ]
    .into_iter()
    .map(ModelSpec::new)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_last_segment() {
        let spec = ModelSpec::new("dhmeltzer/bart-large_askscience-qg");
        assert_eq!(spec.display_name, "bart-large_askscience-qg");
    }

    #[test]
    fn family_marker_is_case_insensitive() {
        assert!(ModelSpec::new("org/FLAN-t5-base").instruction_prefixed);
        assert!(ModelSpec::new("google/flan-t5-xxl").instruction_prefixed);
        assert!(!ModelSpec::new("dhmeltzer/bart-large_askscience-qg").instruction_prefixed);
    }

    #[test]
    fn prompt_is_prefixed_only_for_the_family() {
        let text = "Black holes are dense.";
        let bart = ModelSpec::new("dhmeltzer/bart-large_askscience-qg");
        let flan = ModelSpec::new("google/flan-t5-xxl");
        assert_eq!(bart.prompt_for(text), text);
        assert_eq!(flan.prompt_for(text), format!("generate a question: {text}"));
    }

    #[test]
    fn roster_order_is_fixed() {
        let names: Vec<_> = roster().into_iter().map(|s| s.identifier).collect();
        assert_eq!(
            names,
            [
                "dhmeltzer/bart-large_askscience-qg",
                "dhmeltzer/flan-t5-base_askscience-qg",
                "google/flan-t5-xxl",
            ]
        );
    }
}
