//! Instruction-completion wire types

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct InstructionRequest {
    pub inputs: String,
    pub parameters: InstructionParameters,
}

#[derive(Debug, Serialize)]
pub(crate) struct InstructionParameters {
    pub max_new_tokens: u32,
    pub return_full_text: bool,
}

/// One element of the array the router returns
#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedText {
    #[serde(default)]
    pub generated_text: Option<String>,
}

/// Wrap a prompt in the Mistral instruction template.
pub(crate) fn instruction_prompt(prompt: &str) -> String {
    format!("<s>[INST] {prompt} [/INST]")
}
