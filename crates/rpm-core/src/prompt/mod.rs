//! Request builder: turns a form into the prompt, schema and sampling settings
//! sent to the generation service.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    FormData     │───▶│  build_prompt   │───▶│  PromptRequest  │
//! │                 │    │  result_schema  │    │ (prompt+schema) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

pub mod schema;
pub mod template;

use serde_json::Value;

pub use schema::result_schema;
pub use template::build_prompt;

use crate::models::FormData;

/// Sampling temperature used unless configured otherwise.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Everything a backend needs for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    /// Instruction text
    pub prompt: String,
    /// Structural constraint on the reply
    pub schema: Value,
    /// Sampling temperature
    pub temperature: f32,
}

impl PromptRequest {
    /// Build the request for `form` with the given temperature.
    pub fn from_form(form: &FormData, temperature: f32) -> Self {
        Self {
            prompt: build_prompt(form),
            schema: result_schema(),
            temperature,
        }
    }
}
