//! Generation client: sends a form to the generation service and turns the
//! reply into an [`RpmOutput`].
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌─────────┐   ┌──────────┐   ┌───────────┐
//! │ FormData │──▶│ PromptRequest │──▶│ Backend │──▶│ validate │──▶│ RpmOutput │
//! └──────────┘   └───────────────┘   └─────────┘   └──────────┘   └───────────┘
//!                                                        ▲              ▲
//!                                                  result schema   identification
//!                                                                   from the form
//! ```
//!
//! The service is called exactly once per [`Generator::generate`]; there is no
//! retry. Every failure is an [`RpmError`] for which
//! [`RpmError::is_generation_failure`] holds.
//!
//! # Examples
//!
//! ```rust,no_run
//! use rpm_core::{models::FormData, GeneratorBuilder};
//!
//! # async fn example() -> rpm_core::Result<()> {
//! let generator = GeneratorBuilder::new().build()?;
//! let output = generator.generate(&FormData::default()).await?;
//! println!("{} meetings", output.learning_experience.len());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod builder;
pub mod gemini;
pub mod validate;


use log::{debug, info, warn};
use serde_json::Value;

pub use backend::GenerationBackend;
pub use builder::GeneratorBuilder;
pub use gemini::GeminiBackend;

use crate::{
    error::{Result, RpmError},
    models::{FormData, GeneratedPlan, RpmOutput},
    prompt::PromptRequest,
};

/// Generation client bound to one backend.
pub struct Generator {
    pub(crate) backend: Box<dyn GenerationBackend>,
    pub(crate) temperature: f32,
    pub(crate) strict_meeting_count: bool,
}

impl Generator {
    /// Creates a generator over `backend`.
    pub(crate) fn new(
        backend: Box<dyn GenerationBackend>,
        temperature: f32,
        strict_meeting_count: bool,
    ) -> Self {
        Self {
            backend,
            temperature,
            strict_meeting_count,
        }
    }

    /// The request that [`Generator::generate`] would send for `form`.
    pub fn request_for(&self, form: &FormData) -> PromptRequest {
        PromptRequest::from_form(&normalized(form), self.temperature)
    }

    /// Generate a plan for `form`.
    ///
    /// `form` is normalized before use, so the prompt always lists one
    /// practice per meeting. The returned identification is derived from the
    /// normalized form, whatever the service put in its reply.
    ///
    /// # Errors
    ///
    /// Any backend error, `RpmError::EmptyResponse` for a blank reply,
    /// `RpmError::MalformedResponse` for non-JSON text and
    /// `RpmError::SchemaViolation` when the reply does not match the result
    /// schema.
    pub async fn generate(&self, form: &FormData) -> Result<RpmOutput> {
        let form = normalized(form);
        let request = PromptRequest::from_form(&form, self.temperature);
        info!(
            "Generating RPM for '{}' ({} meetings) via {}",
            form.subject,
            form.meeting_count,
            self.backend.name()
        );

        let raw = self.backend.complete(&request).await?;
        debug!("Received {} bytes from {}", raw.len(), self.backend.name());

        let plan = self.parse_reply(&raw, &request.schema, form.meeting_count)?;
        Ok(plan.with_identification(&form))
    }

    /// Parse, validate and convert raw reply text.
    fn parse_reply(&self, raw: &str, schema: &Value, meeting_count: u32) -> Result<GeneratedPlan> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(RpmError::EmptyResponse);
        }

        let document: Value =
            serde_json::from_str(text).map_err(|source| RpmError::MalformedResponse { source })?;
        validate::validate(&document, schema)?;

        let plan: GeneratedPlan = serde_json::from_value(document).map_err(|e| {
            RpmError::schema_violation("$").with_reason(e.to_string())
        })?;

        let returned = plan.learning_experience.len();
        if returned != meeting_count as usize {
            if self.strict_meeting_count {
                return Err(RpmError::schema_violation("learningExperience").with_reason(
                    format!("expected {meeting_count} meetings, found {returned}"),
                ));
            }
            warn!("Reply has {returned} meetings, form asked for {meeting_count}");
        }

        Ok(plan)
    }
}

fn normalized(form: &FormData) -> FormData {
    let mut form = form.clone();
    form.normalize();
    form
}
