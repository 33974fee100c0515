//! Session controller: one form, the last result and the submission state.
//!
//! A submission is split into [`Session::begin_submit`] and
//! [`Session::finish_submit`] so that a caller can race the generation future
//! against something else (Ctrl-C in the CLI) and call
//! [`Session::abandon_submit`] when it loses. [`Session::submit`] composes the
//! two for the common case.

use jiff::Timestamp;
use log::{error, info, warn};

use crate::{
    error::{Result, RpmError, GENERATION_FAILED_MESSAGE},
    generator::Generator,
    models::{FormData, RpmOutput},
};

/// Top-level state for one teacher working on one plan.
#[derive(Debug, Default)]
pub struct Session {
    form: FormData,
    output: Option<RpmOutput>,
    generated_at: Option<Timestamp>,
    error: Option<String>,
    in_flight: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an already filled form.
    pub fn with_form(mut form: FormData) -> Self {
        form.normalize();
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Mutable access for the form transitions in [`crate::form`].
    pub fn form_mut(&mut self) -> &mut FormData {
        &mut self.form
    }

    /// The last successfully generated plan.
    pub fn output(&self) -> Option<&RpmOutput> {
        self.output.as_ref()
    }

    /// When [`Session::output`] was produced.
    pub fn generated_at(&self) -> Option<Timestamp> {
        self.generated_at
    }

    /// The user-facing message of the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Mark a submission as started and return the form to send.
    ///
    /// Clears the previous error and output. The form is normalized first, so
    /// edits made through [`Session::form_mut`] that bypassed the transitions
    /// are repaired before anything is sent.
    ///
    /// # Errors
    ///
    /// `RpmError::GenerationInProgress` if a submission is already running.
    pub fn begin_submit(&mut self) -> Result<FormData> {
        if self.in_flight {
            return Err(RpmError::GenerationInProgress);
        }
        self.in_flight = true;
        self.error = None;
        self.output = None;
        self.generated_at = None;
        self.form.normalize();
        Ok(self.form.clone())
    }

    /// Record the outcome of the submission started by
    /// [`Session::begin_submit`].
    ///
    /// Generation failures are logged with their cause and reduced to
    /// [`GENERATION_FAILED_MESSAGE`]. Any other error keeps its own message.
    pub fn finish_submit(&mut self, outcome: Result<RpmOutput>) {
        self.in_flight = false;
        match outcome {
            Ok(output) => {
                info!(
                    "Stored RPM with {} meetings",
                    output.learning_experience.len()
                );
                self.output = Some(output);
                self.generated_at = Some(Timestamp::now());
            }
            Err(e) if e.is_generation_failure() => {
                error!("Error generating RPM: {e}");
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
            }
            Err(e) => {
                error!("Submission failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Drop an in-flight submission without recording a result.
    pub fn abandon_submit(&mut self) {
        if self.in_flight {
            warn!("Generation cancelled");
        }
        self.in_flight = false;
    }

    /// Generate a plan for the current form and store the outcome.
    ///
    /// Success or failure ends up in [`Session::output`] or
    /// [`Session::error`].
    ///
    /// # Errors
    ///
    /// Only `RpmError::GenerationInProgress`.
    pub async fn submit(&mut self, generator: &Generator) -> Result<()> {
        let form = self.begin_submit()?;
        let outcome = generator.generate(&form).await;
        self.finish_submit(outcome);
        Ok(())
    }

    /// Clear the result and the error and restore form defaults.
    pub fn reset(&mut self) {
        self.form.reset();
        self.output = None;
        self.generated_at = None;
        self.error = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
