//! Error types for the RPM generator library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// User-facing message shown whenever a generation attempt fails.
pub const GENERATION_FAILED_MESSAGE: &str = "Gagal membuat RPM. Silakan coba lagi.";

/// Comprehensive error type for all generator operations.
#[derive(Error, Debug)]
pub enum RpmError {
    /// No API key was configured for the generation service
    #[error("No API key configured for the generation service")]
    MissingCredential,
    /// The request never reached the service or the connection failed
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-success status
    #[error("Generation service returned {status}: {message}")]
    Service { status: u16, message: String },
    /// The service answered but carried no text
    #[error("Generation service returned an empty response")]
    EmptyResponse,
    /// The reply text was not a JSON document
    #[error("Malformed response from generation service: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },
    /// The reply was JSON but did not match the result schema
    #[error("Response does not match the result schema at '{path}': {reason}")]
    SchemaViolation { path: String, reason: String },
    /// A submission was attempted while another one is still running
    #[error("A generation request is already in progress")]
    GenerationInProgress,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RpmError {
        RpmError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for schema violations, tracking the JSON path of the offending
/// value.
pub struct SchemaViolationBuilder {
    path: String,
}

impl SchemaViolationBuilder {
    /// Create a new schema violation builder at a JSON path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RpmError {
        RpmError::SchemaViolation {
            path: self.path,
            reason: reason.into(),
        }
    }
}

impl RpmError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for schema violations.
    pub fn schema_violation(path: impl Into<String>) -> SchemaViolationBuilder {
        SchemaViolationBuilder::new(path)
    }

    /// Creates a transport error with additional context.
    pub fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    /// Whether this error belongs to the generation failure family.
    ///
    /// All of these collapse to [`GENERATION_FAILED_MESSAGE`] at the session
    /// level; the variant is kept for logging.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential
                | Self::Transport { .. }
                | Self::Service { .. }
                | Self::EmptyResponse
                | Self::MalformedResponse { .. }
                | Self::SchemaViolation { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add lazy context to any error type, converting to RpmError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| RpmError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, RpmError>;
