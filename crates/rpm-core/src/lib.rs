//! Core library for the RPM (Rencana Pembelajaran Mendalam) generator.
//!
//! This crate turns a teacher's form into a structured lesson plan: it keeps
//! the form consistent while it is edited, builds the prompt and response
//! schema for the generation service, validates the reply and renders the
//! finished plan as markdown.
//!
//! # Architecture
//!
//! - **Form** ([`models::FormData`], [`form`]): editable state with
//!   transitions that keep one practice per meeting
//! - **Prompt** ([`prompt`]): pure prompt and schema construction
//! - **Generator** ([`generator`]): one request per submission, strict reply
//!   validation, identification copied from the form
//! - **Session** ([`session`]): the form plus the last result or error
//! - **Display** ([`display`]): markdown for terminals and MCP clients
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rpm_core::{catalog::PedagogicalPractice, GeneratorBuilder, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeneratorBuilder::new().build()?;
//!
//! let mut session = Session::new();
//! let form = session.form_mut();
//! form.school_name = "SMA Negeri 1 Bandung".to_string();
//! form.subject = "Fisika".to_string();
//! form.change_meeting_count(2);
//! form.select_practice(1, PedagogicalPractice::PjBL)?;
//!
//! session.submit(&generator).await?;
//! match (session.output(), session.error()) {
//!     (Some(plan), _) => println!("{plan}"),
//!     (None, Some(message)) => eprintln!("{message}"),
//!     (None, None) => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod generator;
pub mod models;
pub mod params;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use display::{OperationStatus, OptionCatalog, RpmDocument};
pub use error::{Result, RpmError, GENERATION_FAILED_MESSAGE};
pub use generator::{GenerationBackend, Generator, GeneratorBuilder};
pub use models::{FormData, RpmOutput};
pub use params::FormInput;
pub use prompt::{build_prompt, result_schema, PromptRequest};
pub use session::Session;
