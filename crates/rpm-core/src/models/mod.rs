//! Data models for the form and the generated plan.
//!
//! Display implementations for these models live in [`crate::display`] to keep
//! data structures separate from presentation, and the form transitions live
//! in [`crate::form`].
//!
//! # Examples
//!
//! ```rust
//! use rpm_core::models::{FormData, Identification};
//!
//! let mut form = FormData::default();
//! form.school_name = "SMA Negeri 1 Bandung".to_string();
//!
//! let identification = Identification::from(&form);
//! assert_eq!(identification.education_level, "SMA / Sederajat");
//! assert_eq!(identification.grade, "10");
//! ```

pub mod form;
pub mod output;


pub use form::{FormData, FormField, DEFAULT_MEETING_DURATION, MAX_MEETINGS, MIN_MEETINGS};
pub use output::{
    Activities, Assessment, GeneratedPlan, Identification, LearningAssessment, LearningDesign,
    LearningExperience, RpmOutput,
};
