//! Form model: the teacher's current input for one RPM.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{EducationLevel, GraduateDimension, PedagogicalPractice};

/// Smallest number of meetings a plan can cover.
pub const MIN_MEETINGS: u32 = 1;

/// Largest number of meetings a plan can cover.
pub const MAX_MEETINGS: u32 = 10;

/// Duration used for every meeting unless the teacher changes it.
pub const DEFAULT_MEETING_DURATION: &str = "2 x 45 menit";

/// Editable record holding everything needed to request a plan.
///
/// `pedagogical_practices.len() == meeting_count as usize` holds after every
/// transition in [`crate::form`]. The meeting fields are only writable through
/// those transitions; read them with [`FormData::meeting_count`],
/// [`FormData::pedagogical_practices`] and [`FormData::graduate_dimensions`].
/// A form deserialized from elsewhere is not checked until
/// [`FormData::normalize`] runs, which the session and the generator do before
/// sending it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    /// Name of the school (satuan pendidikan)
    pub school_name: String,

    /// Name of the subject teacher
    pub teacher_name: String,

    /// Teacher's civil-servant identifier (NIP)
    pub teacher_nip: String,

    /// Name of the principal
    pub principal_name: String,

    /// Principal's civil-servant identifier (NIP)
    pub principal_nip: String,

    /// School level
    pub education_level: EducationLevel,

    /// Grade, constrained to the grades of `education_level`
    pub grade: String,

    /// Subject (mata pelajaran)
    pub subject: String,

    /// Capaian Pembelajaran text
    pub learning_outcomes: String,

    /// Main learning material to be split across meetings
    pub learning_material: String,

    /// Number of meetings, between [`MIN_MEETINGS`] and [`MAX_MEETINGS`]
    pub(crate) meeting_count: u32,

    /// Duration of each meeting, free text
    pub meeting_duration: String,

    /// Practice per meeting, in meeting order
    pub(crate) pedagogical_practices: Vec<PedagogicalPractice>,

    /// Selected graduate dimensions, without duplicates
    pub(crate) graduate_dimensions: Vec<GraduateDimension>,
}

impl Default for FormData {
    fn default() -> Self {
        let education_level = EducationLevel::default();
        Self {
            school_name: String::new(),
            teacher_name: String::new(),
            teacher_nip: String::new(),
            principal_name: String::new(),
            principal_nip: String::new(),
            education_level,
            grade: education_level.first_grade().to_string(),
            subject: String::new(),
            learning_outcomes: String::new(),
            learning_material: String::new(),
            meeting_count: MIN_MEETINGS,
            meeting_duration: DEFAULT_MEETING_DURATION.to_string(),
            pedagogical_practices: vec![PedagogicalPractice::first(); MIN_MEETINGS as usize],
            graduate_dimensions: Vec::new(),
        }
    }
}

/// Free-text fields addressable by the generic field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SchoolName,
    TeacherName,
    TeacherNip,
    PrincipalName,
    PrincipalNip,
    Subject,
    LearningOutcomes,
    LearningMaterial,
    MeetingDuration,
}

impl FormField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SchoolName => "schoolName",
            Self::TeacherName => "teacherName",
            Self::TeacherNip => "teacherNip",
            Self::PrincipalName => "principalName",
            Self::PrincipalNip => "principalNip",
            Self::Subject => "subject",
            Self::LearningOutcomes => "learningOutcomes",
            Self::LearningMaterial => "learningMaterial",
            Self::MeetingDuration => "meetingDuration",
        }
    }
}
