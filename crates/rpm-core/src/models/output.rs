//! Generated plan model.
//!
//! Field names follow the camelCase JSON contract shared with the generation
//! service and the result schema in [`crate::prompt::schema`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::FormData;

/// A complete Rencana Pembelajaran Mendalam.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RpmOutput {
    pub identification: Identification,
    pub learning_design: LearningDesign,
    pub learning_experience: Vec<LearningExperience>,
    pub learning_assessment: LearningAssessment,
}

/// Administrative header of the plan, always taken from the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub school_name: String,
    pub subject: String,
    /// Level label, e.g. `SMA / Sederajat`
    pub education_level: String,
    pub grade: String,
    pub teacher_name: String,
    pub teacher_nip: String,
    pub principal_name: String,
    pub principal_nip: String,
    pub meeting_count: u32,
    pub meeting_duration: String,
}

impl From<&FormData> for Identification {
    fn from(form: &FormData) -> Self {
        Self {
            school_name: form.school_name.clone(),
            subject: form.subject.clone(),
            education_level: form.education_level.label(),
            grade: form.grade.clone(),
            teacher_name: form.teacher_name.clone(),
            teacher_nip: form.teacher_nip.clone(),
            principal_name: form.principal_name.clone(),
            principal_nip: form.principal_nip.clone(),
            meeting_count: form.meeting_count,
            meeting_duration: form.meeting_duration.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LearningDesign {
    pub learning_outcomes: String,
    pub learning_objectives: Vec<String>,
    pub graduate_dimensions: Vec<String>,
    pub key_questions: Vec<String>,
}

/// One meeting of the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LearningExperience {
    /// 1-based meeting ordinal
    pub meeting: u32,
    pub pedagogical_practice: String,
    /// Sub-topic of the main material covered in this meeting
    pub learning_material: String,
    pub activities: Activities,
    pub tools_and_materials: Vec<String>,
}

/// The three phases of a meeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Activities {
    pub opening: String,
    pub core: String,
    pub closing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LearningAssessment {
    pub formative: Assessment,
    pub summative: Assessment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Assessment {
    pub technique: String,
    pub description: String,
}

/// The part of a plan produced by the generation service.
///
/// Any `identification` the service echoes back is ignored when
/// deserializing; [`GeneratedPlan::with_identification`] supplies the trusted
/// one.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub learning_design: LearningDesign,
    pub learning_experience: Vec<LearningExperience>,
    pub learning_assessment: LearningAssessment,
}

impl GeneratedPlan {
    /// Complete the plan with identification derived from `form`.
    pub fn with_identification(self, form: &FormData) -> RpmOutput {
        RpmOutput {
            identification: Identification::from(form),
            learning_design: self.learning_design,
            learning_experience: self.learning_experience,
            learning_assessment: self.learning_assessment,
        }
    }
}
