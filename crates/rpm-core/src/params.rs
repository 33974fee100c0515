//! Partial form input shared by the CLI, the MCP server and form files.
//!
//! Every field is optional. A [`FormInput`] is applied on top of a
//! [`FormData`] through the form transitions, so the form invariants hold
//! whatever the input contained.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌─────────────────┐
//! │  form file   │    │  CLI flags / │    │    FormData     │
//! │ (TOML, JSON) │───▶│  MCP params  │───▶│  (normalised)   │
//! └──────────────┘    └──────────────┘    └─────────────────┘
//!        base            overrides              apply
//! ```

use std::path::Path;

use log::warn;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{EducationLevel, GraduateDimension, PedagogicalPractice},
    error::{Result, ResultExt, RpmError},
    models::{FormData, FormField},
};

/// Optional values for every form field, in wire (camelCase) naming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    /// Name of the school
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,

    /// Name of the subject teacher
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,

    /// Teacher's NIP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_nip: Option<String>,

    /// Name of the principal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_name: Option<String>,

    /// Principal's NIP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_nip: Option<String>,

    /// School level: SD, SMP or SMA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,

    /// Grade offered at the education level (e.g. "10")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    /// Subject (mata pelajaran)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Capaian Pembelajaran text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_outcomes: Option<String>,

    /// Main learning material
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_material: Option<String>,

    /// Number of meetings (1-10, clamped). Defaults to the number of
    /// practices when only those are given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_count: Option<u32>,

    /// Duration of each meeting, e.g. "2 x 45 menit"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_duration: Option<String>,

    /// Practice per meeting, in meeting order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pedagogical_practices: Option<Vec<PedagogicalPractice>>,

    /// Graduate dimensions to emphasise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduate_dimensions: Option<Vec<GraduateDimension>>,
}

impl FormInput {
    /// Read a form file. Files ending in `.json` are parsed as JSON, anything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// `RpmError::FileSystem` if the file cannot be read,
    /// `RpmError::Configuration` if it cannot be parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RpmError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&contents)
                .with_context_lazy(|| format!("Invalid form file {}", path.display()))
        } else {
            toml::from_str(&contents)
                .with_context_lazy(|| format!("Invalid form file {}", path.display()))
        }
    }

    /// Combine with `overrides`, whose values win where present.
    pub fn merge(self, overrides: FormInput) -> FormInput {
        FormInput {
            school_name: overrides.school_name.or(self.school_name),
            teacher_name: overrides.teacher_name.or(self.teacher_name),
            teacher_nip: overrides.teacher_nip.or(self.teacher_nip),
            principal_name: overrides.principal_name.or(self.principal_name),
            principal_nip: overrides.principal_nip.or(self.principal_nip),
            education_level: overrides.education_level.or(self.education_level),
            grade: overrides.grade.or(self.grade),
            subject: overrides.subject.or(self.subject),
            learning_outcomes: overrides.learning_outcomes.or(self.learning_outcomes),
            learning_material: overrides.learning_material.or(self.learning_material),
            meeting_count: overrides.meeting_count.or(self.meeting_count),
            meeting_duration: overrides.meeting_duration.or(self.meeting_duration),
            pedagogical_practices: overrides.pedagogical_practices.or(self.pedagogical_practices),
            graduate_dimensions: overrides.graduate_dimensions.or(self.graduate_dimensions),
        }
    }

    /// Apply the present values to `form`.
    ///
    /// The level is applied before the grade, and the meeting count before
    /// the practices. Practices beyond the meeting count are dropped with a
    /// warning.
    ///
    /// # Errors
    ///
    /// `RpmError::InvalidInput` if the grade is not offered at the resulting
    /// level.
    pub fn apply(&self, form: &mut FormData) -> Result<()> {
        if let Some(level) = self.education_level {
            form.change_education_level(level);
        }
        if let Some(grade) = &self.grade {
            form.select_grade(grade)?;
        }

        for (field, value) in self.text_fields() {
            if let Some(value) = value {
                form.set_field(field, value.as_str());
            }
        }

        let practices = self
            .pedagogical_practices
            .as_deref()
            .filter(|practices| !practices.is_empty());
        let count = self
            .meeting_count
            .or_else(|| practices.map(|p| p.len() as u32));
        if let Some(count) = count {
            form.change_meeting_count(count);
        }

        if let Some(practices) = practices {
            let meetings = form.pedagogical_practices.len();
            if practices.len() > meetings {
                warn!(
                    "Ignoring {} practice(s) beyond meeting {meetings}",
                    practices.len() - meetings
                );
            }
            for (index, practice) in practices.iter().take(meetings).enumerate() {
                form.select_practice(index, *practice)?;
            }
        }

        if let Some(dimensions) = &self.graduate_dimensions {
            form.set_dimensions(dimensions);
        }

        form.normalize();
        Ok(())
    }

    /// Build a form from defaults plus this input.
    pub fn into_form(self) -> Result<FormData> {
        let mut form = FormData::default();
        self.apply(&mut form)?;
        Ok(form)
    }

    fn text_fields(&self) -> [(FormField, &Option<String>); 9] {
        [
            (FormField::SchoolName, &self.school_name),
            (FormField::TeacherName, &self.teacher_name),
            (FormField::TeacherNip, &self.teacher_nip),
            (FormField::PrincipalName, &self.principal_name),
            (FormField::PrincipalNip, &self.principal_nip),
            (FormField::Subject, &self.subject),
            (FormField::LearningOutcomes, &self.learning_outcomes),
            (FormField::LearningMaterial, &self.learning_material),
            (FormField::MeetingDuration, &self.meeting_duration),
        ]
    }
}

impl From<&FormData> for FormInput {
    fn from(form: &FormData) -> Self {
        Self {
            school_name: Some(form.school_name.clone()),
            teacher_name: Some(form.teacher_name.clone()),
            teacher_nip: Some(form.teacher_nip.clone()),
            principal_name: Some(form.principal_name.clone()),
            principal_nip: Some(form.principal_nip.clone()),
            education_level: Some(form.education_level),
            grade: Some(form.grade.clone()),
            subject: Some(form.subject.clone()),
            learning_outcomes: Some(form.learning_outcomes.clone()),
            learning_material: Some(form.learning_material.clone()),
            meeting_count: Some(form.meeting_count),
            meeting_duration: Some(form.meeting_duration.clone()),
            pedagogical_practices: Some(form.pedagogical_practices.clone()),
            graduate_dimensions: Some(form.graduate_dimensions.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use PedagogicalPractice::*;

    #[test]
    fn test_merge_prefers_overrides() {
        let base = FormInput {
            school_name: Some("SD 1".to_string()),
            subject: Some("IPA".to_string()),
            ..FormInput::default()
        };
        let overrides = FormInput {
            subject: Some("Matematika".to_string()),
            ..FormInput::default()
        };

        let merged = base.merge(overrides);
        assert_eq!(merged.school_name.as_deref(), Some("SD 1"));
        assert_eq!(merged.subject.as_deref(), Some("Matematika"));
    }

    #[test]
    fn test_level_is_applied_before_grade() {
        let input = FormInput {
            education_level: Some(EducationLevel::Sd),
            grade: Some("4".to_string()),
            ..FormInput::default()
        };
        let form = input.into_form().unwrap();
        assert_eq!(form.education_level, EducationLevel::Sd);
        assert_eq!(form.grade, "4");
    }

    #[test]
    fn test_grade_not_offered_is_rejected() {
        let input = FormInput {
            education_level: Some(EducationLevel::Smp),
            grade: Some("12".to_string()),
            ..FormInput::default()
        };
        let err = input.into_form().unwrap_err();
        assert!(matches!(err, RpmError::InvalidInput { ref field, .. } if field == "grade"));
    }

    #[test]
    fn test_practices_imply_meeting_count() {
        let input = FormInput {
            pedagogical_practices: Some(vec![Inkuiri, PjBL, Inkuiri]),
            ..FormInput::default()
        };
        let form = input.into_form().unwrap();
        assert_eq!(form.meeting_count, 3);
        assert_eq!(form.pedagogical_practices, vec![Inkuiri, PjBL, Inkuiri]);
    }

    #[test]
    fn test_extra_practices_are_dropped() {
        let input = FormInput {
            meeting_count: Some(2),
            pedagogical_practices: Some(vec![Diskusi, PjBL, Kolaboratif]),
            ..FormInput::default()
        };
        let form = input.into_form().unwrap();
        assert_eq!(form.pedagogical_practices, vec![Diskusi, PjBL]);
    }

    #[test]
    fn test_short_practice_list_is_padded() {
        let input = FormInput {
            meeting_count: Some(3),
            pedagogical_practices: Some(vec![Diskusi]),
            ..FormInput::default()
        };
        let form = input.into_form().unwrap();
        assert_eq!(form.pedagogical_practices, vec![Diskusi, Inkuiri, Inkuiri]);
    }

    #[test]
    fn test_dimensions_are_deduplicated() {
        let input = FormInput {
            graduate_dimensions: Some(vec![
                GraduateDimension::Kreativitas,
                GraduateDimension::Kolaborasi,
                GraduateDimension::Kreativitas,
            ]),
            ..FormInput::default()
        };
        let form = input.into_form().unwrap();
        assert_eq!(
            form.graduate_dimensions,
            vec![GraduateDimension::Kreativitas, GraduateDimension::Kolaborasi]
        );
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
schoolName = "SMA Negeri 3 Bandung"
educationLevel = "SMA"
grade = "11"
meetingCount = 2
pedagogicalPractices = ["PjBL", "Diskusi"]
graduateDimensions = ["Penalaran Kritis"]
"#
        )
        .unwrap();

        let form = FormInput::from_path(file.path()).unwrap().into_form().unwrap();
        assert_eq!(form.school_name, "SMA Negeri 3 Bandung");
        assert_eq!(form.grade, "11");
        assert_eq!(form.pedagogical_practices, vec![PjBL, Diskusi]);
        assert_eq!(
            form.graduate_dimensions,
            vec![GraduateDimension::PenalaranKritis]
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"subject": "Biologi", "educationLevel": "SMP", "meetingCount": 12}}"#
        )
        .unwrap();

        let form = FormInput::from_path(file.path()).unwrap().into_form().unwrap();
        assert_eq!(form.subject, "Biologi");
        assert_eq!(form.grade, "7");
        assert_eq!(form.meeting_count, 10);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            FormInput::from_path(file.path()),
            Err(RpmError::Configuration { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_filesystem_error() {
        let err = FormInput::from_path(Path::new("/nonexistent/form.toml")).unwrap_err();
        assert!(matches!(err, RpmError::FileSystem { .. }));
    }

    #[test]
    fn test_template_round_trips_through_toml() {
        let mut form = FormData {
            school_name: "MTs Al-Hikmah".to_string(),
            ..FormData::default()
        };
        form.change_education_level(EducationLevel::Smp);
        form.change_meeting_count(2);
        form.select_practice(1, GameBasedLearning).unwrap();

        let text = toml::to_string(&FormInput::from(&form)).unwrap();
        let parsed: FormInput = toml::from_str(&text).unwrap();
        assert_eq!(parsed.into_form().unwrap(), form);
    }
}
