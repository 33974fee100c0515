//! State transitions over [`FormData`].
//!
//! Every transition keeps `pedagogical_practices.len()` equal to
//! `meeting_count`. Meeting counts outside the allowed range are clamped
//! rather than rejected.

use log::debug;

use crate::{
    catalog::{EducationLevel, GraduateDimension, PedagogicalPractice},
    error::{Result, RpmError},
    models::{FormData, FormField, MAX_MEETINGS, MIN_MEETINGS},
};

impl FormData {
    pub fn meeting_count(&self) -> u32 {
        self.meeting_count
    }

    /// Practice per meeting, one entry for each of
    /// [`FormData::meeting_count`] meetings.
    pub fn pedagogical_practices(&self) -> &[PedagogicalPractice] {
        &self.pedagogical_practices
    }

    pub fn graduate_dimensions(&self) -> &[GraduateDimension] {
        &self.graduate_dimensions
    }

    /// Replace the value of a free-text field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            FormField::SchoolName => &mut self.school_name,
            FormField::TeacherName => &mut self.teacher_name,
            FormField::TeacherNip => &mut self.teacher_nip,
            FormField::PrincipalName => &mut self.principal_name,
            FormField::PrincipalNip => &mut self.principal_nip,
            FormField::Subject => &mut self.subject,
            FormField::LearningOutcomes => &mut self.learning_outcomes,
            FormField::LearningMaterial => &mut self.learning_material,
            FormField::MeetingDuration => &mut self.meeting_duration,
        };
        *slot = value;
    }

    /// Switch to another education level.
    ///
    /// The grade always resets to the first grade of the new level, even when
    /// the level is unchanged.
    pub fn change_education_level(&mut self, level: EducationLevel) {
        self.education_level = level;
        self.grade = level.first_grade().to_string();
    }

    /// Select a grade offered at the current education level.
    ///
    /// # Errors
    ///
    /// Returns `RpmError::InvalidInput` if the level does not offer `grade`.
    pub fn select_grade(&mut self, grade: &str) -> Result<()> {
        let grade = grade.trim();
        if !self.education_level.offers_grade(grade) {
            return Err(RpmError::invalid_input("grade").with_reason(format!(
                "grade {grade} is not offered at {} (choose one of {})",
                self.education_level.as_str(),
                self.education_level.grades().join(", ")
            )));
        }
        self.grade = grade.to_string();
        Ok(())
    }

    /// Change the number of meetings, clamped to
    /// [`MIN_MEETINGS`]..=[`MAX_MEETINGS`].
    ///
    /// Existing practice selections are kept for the meetings that remain;
    /// new meetings start with [`PedagogicalPractice::first`]. Returns the
    /// count actually applied.
    ///
    /// ```rust
    /// use rpm_core::models::FormData;
    ///
    /// let mut form = FormData::default();
    /// assert_eq!(form.change_meeting_count(25), 10);
    /// assert_eq!(form.pedagogical_practices().len(), 10);
    /// assert_eq!(form.change_meeting_count(0), 1);
    /// ```
    pub fn change_meeting_count(&mut self, count: u32) -> u32 {
        let clamped = count.clamp(MIN_MEETINGS, MAX_MEETINGS);
        if clamped != count {
            debug!("Meeting count {count} clamped to {clamped}");
        }
        self.meeting_count = clamped;
        self.pedagogical_practices
            .resize(clamped as usize, PedagogicalPractice::first());
        clamped
    }

    /// Assign a practice to the meeting at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns `RpmError::InvalidInput` if `index` is not a current meeting.
    pub fn select_practice(&mut self, index: usize, practice: PedagogicalPractice) -> Result<()> {
        let count = self.pedagogical_practices.len();
        let slot = self.pedagogical_practices.get_mut(index).ok_or_else(|| {
            RpmError::invalid_input("pedagogicalPractices").with_reason(format!(
                "meeting {} does not exist (plan has {count} meetings)",
                index + 1
            ))
        })?;
        *slot = practice;
        Ok(())
    }

    /// Add the dimension if absent, remove it if present. Returns whether the
    /// dimension is selected afterwards.
    pub fn toggle_dimension(&mut self, dimension: GraduateDimension) -> bool {
        if let Some(position) = self.graduate_dimensions.iter().position(|d| *d == dimension) {
            self.graduate_dimensions.remove(position);
            false
        } else {
            self.graduate_dimensions.push(dimension);
            true
        }
    }

    /// Replace the selected dimensions, dropping duplicates while keeping the
    /// first occurrence order.
    pub fn set_dimensions(&mut self, dimensions: &[GraduateDimension]) {
        self.graduate_dimensions.clear();
        for dimension in dimensions {
            if !self.graduate_dimensions.contains(dimension) {
                self.graduate_dimensions.push(*dimension);
            }
        }
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = FormData::default();
    }

    /// Re-establish the form invariants on data that did not come through the
    /// transitions, such as a deserialized form.
    ///
    /// The meeting count is clamped, the practice list resized to match, the
    /// grade reset if the level does not offer it, and duplicate dimensions
    /// removed.
    pub fn normalize(&mut self) {
        self.change_meeting_count(self.meeting_count);
        if !self.education_level.offers_grade(&self.grade) {
            debug!(
                "Grade {} not offered at {}, resetting",
                self.grade,
                self.education_level.as_str()
            );
            self.grade = self.education_level.first_grade().to_string();
        }
        let dimensions = std::mem::take(&mut self.graduate_dimensions);
        self.set_dimensions(&dimensions);
    }
}
