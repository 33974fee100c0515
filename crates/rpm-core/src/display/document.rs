//! Markdown rendering of a generated plan.
//!
//! The layout follows the printed RPM format: identification, learning
//! design, a per-meeting learning experience section, assessment and a
//! signature footer.

use std::fmt;

use jiff::Timestamp;

use super::datetime::LocalDate;
use crate::models::{Assessment, Identification, LearningExperience, RpmOutput};

/// A plan ready for display, optionally dated.
///
/// # Examples
///
/// ```rust
/// use rpm_core::{display::RpmDocument, models::RpmOutput};
///
/// fn show(output: &RpmOutput) -> String {
///     RpmDocument::new(output).to_string()
/// }
/// ```
pub struct RpmDocument<'a> {
    output: &'a RpmOutput,
    generated_at: Option<Timestamp>,
}

impl<'a> RpmDocument<'a> {
    pub fn new(output: &'a RpmOutput) -> Self {
        Self {
            output,
            generated_at: None,
        }
    }

    /// Print `timestamp` as the date above the teacher's signature.
    pub fn generated_at(mut self, timestamp: Option<Timestamp>) -> Self {
        self.generated_at = timestamp;
        self
    }

    fn fmt_identification(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = &self.output.identification;
        writeln!(f, "## A. Identifikasi")?;
        writeln!(f)?;
        writeln!(f, "- **Nama Satuan Pendidikan:** {}", or_dash(&id.school_name))?;
        writeln!(f, "- **Mata Pelajaran:** {}", or_dash(&id.subject))?;
        writeln!(
            f,
            "- **Jenjang / Kelas:** {} / {}",
            or_dash(&id.education_level),
            or_dash(&id.grade)
        )?;
        writeln!(
            f,
            "- **Jumlah & Durasi Pertemuan:** {} Pertemuan (@{})",
            id.meeting_count,
            or_dash(&id.meeting_duration)
        )?;
        writeln!(f)
    }

    fn fmt_design(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let design = &self.output.learning_design;
        writeln!(f, "## B. Desain Pembelajaran")?;
        writeln!(f)?;
        writeln!(f, "### Capaian Pembelajaran")?;
        writeln!(f)?;
        writeln!(f, "{}", or_dash(&design.learning_outcomes))?;
        writeln!(f)?;

        writeln!(f, "### Tujuan Pembelajaran")?;
        writeln!(f)?;
        fmt_list(f, &design.learning_objectives)?;

        writeln!(f, "### Dimensi Lulusan")?;
        writeln!(f)?;
        if design.graduate_dimensions.is_empty() {
            writeln!(f, "-")?;
        } else {
            writeln!(f, "{}", design.graduate_dimensions.join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "### Pertanyaan Kunci")?;
        writeln!(f)?;
        fmt_list(f, &design.key_questions)
    }

    fn fmt_experience(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meetings = &self.output.learning_experience;
        writeln!(f, "## C. Pengalaman Belajar")?;
        writeln!(f)?;
        if meetings.is_empty() {
            writeln!(f, "Tidak ada pertemuan.")?;
            return writeln!(f);
        }

        writeln!(f, "| Pertemuan | Praktik Pedagogis | Materi | Alat & Bahan |")?;
        writeln!(f, "|:-:|:-|:-|:-|")?;
        for meeting in meetings {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                meeting.meeting,
                cell(&meeting.pedagogical_practice),
                cell(&meeting.learning_material),
                cell(&meeting.tools_and_materials.join(", "))
            )?;
        }
        writeln!(f)?;

        for meeting in meetings {
            fmt_meeting(f, meeting)?;
        }
        Ok(())
    }

    fn fmt_assessment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = &self.output.learning_assessment;
        writeln!(f, "## D. Asesmen Pembelajaran")?;
        writeln!(f)?;
        fmt_assessment_entry(f, "Asesmen Formatif", &assessment.formative)?;
        fmt_assessment_entry(f, "Asesmen Sumatif", &assessment.summative)
    }

    fn fmt_signatures(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id: &Identification = &self.output.identification;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "Mengetahui,")?;
        writeln!(f, "Kepala Sekolah")?;
        writeln!(f)?;
        writeln!(f, "**{}**", or_dash(&id.principal_name))?;
        writeln!(f, "NIP. {}", or_dash(&id.principal_nip))?;
        writeln!(f)?;
        if let Some(timestamp) = &self.generated_at {
            writeln!(f, "{}", LocalDate(timestamp))?;
        }
        writeln!(f, "Guru Mata Pelajaran")?;
        writeln!(f)?;
        writeln!(f, "**{}**", or_dash(&id.teacher_name))?;
        writeln!(f, "NIP. {}", or_dash(&id.teacher_nip))
    }
}

impl<'a> fmt::Display for RpmDocument<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Rencana Pembelajaran Mendalam (RPM)")?;
        writeln!(f)?;
        self.fmt_identification(f)?;
        self.fmt_design(f)?;
        self.fmt_experience(f)?;
        self.fmt_assessment(f)?;
        self.fmt_signatures(f)
    }
}

impl fmt::Display for RpmOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", RpmDocument::new(self))
    }
}

fn fmt_meeting(f: &mut fmt::Formatter<'_>, meeting: &LearningExperience) -> fmt::Result {
    writeln!(
        f,
        "### Pertemuan {} ({})",
        meeting.meeting, meeting.pedagogical_practice
    )?;
    writeln!(f)?;
    writeln!(f, "**Materi:** {}", or_dash(&meeting.learning_material))?;
    writeln!(f)?;
    writeln!(f, "#### Pendahuluan")?;
    writeln!(f)?;
    writeln!(f, "{}", or_dash(&meeting.activities.opening))?;
    writeln!(f)?;
    writeln!(f, "#### Kegiatan Inti")?;
    writeln!(f)?;
    writeln!(f, "{}", or_dash(&meeting.activities.core))?;
    writeln!(f)?;
    writeln!(f, "#### Penutup")?;
    writeln!(f)?;
    writeln!(f, "{}", or_dash(&meeting.activities.closing))?;
    writeln!(f)
}

fn fmt_assessment_entry(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    entry: &Assessment,
) -> fmt::Result {
    writeln!(f, "### {title}")?;
    writeln!(f)?;
    writeln!(f, "- **Teknik:** {}", or_dash(&entry.technique))?;
    writeln!(f, "- **Deskripsi:** {}", or_dash(&entry.description))?;
    writeln!(f)
}

fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        writeln!(f, "-")?;
    }
    for (index, item) in items.iter().enumerate() {
        writeln!(f, "{}. {item}", index + 1)?;
    }
    writeln!(f)
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Table cells are single-line and must not contain the column separator.
fn cell(value: &str) -> String {
    let flat = value.replace(['\r', '\n'], " ").replace('|', "\\|");
    if flat.trim().is_empty() {
        "-".to_string()
    } else {
        flat
    }
}
