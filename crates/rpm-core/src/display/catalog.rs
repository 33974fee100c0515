//! Listing of every option a form accepts.

use std::fmt;

use crate::{
    catalog::{EducationLevel, GraduateDimension, PedagogicalPractice},
    models::{DEFAULT_MEETING_DURATION, MAX_MEETINGS, MIN_MEETINGS},
};

/// Markdown overview of levels and grades, practices and dimensions.
///
/// ```rust
/// use rpm_core::display::OptionCatalog;
///
/// let text = OptionCatalog.to_string();
/// assert!(text.contains("SMP / Sederajat: 7, 8, 9"));
/// ```
pub struct OptionCatalog;

impl fmt::Display for OptionCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Pilihan Formulir RPM")?;
        writeln!(f)?;

        writeln!(f, "## Jenjang Pendidikan")?;
        writeln!(f)?;
        for level in EducationLevel::ALL {
            writeln!(f, "- `{}` {}: {}", level.as_str(), level.label(), level.grades().join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "## Praktik Pedagogis")?;
        writeln!(f)?;
        for practice in PedagogicalPractice::ALL {
            if practice.label() == practice.as_str() {
                writeln!(f, "- `{}`", practice.as_str())?;
            } else {
                writeln!(f, "- `{}` {}", practice.as_str(), practice.label())?;
            }
        }
        writeln!(f)?;

        writeln!(f, "## Dimensi Lulusan")?;
        writeln!(f)?;
        for dimension in GraduateDimension::ALL {
            writeln!(f, "- `{}`", dimension.as_str())?;
        }
        writeln!(f)?;

        writeln!(f, "## Pertemuan")?;
        writeln!(f)?;
        writeln!(
            f,
            "{MIN_MEETINGS} sampai {MAX_MEETINGS} pertemuan, durasi bawaan {DEFAULT_MEETING_DURATION}."
        )
    }
}
