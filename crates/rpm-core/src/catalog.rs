//! Static option catalog: education levels, grades, pedagogical practices and
//! graduate dimensions.
//!
//! The string values are part of the wire format: they are interpolated into
//! prompts and appear verbatim in form files and generated plans.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// School level an RPM is written for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum EducationLevel {
    /// Sekolah Dasar (grades 1-6)
    #[serde(rename = "SD")]
    Sd,

    /// Sekolah Menengah Pertama (grades 7-9)
    #[serde(rename = "SMP")]
    Smp,

    /// Sekolah Menengah Atas (grades 10-12)
    #[default]
    #[serde(rename = "SMA")]
    Sma,
}

impl EducationLevel {
    /// All levels in catalog order.
    pub const ALL: [EducationLevel; 3] = [Self::Sd, Self::Smp, Self::Sma];

    /// Wire representation of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sd => "SD",
            Self::Smp => "SMP",
            Self::Sma => "SMA",
        }
    }

    /// Label used in forms and in the identification section.
    ///
    /// ```rust
    /// use rpm_core::catalog::EducationLevel;
    ///
    /// assert_eq!(EducationLevel::Smp.label(), "SMP / Sederajat");
    /// ```
    pub fn label(&self) -> String {
        format!("{} / Sederajat", self.as_str())
    }

    /// Grades offered at this level, in ascending order.
    pub fn grades(&self) -> &'static [&'static str] {
        match self {
            Self::Sd => &["1", "2", "3", "4", "5", "6"],
            Self::Smp => &["7", "8", "9"],
            Self::Sma => &["10", "11", "12"],
        }
    }

    /// First grade of the level; an education-level change resets the grade to
    /// this value.
    pub fn first_grade(&self) -> &'static str {
        self.grades()[0]
    }

    /// Whether `grade` is offered at this level.
    pub fn offers_grade(&self, grade: &str) -> bool {
        self.grades().contains(&grade)
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SD" => Ok(Self::Sd),
            "SMP" => Ok(Self::Smp),
            "SMA" => Ok(Self::Sma),
            _ => Err(format!("Invalid education level: {s} (use SD, SMP or SMA)")),
        }
    }
}

/// Teaching method assigned to a single meeting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum PedagogicalPractice {
    #[default]
    Inkuiri,
    #[serde(rename = "PjBL")]
    PjBL,
    Diskusi,
    Kolaboratif,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    #[serde(rename = "Game Based Learning")]
    GameBasedLearning,
    #[serde(rename = "Station Learning")]
    StationLearning,
}

impl PedagogicalPractice {
    /// All practices in catalog order. The first entry pads new meetings.
    pub const ALL: [PedagogicalPractice; 7] = [
        Self::Inkuiri,
        Self::PjBL,
        Self::Diskusi,
        Self::Kolaboratif,
        Self::ProblemSolving,
        Self::GameBasedLearning,
        Self::StationLearning,
    ];

    /// Wire representation of the practice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inkuiri => "Inkuiri",
            Self::PjBL => "PjBL",
            Self::Diskusi => "Diskusi",
            Self::Kolaboratif => "Kolaboratif",
            Self::ProblemSolving => "Problem Solving",
            Self::GameBasedLearning => "Game Based Learning",
            Self::StationLearning => "Station Learning",
        }
    }

    /// Human-readable label shown in option lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PjBL => "Project Based Learning (PjBL)",
            other => other.as_str(),
        }
    }

    /// Practice used when a new meeting slot is created.
    pub fn first() -> Self {
        Self::ALL[0]
    }
}

impl FromStr for PedagogicalPractice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| {
                p.as_str().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("Invalid pedagogical practice: {s}"))
    }
}

/// Target competency of the graduate profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum GraduateDimension {
    #[serde(rename = "Keimanan & Ketakwaan")]
    KeimananKetakwaan,
    Kewargaan,
    #[serde(rename = "Penalaran Kritis")]
    PenalaranKritis,
    Kreativitas,
    Kolaborasi,
    Kemandirian,
    Kesehatan,
    Komunikasi,
}

impl GraduateDimension {
    /// All dimensions in catalog order.
    pub const ALL: [GraduateDimension; 8] = [
        Self::KeimananKetakwaan,
        Self::Kewargaan,
        Self::PenalaranKritis,
        Self::Kreativitas,
        Self::Kolaborasi,
        Self::Kemandirian,
        Self::Kesehatan,
        Self::Komunikasi,
    ];

    /// Wire representation of the dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeimananKetakwaan => "Keimanan & Ketakwaan",
            Self::Kewargaan => "Kewargaan",
            Self::PenalaranKritis => "Penalaran Kritis",
            Self::Kreativitas => "Kreativitas",
            Self::Kolaborasi => "Kolaborasi",
            Self::Kemandirian => "Kemandirian",
            Self::Kesehatan => "Kesehatan",
            Self::Komunikasi => "Komunikasi",
        }
    }
}

impl FromStr for GraduateDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Invalid graduate dimension: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grades_per_level() {
        assert_eq!(EducationLevel::Sd.grades().len(), 6);
        assert_eq!(EducationLevel::Smp.first_grade(), "7");
        assert_eq!(EducationLevel::Sma.first_grade(), "10");
        assert!(EducationLevel::Sma.offers_grade("12"));
        assert!(!EducationLevel::Sma.offers_grade("9"));
    }

    #[test]
    fn test_level_parsing_is_case_insensitive() {
        assert_eq!("smp".parse::<EducationLevel>(), Ok(EducationLevel::Smp));
        assert!("SMK".parse::<EducationLevel>().is_err());
    }

    #[test]
    fn test_practice_parses_value_or_label() {
        assert_eq!(
            "Project Based Learning (PjBL)".parse::<PedagogicalPractice>(),
            Ok(PedagogicalPractice::PjBL)
        );
        assert_eq!(
            "problem solving".parse::<PedagogicalPractice>(),
            Ok(PedagogicalPractice::ProblemSolving)
        );
        assert!("Ceramah".parse::<PedagogicalPractice>().is_err());
    }

    #[test]
    fn test_serde_uses_catalog_values() {
        let json = serde_json::to_string(&[
            PedagogicalPractice::GameBasedLearning,
            PedagogicalPractice::PjBL,
        ])
        .unwrap();
        assert_eq!(json, r#"["Game Based Learning","PjBL"]"#);

        let dimension: GraduateDimension =
            serde_json::from_str(r#""Keimanan & Ketakwaan""#).unwrap();
        assert_eq!(dimension, GraduateDimension::KeimananKetakwaan);

        let level: EducationLevel = serde_json::from_str(r#""SD""#).unwrap();
        assert_eq!(level, EducationLevel::Sd);
    }

    #[test]
    fn test_first_practice_is_inkuiri() {
        assert_eq!(PedagogicalPractice::first(), PedagogicalPractice::Inkuiri);
        assert_eq!(PedagogicalPractice::default(), PedagogicalPractice::first());
    }
}
