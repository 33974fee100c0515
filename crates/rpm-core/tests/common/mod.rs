#![allow(dead_code)]

use async_trait::async_trait;
use rpm_core::{
    GenerationBackend, Generator, GeneratorBuilder, GeneratorConfig, PromptRequest, Result,
    RpmError,
};
use serde_json::json;

/// Backend that answers every request with the same text, or fails with a
/// service error when built with [`MockBackend::failing`].
pub struct MockBackend {
    reply: Option<String>,
}

impl MockBackend {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn complete(&self, _request: &PromptRequest) -> Result<String> {
        self.reply.clone().ok_or_else(|| RpmError::Service {
            status: 500,
            message: "INTERNAL".to_string(),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Helper function to create a generator over a mock backend
pub fn create_test_generator(backend: MockBackend) -> Generator {
    GeneratorBuilder::new()
        .with_config(GeneratorConfig::default())
        .with_backend(Box::new(backend))
        .build()
        .expect("Failed to create generator")
}

/// A well-formed reply with one learning experience per practice and an
/// identification that disagrees with any real form.
pub fn plan_reply(practices: &[&str]) -> String {
    let meetings: Vec<_> = practices
        .iter()
        .enumerate()
        .map(|(index, practice)| {
            json!({
                "meeting": index + 1,
                "pedagogicalPractice": practice,
                "learningMaterial": format!("Bagian {}", index + 1),
                "activities": {
                    "opening": "Salam dan apersepsi",
                    "core": "Kegiatan inti",
                    "closing": "Refleksi"
                },
                "toolsAndMaterials": ["Proyektor", "LKPD"]
            })
        })
        .collect();

    json!({
        "identification": {
            "schoolName": "Sekolah Lain",
            "subject": "Mapel Lain",
            "meetingCount": 99
        },
        "learningDesign": {
            "learningOutcomes": "Peserta didik mampu menganalisis ekosistem",
            "learningObjectives": ["Mengidentifikasi komponen ekosistem"],
            "graduateDimensions": ["Penalaran Kritis"],
            "keyQuestions": ["Bagaimana energi mengalir?"]
        },
        "learningExperience": meetings,
        "learningAssessment": {
            "formative": { "technique": "Observasi", "description": "Rubrik diskusi" },
            "summative": { "technique": "Proyek", "description": "Poster ekosistem" }
        }
    })
    .to_string()
}
