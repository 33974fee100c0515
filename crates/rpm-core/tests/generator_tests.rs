mod common;

use common::{create_test_generator, plan_reply, MockBackend};
use rpm_core::{
    catalog::{EducationLevel, GraduateDimension, PedagogicalPractice},
    models::{FormData, Identification},
    FormInput, RpmError, Session, GENERATION_FAILED_MESSAGE,
};

fn biology_form() -> FormData {
    FormInput {
        school_name: Some("SMP Negeri 5 Surabaya".to_string()),
        teacher_name: Some("Siti Aminah".to_string()),
        teacher_nip: Some("198502022010012002".to_string()),
        principal_name: Some("Agus Salim".to_string()),
        principal_nip: Some("197001011995121001".to_string()),
        education_level: Some(EducationLevel::Smp),
        grade: Some("8".to_string()),
        subject: Some("IPA".to_string()),
        learning_outcomes: Some("Memahami interaksi dalam ekosistem".to_string()),
        learning_material: Some("Ekosistem".to_string()),
        meeting_count: Some(3),
        pedagogical_practices: Some(vec![
            PedagogicalPractice::Inkuiri,
            PedagogicalPractice::PjBL,
            PedagogicalPractice::Inkuiri,
        ]),
        graduate_dimensions: Some(vec![GraduateDimension::PenalaranKritis]),
        ..FormInput::default()
    }
    .into_form()
    .expect("Failed to build form")
}

#[tokio::test]
async fn test_three_meeting_plan_keeps_form_identification() {
    let generator =
        create_test_generator(MockBackend::replying(plan_reply(&["Inkuiri", "PjBL", "Inkuiri"])));
    let form = biology_form();

    let prompt = generator.request_for(&form).prompt;
    assert!(prompt.contains("Pertemuan 1: Inkuiri, Pertemuan 2: PjBL, Pertemuan 3: Inkuiri"));

    let output = generator.generate(&form).await.expect("generation failed");

    assert_eq!(output.learning_experience.len(), 3);
    assert_eq!(output.identification.school_name, "SMP Negeri 5 Surabaya");
    assert_eq!(output.identification.subject, "IPA");
    assert_eq!(output.identification.meeting_count, 3);
    assert_eq!(output.identification, Identification::from(&form));
    assert_eq!(output.learning_experience[1].pedagogical_practice, "PjBL");
}

#[tokio::test]
async fn test_malformed_reply_yields_no_result() {
    let generator = create_test_generator(MockBackend::replying("```json\n{ broken"));
    let mut session = Session::with_form(biology_form());

    session.submit(&generator).await.unwrap();

    assert!(session.output().is_none());
    assert_eq!(session.error(), Some(GENERATION_FAILED_MESSAGE));
    assert!(!session.is_in_flight());
}

#[tokio::test]
async fn test_schema_violation_names_the_path() {
    let mut reply: serde_json::Value = serde_json::from_str(&plan_reply(&["Inkuiri"])).unwrap();
    reply["learningExperience"][0]["activities"]
        .as_object_mut()
        .unwrap()
        .remove("closing");
    let generator = create_test_generator(MockBackend::replying(reply.to_string()));
    let mut form = FormData::default();
    form.change_meeting_count(1);

    let err = generator.generate(&form).await.unwrap_err();
    match err {
        RpmError::SchemaViolation { path, .. } => {
            assert_eq!(path, "learningExperience[0].activities.closing");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_reset_after_success_restores_defaults() {
    let generator =
        create_test_generator(MockBackend::replying(plan_reply(&["Inkuiri", "PjBL", "Inkuiri"])));
    let mut session = Session::with_form(biology_form());

    session.submit(&generator).await.unwrap();
    assert!(session.output().is_some());
    assert!(session.error().is_none());

    session.reset();
    assert!(session.output().is_none());
    assert!(session.error().is_none());
    assert_eq!(session.form(), &FormData::default());
}

#[tokio::test]
async fn test_service_failure_then_retry() {
    let failing = create_test_generator(MockBackend::failing());
    let mut session = Session::with_form(biology_form());

    session.submit(&failing).await.unwrap();
    assert_eq!(session.error(), Some(GENERATION_FAILED_MESSAGE));

    let working =
        create_test_generator(MockBackend::replying(plan_reply(&["Inkuiri", "PjBL", "Inkuiri"])));
    session.submit(&working).await.unwrap();
    assert!(session.error().is_none());
    assert_eq!(session.output().map(|o| o.learning_experience.len()), Some(3));
}
