//! Result schema describing the JSON the generation service must return.
//!
//! The schema uses the Gemini `responseSchema` dialect (`type` names in upper
//! case, `properties`, `items`, `required`). It covers the generated part of
//! the plan only; identification is filled in from the form afterwards.

use serde_json::{json, Value};

/// Type tags understood by the result schema.
pub const TYPE_OBJECT: &str = "OBJECT";
pub const TYPE_ARRAY: &str = "ARRAY";
pub const TYPE_STRING: &str = "STRING";
pub const TYPE_INTEGER: &str = "INTEGER";

fn string() -> Value {
    json!({ "type": TYPE_STRING })
}

fn string_list() -> Value {
    json!({ "type": TYPE_ARRAY, "items": string() })
}

/// Build an OBJECT schema whose properties are all required, in the given
/// order.
fn object(properties: &[(&str, Value)]) -> Value {
    let names: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let map: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| ((*name).to_string(), schema.clone()))
        .collect();
    json!({
        "type": TYPE_OBJECT,
        "properties": map,
        "required": names,
        "propertyOrdering": names,
    })
}

fn assessment() -> Value {
    object(&[("technique", string()), ("description", string())])
}

/// The schema sent with every generation request and used to validate the
/// reply.
///
/// ```rust
/// use rpm_core::prompt::result_schema;
///
/// let schema = result_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert!(schema["properties"].get("identification").is_none());
/// ```
pub fn result_schema() -> Value {
    let learning_design = object(&[
        ("learningOutcomes", string()),
        ("learningObjectives", string_list()),
        ("graduateDimensions", string_list()),
        ("keyQuestions", string_list()),
    ]);

    let experience = object(&[
        ("meeting", json!({ "type": TYPE_INTEGER })),
        ("pedagogicalPractice", string()),
        ("learningMaterial", string()),
        (
            "activities",
            object(&[("opening", string()), ("core", string()), ("closing", string())]),
        ),
        ("toolsAndMaterials", string_list()),
    ]);

    let learning_assessment = object(&[("formative", assessment()), ("summative", assessment())]);

    object(&[
        ("learningDesign", learning_design),
        (
            "learningExperience",
            json!({ "type": TYPE_ARRAY, "items": experience }),
        ),
        ("learningAssessment", learning_assessment),
    ])
}
