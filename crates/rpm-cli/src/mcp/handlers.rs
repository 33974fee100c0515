//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use rpm_core::{
    build_prompt, result_schema, FormInput, Generator, OperationStatus, OptionCatalog,
    RpmDocument, Session, GENERATION_FAILED_MESSAGE,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::{to_invalid_params, to_mcp_error};

/// Generic MCP wrapper for core parameter types.
///
/// Deserialization and schema generation pass straight through to the
/// wrapped type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Form = McpParams<FormInput>;

/// Parameters of `generate_rpm`: the form plus an output switch.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRpm {
    #[serde(flatten)]
    pub form: FormInput,

    /// Return the plan as JSON instead of a markdown document
    #[serde(default)]
    pub as_json: bool,
}

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    generator: Arc<Mutex<Generator>>,
}

impl McpHandlers {
    pub fn new(generator: Arc<Mutex<Generator>>) -> Self {
        Self { generator }
    }

    pub async fn generate_rpm(&self, Parameters(params): Parameters<GenerateRpm>) -> McpResult {
        debug!("generate_rpm: {:?}", params);

        let GenerateRpm { form, as_json } = params;
        let form = form.into_form().map_err(|e| to_invalid_params(&e))?;

        let generator = self.generator.lock().await;
        let mut session = Session::with_form(form);
        session
            .submit(&generator)
            .await
            .map_err(|e| to_mcp_error("Failed to submit form", &e))?;

        let Some(output) = session.output() else {
            let message = session.error().unwrap_or(GENERATION_FAILED_MESSAGE);
            return Ok(CallToolResult::error(vec![Content::text(
                OperationStatus::failure(message).to_string(),
            )]));
        };

        let text = if as_json {
            serde_json::to_string_pretty(output).map_err(|e| {
                ErrorData::internal_error(format!("Failed to serialize plan: {e}"), None)
            })?
        } else {
            RpmDocument::new(output)
                .generated_at(session.generated_at())
                .to_string()
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    pub fn build_prompt(&self, Parameters(params): Parameters<Form>) -> McpResult {
        debug!("build_prompt: {:?}", params);

        let form = params
            .as_ref()
            .clone()
            .into_form()
            .map_err(|e| to_invalid_params(&e))?;
        Ok(CallToolResult::success(vec![Content::text(build_prompt(
            &form,
        ))]))
    }

    pub fn result_schema(&self) -> McpResult {
        let schema = serde_json::to_string_pretty(&result_schema()).map_err(|e| {
            ErrorData::internal_error(format!("Failed to serialize schema: {e}"), None)
        })?;
        Ok(CallToolResult::success(vec![Content::text(schema)]))
    }

    pub fn list_options(&self) -> McpResult {
        Ok(CallToolResult::success(vec![Content::text(
            OptionCatalog.to_string(),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_generate_params_flatten_the_form() {
        let params: GenerateRpm = serde_json::from_value(json!({
            "schoolName": "SMK Negeri 1 Depok",
            "meetingCount": 2,
            "asJson": true
        }))
        .unwrap();
        assert!(params.as_json);
        assert_eq!(params.form.school_name.as_deref(), Some("SMK Negeri 1 Depok"));
        assert_eq!(params.form.meeting_count, Some(2));
    }

    #[test]
    fn test_form_params_are_transparent() {
        let params: Form = serde_json::from_value(json!({ "subject": "Sejarah" })).unwrap();
        assert_eq!(params.as_ref().subject.as_deref(), Some("Sejarah"));
    }
}
