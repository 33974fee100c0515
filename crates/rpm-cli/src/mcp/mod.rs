//! MCP server exposing RPM generation to AI assistants over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use rpm_core::Generator;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{Form, GenerateRpm, McpResult};

/// MCP server for the RPM generator
#[derive(Clone)]
pub struct RpmMcpServer {
    generator: Arc<Mutex<Generator>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RpmMcpServer {
    pub fn new(generator: Generator) -> Self {
        Self {
            generator: Arc::new(Mutex::new(generator)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.generator.clone())
    }

    #[tool(
        name = "generate_rpm",
        description = "Generate a complete Rencana Pembelajaran Mendalam (lesson plan) for an Indonesian school. Provide the form fields in camelCase (schoolName, teacherName, teacherNip, principalName, principalNip, educationLevel SD/SMP/SMA, grade, subject, learningOutcomes, learningMaterial, meetingCount 1-10, meetingDuration, pedagogicalPractices per meeting, graduateDimensions). Missing fields use form defaults. Returns a markdown document, or JSON with asJson=true. Calls an external generation service and can take a while."
    )]
    async fn generate_rpm(&self, params: Parameters<GenerateRpm>) -> McpResult {
        self.handlers().generate_rpm(params).await
    }

    #[tool(
        name = "build_prompt",
        description = "Show the exact prompt generate_rpm would send for the given form fields, without calling the generation service."
    )]
    async fn build_prompt(&self, params: Parameters<Form>) -> McpResult {
        self.handlers().build_prompt(params)
    }

    #[tool(
        name = "result_schema",
        description = "Return the JSON schema that generated plans must follow (learningDesign, learningExperience, learningAssessment)."
    )]
    async fn result_schema(&self) -> McpResult {
        self.handlers().result_schema()
    }

    #[tool(
        name = "list_options",
        description = "List valid education levels with their grades, pedagogical practices and graduate dimensions for the form."
    )]
    async fn list_options(&self) -> McpResult {
        self.handlers().list_options()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RpmMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "rpmgen".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"rpmgen writes Rencana Pembelajaran Mendalam (RPM) lesson plans for Indonesian teachers.

## Workflow
1. Call `list_options` to see valid education levels, grades, practices and dimensions
2. Optionally call `build_prompt` with the form to review what will be sent
3. Call `generate_rpm` with the form; one learning experience is produced per meeting

## Notes
- The identification section (school, teacher, principal, NIPs, level, grade, meetings) is always copied from the form
- `pedagogicalPractices` lists one practice per meeting; when `meetingCount` is omitted it follows the list length
- Generation failures return a single message: "Gagal membuat RPM. Silakan coba lagi." and can be retried"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: RpmMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting rpmgen MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
