//! Error handling utilities for MCP server

use rmcp::ErrorData;
use rpm_core::RpmError;

/// Convert a core error into an MCP internal error.
pub fn to_mcp_error(message: &str, error: &RpmError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Form errors are the caller's fault.
pub fn to_invalid_params(error: &RpmError) -> ErrorData {
    ErrorData::invalid_params(error.to_string(), None)
}
