//! Status messages for command and tool feedback.

use std::fmt;

/// Outcome line shown after an operation, e.g. a failed generation.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Berhasil:" } else { "Gagal:" };
        writeln!(f, "**{label}** {}", self.message)
    }
}
