use crate::backend::BackendError;
use crate::protocol::ToolErrorPayload;
use crate::tools::Tool;

/// Why a tool call produced an `{"error": ...}` payload.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: &'static str, reason: String },

    /// No variant of the coffee can currently be bought; the order is
    /// abandoned before checkout.
    #[error("No available variant for {coffee}")]
    NoAvailableVariant { coffee: String },

    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    pub fn invalid_arguments(tool: Tool, reason: impl ToString) -> Self {
        Self::InvalidArguments {
            tool: tool.name(),
            reason: reason.to_string(),
        }
    }
}

impl From<ToolError> for ToolErrorPayload {
    fn from(err: ToolError) -> Self {
        ToolErrorPayload::new(err.to_string())
    }
}
