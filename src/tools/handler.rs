use async_trait::async_trait;
use serde_json::Value;

use crate::types::ResultEnvelope;

/// A tool's execution handler. Handlers are infallible at the type level:
/// every failure is already folded into an error envelope.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, params: &Value) -> ResultEnvelope;
}

/// A tool definition: schema for the host + handler for execution.
pub struct ToolDef {
    pub name: String,
    pub schema: Value,
    pub(crate) handler: Box<dyn ToolHandler>,
}
