use serde_json::Value;
use tracing::{debug, warn};

use super::handler::{ToolDef, ToolHandler};
use crate::types::ResultEnvelope;

/// Catalog of available tools. Stores definitions, provides schemas for the
/// manifest, and routes dispatch calls to handlers by name.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. The schema is the complete JSON tool declaration
    /// (name, description, parameters) exposed through the manifest.
    pub fn add(
        mut self,
        name: impl Into<String>,
        schema: Value,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        self.tools.push(ToolDef {
            name: name.into(),
            schema,
            handler: Box::new(handler),
        });
        self
    }

    /// All tool schemas, in registration order.
    pub fn schemas(&self) -> Vec<Value> {
        self.tools.iter().map(|t| t.schema.clone()).collect()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Execute a tool by name. An unrecognized name yields the uniform
    /// error envelope without invoking any handler; dispatch never panics
    /// and never returns a bare error.
    pub async fn dispatch(&self, name: &str, params: &Value) -> ResultEnvelope {
        match self.tools.iter().find(|t| t.name == name) {
            Some(tool) => {
                debug!(tool = name, "dispatching tool call");
                tool.handler.call(params).await
            }
            None => {
                warn!(tool = name, "unknown tool requested");
                ResultEnvelope::error(format!("unknown tool: {name}"))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolStatus;
    use serde_json::json;

    /// Echoes the params back through the envelope message.
    struct EchoTool;

    #[async_trait::async_trait]
    impl ToolHandler for EchoTool {
        async fn call(&self, params: &Value) -> ResultEnvelope {
            ResultEnvelope::success(params.to_string(), vec![])
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::new().add(
            "echo",
            json!({"name": "echo", "description": "Echoes input"}),
            EchoTool,
        )
    }

    #[tokio::test]
    async fn dispatch_forwards_params_to_handler() {
        let envelope = registry().dispatch("echo", &json!({"k": "v"})).await;
        assert_eq!(envelope.status, ToolStatus::Success);
        assert_eq!(envelope.message, r#"{"k":"v"}"#);
    }

    #[tokio::test]
    async fn unknown_tool_yields_error_envelope() {
        let envelope = registry().dispatch("nope", &json!({})).await;
        assert_eq!(envelope.status, ToolStatus::Error);
        assert_eq!(envelope.message, "unknown tool: nope");
        assert!(envelope.data.is_empty());
    }

    #[tokio::test]
    async fn unknown_tool_handles_odd_names_and_params() {
        let reg = registry();
        for name in ["", " ", "GET_SINA_NEWS", "echo ", "新闻"] {
            let envelope = reg.dispatch(name, &Value::Null).await;
            assert_eq!(envelope.status, ToolStatus::Error);
            assert!(envelope.data.is_empty());
        }
    }

    #[test]
    fn schemas_come_back_in_registration_order() {
        let reg = registry().add("b", json!({"name": "b"}), EchoTool);
        assert_eq!(reg.tool_names(), vec!["echo", "b"]);
        assert_eq!(reg.schemas()[1]["name"], "b");
        assert_eq!(reg.len(), 2);
        assert!(!reg.is_empty());
    }
}
