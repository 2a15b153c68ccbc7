pub mod error;
pub mod manifest;
pub mod provider;
pub mod tools;
pub mod types;

use serde_json::Value;

pub use error::ProviderError;
pub use provider::{ClientConfig, TushareClient, PLACEHOLDER_TOKEN, TOKEN_ENV_VAR, TUSHARE_API_URL};
pub use tools::{NewsTool, ToolHandler, ToolRegistry};
pub use types::{NewsQuery, ResultEnvelope, ToolStatus};

/// The plugin: one client, one registry, no globals. Construct it once and
/// share it by reference; every call path through it is read-only.
pub struct Plugin {
    tools: ToolRegistry,
}

impl Plugin {
    /// Wire up a client from `config` and register the news tool.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(TushareClient::new(config))
    }

    /// Like [`Plugin::new`] with the token taken from the environment.
    pub fn from_env() -> Self {
        Self::with_client(TushareClient::from_env())
    }

    /// Build the plugin around an existing client. Tests use this to inject
    /// a client pointed at a stub server.
    pub fn with_client(client: TushareClient) -> Self {
        let tools =
            ToolRegistry::new().add("get_sina_news", NewsTool::schema(), NewsTool::new(client));
        Self { tools }
    }

    /// Execute a tool by name. This is the whole inbound surface: any
    /// failure comes back inside the envelope, never as an `Err` or a
    /// panic.
    pub async fn dispatch(&self, tool_name: &str, params: &Value) -> ResultEnvelope {
        self.tools.dispatch(tool_name, params).await
    }

    /// Plugin declaration for the host.
    pub fn manifest(&self) -> Value {
        manifest::manifest(&self.tools)
    }
}
