use serde_json::{json, Value};

use crate::tools::ToolRegistry;

pub const PLUGIN_NAME: &str = "tushare-sina-news";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PLUGIN_DESCRIPTION: &str = "Tushare Sina financial news exposed as plugin tools";

/// Host-facing plugin declaration: identity plus the schema of every
/// registered tool.
pub fn manifest(tools: &ToolRegistry) -> Value {
    json!({
        "name": PLUGIN_NAME,
        "version": PLUGIN_VERSION,
        "description": PLUGIN_DESCRIPTION,
        "tools": tools.schemas(),
    })
}
