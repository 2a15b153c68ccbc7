pub mod handler;
pub mod news;
pub mod registry;

pub use handler::{ToolDef, ToolHandler};
pub use news::NewsTool;
pub use registry::ToolRegistry;
