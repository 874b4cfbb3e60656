//! Application State

use std::sync::Arc;

use solmcp_core::ToolRegistry;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    /// Tool registry with all available tools
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(tools: ToolRegistry) -> Self {
        Self {
            tools: Arc::new(tools),
        }
    }
}
