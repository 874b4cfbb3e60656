//! Cluster Info Tools
//!
//! `get_inflation`, `get_epoch` and `get_inflagov` differ only in the RPC
//! method they send, so one type serves all three.

use std::sync::Arc;

use async_trait::async_trait;

use solmcp_core::{Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

use super::or_null;
use crate::model::ClusterMethod;
use crate::upstream::ClusterRpcClient;

pub struct ClusterInfoTool {
    client: Arc<dyn ClusterRpcClient>,
    method: ClusterMethod,
}

impl ClusterInfoTool {
    pub fn new(client: Arc<dyn ClusterRpcClient>, method: ClusterMethod) -> Self {
        Self { client, method }
    }

    pub fn inflation(client: Arc<dyn ClusterRpcClient>) -> Self {
        Self::new(client, ClusterMethod::InflationRate)
    }

    pub fn epoch(client: Arc<dyn ClusterRpcClient>) -> Self {
        Self::new(client, ClusterMethod::EpochSchedule)
    }

    pub fn inflation_governor(client: Arc<dyn ClusterRpcClient>) -> Self {
        Self::new(client, ClusterMethod::InflationGovernor)
    }
}

#[async_trait]
impl Tool for ClusterInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.method.tool_name().into(),
            description: self.method.description().into(),
            parameters: vec![],
            category: Some("cluster".into()),
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let name = self.method.tool_name();
        let body = or_null(name, self.client.call(self.method).await);
        Ok(ToolResult::success(name, body))
    }
}
