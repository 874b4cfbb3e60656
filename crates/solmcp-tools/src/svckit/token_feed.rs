//! DexScreener Token Feed Tools
//!
//! `get_latesttokens` and `get_tokenboosts` are registered separately but, with
//! the default configuration, both read the latest token profiles feed.

use std::sync::Arc;

use async_trait::async_trait;

use solmcp_core::{Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

use super::or_null;
use crate::upstream::TokenFeedClient;

pub struct LatestTokensTool {
    client: Arc<dyn TokenFeedClient>,
}

impl LatestTokensTool {
    const NAME: &'static str = "get_latesttokens";

    pub fn new(client: Arc<dyn TokenFeedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for LatestTokensTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.into(),
            description: "Get latest tokens from dexscreener".into(),
            parameters: vec![],
            category: Some("market_data".into()),
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let body = or_null(Self::NAME, self.client.latest_profiles().await);
        Ok(ToolResult::success(Self::NAME, body))
    }
}

pub struct TokenBoostsTool {
    client: Arc<dyn TokenFeedClient>,
}

impl TokenBoostsTool {
    const NAME: &'static str = "get_tokenboosts";

    pub fn new(client: Arc<dyn TokenFeedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TokenBoostsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.into(),
            description: "Get tokens with active boosts from dexscreener".into(),
            parameters: vec![],
            category: Some("market_data".into()),
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let body = or_null(Self::NAME, self.client.latest_boosts().await);
        Ok(ToolResult::success(Self::NAME, body))
    }
}
