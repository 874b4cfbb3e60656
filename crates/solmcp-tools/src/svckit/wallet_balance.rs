//! Wallet Balance Tool

use std::sync::Arc;

use async_trait::async_trait;

use solmcp_core::{ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

use super::or_null;
use crate::upstream::BalancesClient;

const NAME: &str = "wallet_balance";

/// Returns the balances payload for a wallet, or `null` if the lookup fails
pub struct WalletBalanceTool {
    client: Arc<dyn BalancesClient>,
}

impl WalletBalanceTool {
    pub fn new(client: Arc<dyn BalancesClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WalletBalanceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Get wallet balance of wallet address".into(),
            parameters: vec![ParameterSchema::required_string(
                "address",
                "Solana wallet address",
            )],
            category: Some("wallet".into()),
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let address = call.str_arg("address")?;
        let balances = or_null(NAME, self.client.get_balances(address).await);
        Ok(ToolResult::success(NAME, balances))
    }
}
