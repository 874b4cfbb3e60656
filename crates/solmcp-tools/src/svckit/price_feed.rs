//! Oracle Price Tool
//!
//! Resolves a base58 price account address or a `0x` hex feed id to a key,
//! reads the Pyth price account behind it and classifies the aggregate.

use std::sync::Arc;

use async_trait::async_trait;

use solmcp_core::{ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

use crate::error::Result;
use crate::model::{AccountKey, PriceReport};
use crate::upstream::PriceAccountSource;

const NAME: &str = "get_price";

pub struct PriceFeedTool {
    source: Arc<dyn PriceAccountSource>,
}

impl PriceFeedTool {
    pub fn new(source: Arc<dyn PriceAccountSource>) -> Self {
        Self { source }
    }

    /// Never fails: every error is folded into [`PriceReport::Error`]
    pub async fn lookup(&self, mint_address: &str) -> PriceReport {
        match self.try_lookup(mint_address).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(mint_address, error = %err, "Price lookup failed");
                PriceReport::failed(&err)
            }
        }
    }

    async fn try_lookup(&self, mint_address: &str) -> Result<PriceReport> {
        let key = AccountKey::parse(mint_address)?;
        let account = self.source.load_price_account(&key).await?;
        PriceReport::from_account(&account)
    }
}

#[async_trait]
impl Tool for PriceFeedTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Fetch price data for a given token mint address using the Pyth Oracle. \
                          Accepts a price account address or a 0x-prefixed price feed ID and returns \
                          the price and confidence interval."
                .into(),
            parameters: vec![ParameterSchema::required_string(
                "mint_address",
                "The mint address of the token or Pyth price feed ID",
            )],
            category: Some("market_data".into()),
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let mint_address = call.str_arg("mint_address")?;
        let report = self.lookup(mint_address).await;
        Ok(ToolResult::success(NAME, serde_json::to_value(report)?))
    }
}
