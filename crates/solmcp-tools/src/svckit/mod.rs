//! Service Kit - Agent Tools
//!
//! Tools that implement `solmcp_core::Tool`. Each one wraps a single upstream
//! call; failures are logged and surfaced to the caller as `null` (or, for
//! `get_price`, as an `ERROR` report).

mod cluster_info;
mod price_feed;
mod token_feed;
mod wallet_balance;

pub use cluster_info::ClusterInfoTool;
pub use price_feed::PriceFeedTool;
pub use token_feed::{LatestTokensTool, TokenBoostsTool};
pub use wallet_balance::WalletBalanceTool;

use serde_json::Value;

use crate::error::Result;

/// Collapse an upstream failure into `null`, keeping the cause in the log
fn or_null(tool: &str, result: Result<Value>) -> Value {
    result.unwrap_or_else(|err| {
        tracing::warn!(tool, error = %err, "Upstream call failed, returning null");
        Value::Null
    })
}
