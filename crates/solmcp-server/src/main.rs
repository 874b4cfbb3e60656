//! SolMCP stdio server
//!
//! Speaks MCP (newline-delimited JSON-RPC) on stdin/stdout and exposes the
//! Solana market-data tools from `solmcp-tools`. Logs go to stderr.

mod handlers;
mod protocol;
mod state;
mod stdio;

use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solmcp_core::ToolRegistry;
use solmcp_tools::{
    tools::{ClusterInfoTool, LatestTokensTool, PriceFeedTool, TokenBoostsTool, WalletBalanceTool},
    upstream::{
        ClusterRpcClient, DexScreenerClient, GetBlockClient, HeliusClient, PythnetClient,
        TokenFeedClient,
    },
    SolConfig,
};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();

    let config = SolConfig::from_env()?;

    if config.helius.api_key.is_none() {
        tracing::warn!("HELIUS_API_KEY not set - wallet_balance will return null");
    }
    if config.getblock.api_key.is_none() {
        tracing::warn!("GETBLOCK_API_KEY not set - cluster info tools will return null");
    }

    let tools = build_registry(&config);

    tracing::info!("Registered {} tools:", tools.len());
    for name in tools.names() {
        tracing::info!("  • {}", name);
    }

    let state = AppState::new(tools);

    tracing::info!("{} v{} listening on stdio", handlers::SERVER_NAME, env!("CARGO_PKG_VERSION"));
    stdio::serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), state).await?;

    Ok(())
}

fn build_registry(config: &SolConfig) -> ToolRegistry {
    let http = reqwest::Client::new();

    let token_feed: Arc<dyn TokenFeedClient> =
        Arc::new(DexScreenerClient::new(http.clone(), &config.dexscreener));
    let cluster_rpc: Arc<dyn ClusterRpcClient> =
        Arc::new(GetBlockClient::new(http.clone(), &config.getblock));

    let mut tools = ToolRegistry::new();

    tools.register(WalletBalanceTool::new(Arc::new(HeliusClient::new(
        http,
        &config.helius,
    ))));

    tools.register(LatestTokensTool::new(token_feed.clone()));
    tools.register(TokenBoostsTool::new(token_feed));

    tools.register(PriceFeedTool::new(Arc::new(PythnetClient::new(&config.pythnet))));

    tools.register(ClusterInfoTool::inflation(cluster_rpc.clone()));
    tools.register(ClusterInfoTool::epoch(cluster_rpc.clone()));
    tools.register(ClusterInfoTool::inflation_governor(cluster_rpc));

    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tools_registered() {
        let tools = build_registry(&SolConfig::default());
        assert_eq!(
            tools.names(),
            vec![
                "get_epoch",
                "get_inflagov",
                "get_inflation",
                "get_latesttokens",
                "get_price",
                "get_tokenboosts",
                "wallet_balance",
            ]
        );
    }

    #[tokio::test]
    async fn test_registered_tools_degrade_without_credentials() {
        let state = AppState::new(build_registry(&SolConfig::default()));

        let call = solmcp_core::ToolCall::new("wallet_balance").with_argument("address", "abc");
        let result = state.tools.execute(&call).await.unwrap();
        assert!(result.data.is_null());

        let call = solmcp_core::ToolCall::new("get_inflation");
        let result = state.tools.execute(&call).await.unwrap();
        assert!(result.data.is_null());

        let call = solmcp_core::ToolCall::new("get_price").with_argument("mint_address", "0x12");
        let result = state.tools.execute(&call).await.unwrap();
        assert_eq!(result.data["status"], "ERROR");
    }
}
