//! Upstream Services
//!
//! One client trait per remote API (Strategy pattern), so the tools can be
//! exercised against mocks without network access.

mod dexscreener;
mod getblock;
mod helius;
mod pythnet;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
pub(crate) mod stub_server;

pub use dexscreener::DexScreenerClient;
pub use getblock::GetBlockClient;
pub use helius::HeliusClient;
pub use pythnet::{PythnetClient, PythnetConnection};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::model::{AccountKey, ClusterMethod};
use crate::oracle::PriceAccount;

/// Wallet balance lookup
#[async_trait]
pub trait BalancesClient: Send + Sync {
    /// Balances held by `address`, exactly as the service reports them
    async fn get_balances(&self, address: &str) -> Result<Value>;
}

/// Token listing feeds
#[async_trait]
pub trait TokenFeedClient: Send + Sync {
    async fn latest_profiles(&self) -> Result<Value>;

    async fn latest_boosts(&self) -> Result<Value>;
}

/// Solana cluster-info JSON-RPC
#[async_trait]
pub trait ClusterRpcClient: Send + Sync {
    /// Issue `method` and return the full response body
    async fn call(&self, method: ClusterMethod) -> Result<Value>;
}

/// Oracle price account reader
#[async_trait]
pub trait PriceAccountSource: Send + Sync {
    async fn load_price_account(&self, key: &AccountKey) -> Result<PriceAccount>;
}
