//! Mock upstream clients for tool tests

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{BalancesClient, ClusterRpcClient, PriceAccountSource, TokenFeedClient};
use crate::error::{Result, ToolsError};
use crate::model::{AccountKey, ClusterMethod};
use crate::oracle::PriceAccount;

fn offline() -> ToolsError {
    ToolsError::UpstreamStatus {
        service: "mock",
        status: 503,
    }
}

/// Returns a fixed payload, or fails when constructed with `None`
pub struct MockBalances {
    payload: Option<Value>,
    pub seen: Mutex<Vec<String>>,
}

impl MockBalances {
    pub fn new(payload: Option<Value>) -> Self {
        Self {
            payload,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BalancesClient for MockBalances {
    async fn get_balances(&self, address: &str) -> Result<Value> {
        self.seen.lock().unwrap().push(address.to_string());
        self.payload.clone().ok_or_else(offline)
    }
}

/// Records which feed was requested
pub struct MockTokenFeed {
    payload: Option<Value>,
    pub requests: Mutex<Vec<&'static str>>,
}

impl MockTokenFeed {
    pub fn new(payload: Option<Value>) -> Self {
        Self {
            payload,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn respond(&self, feed: &'static str) -> Result<Value> {
        self.requests.lock().unwrap().push(feed);
        self.payload.clone().ok_or_else(offline)
    }
}

#[async_trait]
impl TokenFeedClient for MockTokenFeed {
    async fn latest_profiles(&self) -> Result<Value> {
        self.respond("profiles")
    }

    async fn latest_boosts(&self) -> Result<Value> {
        self.respond("boosts")
    }
}

/// Records the JSON-RPC bodies it would have sent
pub struct MockClusterRpc {
    payload: Option<Value>,
    pub bodies: Mutex<Vec<Value>>,
}

impl MockClusterRpc {
    pub fn new(payload: Option<Value>) -> Self {
        Self {
            payload,
            bodies: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ClusterRpcClient for MockClusterRpc {
    async fn call(&self, method: ClusterMethod) -> Result<Value> {
        let body = serde_json::to_value(method.request())?;
        self.bodies.lock().unwrap().push(body);
        self.payload.clone().ok_or_else(offline)
    }
}

/// Serves price accounts decoded from canned account data
pub struct MockPriceSource {
    data: Option<Vec<u8>>,
    slot: u64,
    pub keys: Mutex<Vec<AccountKey>>,
}

impl MockPriceSource {
    pub fn new(data: Option<Vec<u8>>, slot: u64) -> Self {
        Self {
            data,
            slot,
            keys: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PriceAccountSource for MockPriceSource {
    async fn load_price_account(&self, key: &AccountKey) -> Result<PriceAccount> {
        self.keys.lock().unwrap().push(*key);
        let data = self
            .data
            .as_ref()
            .ok_or_else(|| ToolsError::AccountNotFound(key.to_base58()))?;
        PriceAccount::decode(data, self.slot)
    }
}
