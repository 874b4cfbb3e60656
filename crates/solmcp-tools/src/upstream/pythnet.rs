//! Pythnet oracle reader
//!
//! Every lookup opens its own [`PythnetConnection`], reads one account with
//! `getAccountInfo` and closes the connection again, whether or not the read
//! succeeded.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::json;

use super::PriceAccountSource;
use crate::config::PythnetConfig;
use crate::error::{Result, ToolsError};
use crate::model::{AccountKey, JsonRpcRequest};
use crate::oracle::PriceAccount;

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AccountInfo {
    context: RpcContext,
    value: Option<AccountValue>,
}

#[derive(Debug, Deserialize)]
struct RpcContext {
    slot: u64,
}

#[derive(Debug, Deserialize)]
struct AccountValue {
    /// `[payload, encoding]`
    data: (String, String),
}

/// Factory for per-lookup Pythnet connections
pub struct PythnetClient {
    config: PythnetConfig,
}

impl PythnetClient {
    pub fn new(config: &PythnetConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait]
impl PriceAccountSource for PythnetClient {
    async fn load_price_account(&self, key: &AccountKey) -> Result<PriceAccount> {
        let connection = PythnetConnection::open(&self.config)?;
        let result = connection.get_account_data(key).await;
        connection.close();

        let (slot, data) = result?;
        PriceAccount::decode(&data, slot)
    }
}

/// A single short-lived connection to the oracle network
///
/// Account reads go over the HTTP endpoint only. No subscriptions are made, so
/// the WebSocket endpoint is carried for logging and diagnostics and nothing
/// connects to it.
pub struct PythnetConnection {
    http: reqwest::Client,
    http_endpoint: String,
    ws_endpoint: String,
}

impl PythnetConnection {
    pub fn open(config: &PythnetConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        tracing::debug!(
            http = %config.http_endpoint,
            ws = %config.ws_endpoint,
            "Opened pythnet connection"
        );
        Ok(Self {
            http,
            http_endpoint: config.http_endpoint.clone(),
            ws_endpoint: config.ws_endpoint.clone(),
        })
    }

    /// Fetch raw account data and the slot it was read at
    pub async fn get_account_data(&self, key: &AccountKey) -> Result<(u64, Vec<u8>)> {
        let request = JsonRpcRequest::new("getAccountInfo").with_params(json!([
            key.to_base58(),
            { "encoding": "base64", "commitment": "confirmed" }
        ]));

        let response: RpcResponse<AccountInfo> = self
            .http
            .post(&self.http_endpoint)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        let info = unwrap_rpc(response)?;
        let value = info
            .value
            .ok_or_else(|| ToolsError::AccountNotFound(key.to_base58()))?;

        let (payload, encoding) = value.data;
        if encoding != "base64" {
            return Err(ToolsError::AccountDecode(format!(
                "unexpected data encoding {encoding}"
            )));
        }

        Ok((info.context.slot, STANDARD.decode(payload)?))
    }

    /// WebSocket endpoint this connection was configured with
    pub fn ws_endpoint(&self) -> &str {
        &self.ws_endpoint
    }

    /// Release the connection. Dropping has the same effect; this makes the
    /// hand-off explicit at call sites.
    pub fn close(self) {
        tracing::debug!(ws = %self.ws_endpoint, "Closed pythnet connection");
    }
}

fn unwrap_rpc<T>(response: RpcResponse<T>) -> Result<T> {
    if let Some(err) = response.error {
        return Err(ToolsError::Rpc {
            code: err.code,
            message: err.message,
        });
    }
    response
        .result
        .ok_or_else(|| ToolsError::AccountDecode("RPC response has neither result nor error".into()))
}
