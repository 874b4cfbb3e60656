//! Domain Models
//!
//! Request and response shapes for the upstream services and the price report
//! handed back to callers. Prices use `rust_decimal`; they are only turned into
//! JSON numbers at the serialization boundary.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, ToolsError};
use crate::oracle::{PriceAccount, PriceStatus};

/// Length of a Solana / Pythnet account address
pub const ACCOUNT_KEY_LEN: usize = 32;

/// 32-byte on-chain account address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountKey([u8; ACCOUNT_KEY_LEN]);

impl AccountKey {
    /// Parse either a `0x`-prefixed hex feed id or a base58 address
    pub fn parse(input: &str) -> Result<Self> {
        match input.strip_prefix("0x") {
            Some(hex_str) => Self::from_hex(hex_str),
            None => Self::from_base58(input),
        }
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_base58(address: &str) -> Result<Self> {
        let bytes = bs58::decode(address).into_vec()?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        <[u8; ACCOUNT_KEY_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| {
                ToolsError::InvalidKey(format!(
                    "expected {ACCOUNT_KEY_LEN} bytes, got {}",
                    bytes.len()
                ))
            })
    }

    pub const fn as_bytes(&self) -> &[u8; ACCOUNT_KEY_LEN] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

/// Solana JSON-RPC 2.0 request body
#[derive(Clone, Debug, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub const fn new(method: &'static str) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params: None,
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}

/// Cluster-info RPC methods exposed as tools
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterMethod {
    InflationRate,
    EpochSchedule,
    InflationGovernor,
}

impl ClusterMethod {
    /// JSON-RPC method name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InflationRate => "getInflationRate",
            Self::EpochSchedule => "getEpochSchedule",
            Self::InflationGovernor => "getInflationGovernor",
        }
    }

    /// Name the tool is registered under
    pub const fn tool_name(self) -> &'static str {
        match self {
            Self::InflationRate => "get_inflation",
            Self::EpochSchedule => "get_epoch",
            Self::InflationGovernor => "get_inflagov",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::InflationRate => "Get inflation rate on solana",
            Self::EpochSchedule => "Get epoch schedule on solana",
            Self::InflationGovernor => {
                "Gets the current inflation governor settings of the Solana blockchain."
            }
        }
    }

    pub const fn request(self) -> JsonRpcRequest {
        JsonRpcRequest::new(self.as_str())
    }
}

pub const MISSING_STATUS_MESSAGE: &str = "Price data attributes not available for this feed ID";

/// Outcome of a price lookup as seen by the caller
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceReport {
    Trading {
        #[serde(with = "rust_decimal::serde::float")]
        price: Decimal,
        #[serde(with = "rust_decimal::serde::float")]
        confidence_interval: Decimal,
    },
    NotTrading {
        message: String,
    },
    Error {
        message: String,
    },
}

impl PriceReport {
    /// Classify a decoded price account by its aggregate status
    pub fn from_account(account: &PriceAccount) -> Result<Self> {
        Ok(match account.aggregate_status() {
            None => Self::Error {
                message: MISSING_STATUS_MESSAGE.into(),
            },
            Some(PriceStatus::Trading) => Self::Trading {
                price: account.aggregate_price()?,
                confidence_interval: account.aggregate_confidence()?,
            },
            Some(status) => Self::NotTrading {
                message: format!("Price is not valid now. Status is {status}"),
            },
        })
    }

    /// Wrap a failure raised anywhere during the lookup
    pub fn failed(err: &ToolsError) -> Self {
        Self::Error {
            message: format!("Error fetching price: {err}"),
        }
    }
}
