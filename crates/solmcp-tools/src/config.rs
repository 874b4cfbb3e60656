//! Configuration
//!
//! Secrets and endpoints are resolved once at startup and handed to each
//! upstream client at construction. Nothing reads the environment later.

use crate::error::{Result, ToolsError};

pub const HELIUS_BASE_URL: &str = "https://api.helius.xyz/v0";
pub const DEXSCREENER_PROFILES_URL: &str = "https://api.dexscreener.com/token-profiles/latest/v1";
pub const GETBLOCK_BASE_URL: &str = "https://go.getblock.io";
pub const PYTHNET_HTTP_ENDPOINT: &str = "https://pythnet.rpcpool.com";
pub const PYTHNET_WS_ENDPOINT: &str = "wss://pythnet.rpcpool.com";

/// Helius balances API settings
#[derive(Clone, Debug)]
pub struct HeliusConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

/// DexScreener token feed settings
#[derive(Clone, Debug)]
pub struct DexScreenerConfig {
    pub profiles_url: String,

    /// Defaults to `profiles_url`; the boosts tool has always read the
    /// latest-profiles feed.
    pub boosts_url: String,
}

/// Pythnet oracle network endpoints
#[derive(Clone, Debug)]
pub struct PythnetConfig {
    pub http_endpoint: String,
    pub ws_endpoint: String,
}

/// GetBlock Solana JSON-RPC settings
#[derive(Clone, Debug)]
pub struct GetBlockConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl GetBlockConfig {
    /// Full endpoint URL with the access token appended, if one is configured
    pub fn endpoint(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(|key| format!("{}/{}", self.base_url.trim_end_matches('/'), key))
    }
}

/// Complete server configuration
#[derive(Clone, Debug)]
pub struct SolConfig {
    pub helius: HeliusConfig,
    pub dexscreener: DexScreenerConfig,
    pub pythnet: PythnetConfig,
    pub getblock: GetBlockConfig,
}

impl Default for SolConfig {
    fn default() -> Self {
        Self {
            helius: HeliusConfig {
                base_url: HELIUS_BASE_URL.into(),
                api_key: None,
            },
            dexscreener: DexScreenerConfig {
                profiles_url: DEXSCREENER_PROFILES_URL.into(),
                boosts_url: DEXSCREENER_PROFILES_URL.into(),
            },
            pythnet: PythnetConfig {
                http_endpoint: PYTHNET_HTTP_ENDPOINT.into(),
                ws_endpoint: PYTHNET_WS_ENDPOINT.into(),
            },
            getblock: GetBlockConfig {
                base_url: GETBLOCK_BASE_URL.into(),
                api_key: None,
            },
        }
    }
}

impl SolConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let url = |name: &str, default: &str| -> Result<String> {
            let value = var(name).unwrap_or_else(|| default.to_string());
            reqwest::Url::parse(&value)
                .map_err(|e| ToolsError::Config(format!("{name}={value}: {e}")))?;
            Ok(value)
        };

        let profiles_url = url("DEXSCREENER_PROFILES_URL", DEXSCREENER_PROFILES_URL)?;
        let boosts_url = url("DEXSCREENER_BOOSTS_URL", profiles_url.as_str())?;

        Ok(Self {
            helius: HeliusConfig {
                base_url: url("HELIUS_BASE_URL", HELIUS_BASE_URL)?,
                api_key: var("HELIUS_API_KEY"),
            },
            dexscreener: DexScreenerConfig {
                profiles_url,
                boosts_url,
            },
            pythnet: PythnetConfig {
                http_endpoint: url("PYTHNET_HTTP_ENDPOINT", PYTHNET_HTTP_ENDPOINT)?,
                ws_endpoint: url("PYTHNET_WS_ENDPOINT", PYTHNET_WS_ENDPOINT)?,
            },
            getblock: GetBlockConfig {
                base_url: url("GETBLOCK_BASE_URL", GETBLOCK_BASE_URL)?,
                api_key: var("GETBLOCK_API_KEY"),
            },
        })
    }
}
