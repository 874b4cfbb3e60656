//! # solmcp-tools
//!
//! Solana market-data lookups exposed as `solmcp_core::Tool`s.
//!
//! | Tool               | Upstream                                  |
//! |--------------------|-------------------------------------------|
//! | `wallet_balance`   | Helius balances API                       |
//! | `get_latesttokens` | DexScreener latest token profiles         |
//! | `get_tokenboosts`  | DexScreener (profiles feed by default)    |
//! | `get_price`        | Pyth price account on Pythnet             |
//! | `get_inflation`    | GetBlock `getInflationRate`               |
//! | `get_epoch`        | GetBlock `getEpochSchedule`               |
//! | `get_inflagov`     | GetBlock `getInflationGovernor`           |
//!
//! Every tool makes exactly one upstream call per invocation and shares no
//! state with the others.

pub mod config;
pub mod error;
pub mod model;
pub mod oracle;
pub mod svckit;
pub mod upstream;

pub use config::SolConfig;
pub use error::{Result, ToolsError};
pub use model::{AccountKey, ClusterMethod, PriceReport};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{
        ClusterInfoTool,
        LatestTokensTool,
        PriceFeedTool,
        TokenBoostsTool,
        WalletBalanceTool,
    };
}

/// Instructions advertised to the calling agent on `initialize`
pub const SERVER_INSTRUCTIONS: &str = "Solana market-data tools. \
Use `wallet_balance` for the token balances of a wallet address, \
`get_latesttokens` / `get_tokenboosts` for recently listed tokens on DexScreener, \
`get_price` with a Pyth price account address or 0x feed ID for an oracle price, \
and `get_inflation`, `get_epoch`, `get_inflagov` for Solana cluster parameters. \
A null result means the lookup failed.";
