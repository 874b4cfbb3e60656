//! Error Types for SolMCP tools

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolsError>;

#[derive(Error, Debug)]
pub enum ToolsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{service} responded with HTTP {status}")]
    UpstreamStatus {
        service: &'static str,
        status: u16,
    },

    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid account key: {0}")]
    InvalidKey(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid base58: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    #[error("Invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Invalid price account data: {0}")]
    AccountDecode(String),

    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}
