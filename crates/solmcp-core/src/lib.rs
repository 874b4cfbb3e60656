//! # solmcp-core
//!
//! Tool abstraction shared by the SolMCP handlers and the stdio dispatcher.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     solmcp-server                            │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │  stdio JSON  │──▶│ ToolRegistry │──▶│  dyn Tool        │  │
//! │  │  -RPC loop   │   │ (name → Arc) │   │  (solmcp-tools)  │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers never see the wire protocol: they receive a [`ToolCall`] and
//! hand back a [`ToolResult`] whose `data` is any JSON value, `null` included.

pub mod tool;
pub mod error;

pub use error::{CoreError, Result};
pub use tool::{ParameterSchema, Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
