//! Newline-delimited JSON-RPC over a reader/writer pair
//!
//! Each request runs in its own task, so a slow upstream call never holds up
//! later messages. Responses funnel through one channel to a single writer,
//! one line each. stdout carries protocol messages only.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use solmcp_core::Result;

use crate::handlers::handle_request;
use crate::protocol::{error_codes, Request, Response, JSONRPC_VERSION};
use crate::state::AppState;

/// Serve until the reader reaches EOF and every in-flight request has answered
pub async fn serve<R, W>(reader: R, writer: W, state: AppState) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::try_join!(read_loop(reader, tx, state), write_loop(writer, rx))?;
    Ok(())
}

async fn read_loop<R>(mut reader: R, tx: mpsc::UnboundedSender<Response>, state: AppState) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        match decode_line(&buf) {
            Ok(Some(req)) => {
                let state = state.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = handle_request(req, &state).await {
                        // Only fails once the writer has gone away
                        tx.send(response).ok();
                    }
                });
            }
            Ok(None) => {}
            Err(response) => {
                tx.send(response).ok();
            }
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

/// Ends once the reader and every spawned request have dropped their senders
async fn write_loop<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<Response>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
    }
    Ok(())
}

/// `Ok(None)` for blank lines and for messages that need no handling
fn decode_line(raw: &[u8]) -> std::result::Result<Option<Request>, Response> {
    let line = std::str::from_utf8(raw).map_err(|e| {
        tracing::warn!(error = %e, "Message is not valid UTF-8");
        Response::error(Value::Null, error_codes::PARSE_ERROR, format!("Parse error: {e}"))
    })?;

    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    parse_message(line)
}

/// `Ok(None)` for messages that need no handling (responses from the client)
fn parse_message(line: &str) -> std::result::Result<Option<Request>, Response> {
    let value: Value = serde_json::from_str(line).map_err(|e| {
        tracing::warn!(error = %e, "Unparsable message");
        Response::error(Value::Null, error_codes::PARSE_ERROR, format!("Parse error: {e}"))
    })?;

    if value.get("method").is_none() && (value.get("result").is_some() || value.get("error").is_some()) {
        tracing::debug!("Ignoring client response");
        return Ok(None);
    }

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let req: Request = serde_json::from_value(value).map_err(|e| {
        Response::error(id.clone(), error_codes::INVALID_REQUEST, format!("Invalid request: {e}"))
    })?;

    if !req.has_supported_version() {
        return Err(Response::error(
            id,
            error_codes::INVALID_REQUEST,
            format!("Invalid request: jsonrpc must be \"{JSONRPC_VERSION}\""),
        ));
    }

    Ok(Some(req))
}
