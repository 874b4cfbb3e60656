//! MCP Method Handlers

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{json, Value};

use solmcp_core::{CoreError, ToolCall, ToolResult};
use solmcp_tools::SERVER_INSTRUCTIONS;

use crate::protocol::{error_codes, Request, Response, PROTOCOL_VERSION};
use crate::state::AppState;

pub const SERVER_NAME: &str = "SolMCP";

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Option<HashMap<String, Value>>,
}

/// Route one inbound message. Notifications get no response.
pub async fn handle_request(req: Request, state: &AppState) -> Option<Response> {
    if req.is_notification() {
        tracing::debug!(method = %req.method, "Notification received");
        return None;
    }

    let id = req.id.unwrap_or(Value::Null);
    tracing::debug!(method = %req.method, %id, "Handling request");

    let response = match req.method.as_str() {
        "initialize" => initialize(id, req.params.as_ref()),
        "ping" => Response::success(id, json!({})),
        "tools/list" => tools_list(id, state),
        "tools/call" => tools_call(id, req.params, state).await,
        other => Response::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {other}"),
        ),
    };

    Some(response)
}

fn initialize(id: Value, params: Option<&Value>) -> Response {
    let protocol_version = params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(PROTOCOL_VERSION);

    Response::success(
        id,
        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": { "listChanged": false } },
            "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") },
            "instructions": SERVER_INSTRUCTIONS,
        }),
    )
}

fn tools_list(id: Value, state: &AppState) -> Response {
    let tools: Vec<Value> = state
        .tools
        .schemas()
        .into_iter()
        .map(|schema| {
            json!({
                "name": schema.name,
                "description": schema.description,
                "inputSchema": schema.input_schema(),
            })
        })
        .collect();

    Response::success(id, json!({ "tools": tools }))
}

async fn tools_call(id: Value, params: Option<Value>, state: &AppState) -> Response {
    let params: CallParams = match params.map(serde_json::from_value).transpose() {
        Ok(Some(params)) => params,
        Ok(None) => {
            return Response::error(id, error_codes::INVALID_PARAMS, "Missing 'params' object")
        }
        Err(e) => {
            return Response::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Invalid 'params': {e}"),
            )
        }
    };

    let call = ToolCall {
        name: params.name,
        arguments: params.arguments.unwrap_or_default(),
        id: None,
    };

    match state.tools.execute(&call).await {
        Ok(result) => Response::success(id, call_result(&result)),
        Err(err) if err.is_client_error() => {
            Response::error(id, error_codes::INVALID_PARAMS, err.to_string())
        }
        Err(err @ CoreError::ToolNotFound(_)) => {
            tracing::warn!(tool = %call.name, "Unknown tool requested");
            let failure = ToolResult::failure(&call.name, err.user_message());
            Response::success(id, call_result(&failure))
        }
        Err(err) => {
            tracing::error!(tool = %call.name, error = %err, "Tool execution failed");
            Response::error(id, error_codes::INTERNAL_ERROR, err.user_message())
        }
    }
}

/// Shape a tool result as MCP `CallToolResult` content
fn call_result(result: &ToolResult) -> Value {
    if !result.success {
        let text = result.error.clone().unwrap_or_default();
        return json!({
            "content": [{ "type": "text", "text": text }],
            "isError": true,
        });
    }

    let mut body = json!({
        "content": [{ "type": "text", "text": result.data.to_string() }],
        "isError": false,
    });
    if result.data.is_object() {
        body["structuredContent"] = result.data.clone();
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use solmcp_core::{ParameterSchema, Result as CoreResult, Tool, ToolRegistry, ToolSchema};

    /// Returns the `wallet` argument back inside an object, or null for "empty"
    struct LookupTool;

    #[async_trait]
    impl Tool for LookupTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "lookup".into(),
                description: "Look something up".into(),
                parameters: vec![ParameterSchema::required_string("wallet", "Wallet address")],
                category: None,
            }
        }

        async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
            let wallet = call.str_arg("wallet")?;
            let data = if wallet == "empty" {
                Value::Null
            } else {
                json!({ "wallet": wallet })
            };
            Ok(ToolResult::success("lookup", data))
        }
    }

    fn state() -> AppState {
        let mut registry = ToolRegistry::new();
        registry.register(LookupTool);
        AppState::new(registry)
    }

    fn request(body: Value) -> Request {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let resp = handle_request(
            request(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {"protocolVersion": "2025-03-26"}})),
            &state(),
        )
        .await
        .unwrap();

        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], "2025-03-26");
        assert_eq!(result["serverInfo"]["name"], "SolMCP");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let resp = handle_request(
            request(json!({"jsonrpc": "2.0", "method": "notifications/initialized"})),
            &state(),
        )
        .await;
        assert!(resp.is_none());
    }

    #[tokio::test]
    async fn test_tools_list() {
        let resp = handle_request(
            request(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})),
            &state(),
        )
        .await
        .unwrap();

        let tools = resp.result.unwrap()["tools"].clone();
        assert_eq!(tools[0]["name"], "lookup");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["wallet"]));
    }

    #[tokio::test]
    async fn test_tools_call_object_result() {
        let resp = handle_request(
            request(json!({
                "jsonrpc": "2.0", "id": 3, "method": "tools/call",
                "params": {"name": "lookup", "arguments": {"wallet": "abc"}}
            })),
            &state(),
        )
        .await
        .unwrap();

        let result = resp.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"], json!({"wallet": "abc"}));
        assert_eq!(result["content"][0]["text"], r#"{"wallet":"abc"}"#);
    }

    #[tokio::test]
    async fn test_tools_call_null_result() {
        let resp = handle_request(
            request(json!({
                "jsonrpc": "2.0", "id": 4, "method": "tools/call",
                "params": {"name": "lookup", "arguments": {"wallet": "empty"}}
            })),
            &state(),
        )
        .await
        .unwrap();

        let result = resp.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "null");
        assert!(result.get("structuredContent").is_none());
    }

    #[tokio::test]
    async fn test_tools_call_missing_argument() {
        let resp = handle_request(
            request(json!({
                "jsonrpc": "2.0", "id": 5, "method": "tools/call",
                "params": {"name": "lookup"}
            })),
            &state(),
        )
        .await
        .unwrap();

        assert_eq!(resp.error.unwrap().code, error_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let resp = handle_request(
            request(json!({
                "jsonrpc": "2.0", "id": 6, "method": "tools/call",
                "params": {"name": "get_weather", "arguments": {}}
            })),
            &state(),
        )
        .await
        .unwrap();

        let result = resp.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Unknown tool: get_weather");
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let resp = handle_request(
            request(json!({"jsonrpc": "2.0", "id": 7, "method": "resources/list"})),
            &state(),
        )
        .await
        .unwrap();

        assert_eq!(resp.id, json!(7));
        assert_eq!(resp.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }
}
