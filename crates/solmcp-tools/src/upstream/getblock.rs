//! GetBlock Solana JSON-RPC

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::ClusterRpcClient;
use crate::config::GetBlockConfig;
use crate::error::{Result, ToolsError};
use crate::model::ClusterMethod;

pub struct GetBlockClient {
    http: reqwest::Client,

    /// `None` when no access token is configured
    endpoint: Option<String>,
}

impl GetBlockClient {
    pub fn new(http: reqwest::Client, config: &GetBlockConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint(),
        }
    }
}

#[async_trait]
impl ClusterRpcClient for GetBlockClient {
    async fn call(&self, method: ClusterMethod) -> Result<Value> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(ToolsError::MissingCredential("GETBLOCK_API_KEY"))?;

        let response = self
            .http
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&method.request())
            .send()
            .await?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolConfig;
    use crate::tools::ClusterInfoTool;
    use crate::upstream::stub_server::{self, StubServer};
    use serde_json::json;
    use solmcp_core::{Tool, ToolCall};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = GetBlockClient::new(reqwest::Client::new(), &SolConfig::default().getblock);
        let err = client.call(ClusterMethod::InflationRate).await.unwrap_err();
        assert!(matches!(err, ToolsError::MissingCredential("GETBLOCK_API_KEY")));
    }

    fn client_for(base_url: &str) -> GetBlockClient {
        GetBlockClient::new(
            stub_server::http(),
            &GetBlockConfig {
                base_url: base_url.to_string(),
                api_key: Some("abc123".into()),
            },
        )
    }

    #[tokio::test]
    async fn test_posts_method_to_keyed_endpoint() {
        let reply = r#"{"jsonrpc":"2.0","id":1,"result":{"slotsPerEpoch":432000,"warmup":false}}"#;
        let server = StubServer::respond(200, reply).await;

        let body = client_for(&server.url)
            .call(ClusterMethod::EpochSchedule)
            .await
            .unwrap();
        assert_eq!(body["result"]["slotsPerEpoch"], 432_000);

        let request = server.request().await;
        assert_eq!(request.request_line, "POST /abc123 HTTP/1.1");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(
            request.json_body(),
            json!({"jsonrpc": "2.0", "id": 1, "method": "getEpochSchedule"})
        );
    }

    #[tokio::test]
    async fn test_each_tool_puts_its_method_on_the_wire() {
        let cases = [
            (ClusterMethod::InflationRate, "getInflationRate"),
            (ClusterMethod::EpochSchedule, "getEpochSchedule"),
            (ClusterMethod::InflationGovernor, "getInflationGovernor"),
        ];

        for (method, expected) in cases {
            let server = StubServer::respond(200, r#"{"jsonrpc":"2.0","id":1,"result":{}}"#).await;
            let tool = ClusterInfoTool::new(Arc::new(client_for(&server.url)), method);

            let result = tool.execute(&ToolCall::new(method.tool_name())).await.unwrap();
            assert_eq!(result.data["result"], json!({}));
            assert_eq!(server.request().await.json_body()["method"], expected);
        }
    }

    #[tokio::test]
    async fn test_rpc_error_body_is_returned_verbatim() {
        let reply = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"Method not found"}}"#;
        let server = StubServer::respond(500, reply).await;

        let body = client_for(&server.url)
            .call(ClusterMethod::InflationRate)
            .await
            .unwrap();
        assert_eq!(body["error"]["code"], -32601);
        server.request().await;
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_becomes_null() {
        let client = client_for(&stub_server::closed_url().await);
        assert!(matches!(
            client.call(ClusterMethod::InflationRate).await,
            Err(ToolsError::Network(_))
        ));

        let tool = ClusterInfoTool::inflation(Arc::new(client));
        let result = tool.execute(&ToolCall::new("get_inflation")).await.unwrap();
        assert!(result.data.is_null());
    }
}
