//! Helius balances API

use async_trait::async_trait;
use serde_json::Value;

use super::BalancesClient;
use crate::config::HeliusConfig;
use crate::error::{Result, ToolsError};

pub struct HeliusClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HeliusClient {
    pub fn new(http: reqwest::Client, config: &HeliusConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn balances_url(&self, address: &str) -> String {
        format!("{}/addresses/{address}/balances", self.base_url)
    }
}

#[async_trait]
impl BalancesClient for HeliusClient {
    async fn get_balances(&self, address: &str) -> Result<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ToolsError::MissingCredential("HELIUS_API_KEY"))?;

        let response = self
            .http
            .get(self.balances_url(address))
            .query(&[("api-key", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolsError::UpstreamStatus {
                service: "helius",
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
