//! DexScreener token feeds

use async_trait::async_trait;
use serde_json::Value;

use super::TokenFeedClient;
use crate::config::DexScreenerConfig;
use crate::error::Result;

pub struct DexScreenerClient {
    http: reqwest::Client,
    profiles_url: String,
    boosts_url: String,
}

impl DexScreenerClient {
    pub fn new(http: reqwest::Client, config: &DexScreenerConfig) -> Self {
        Self {
            http,
            profiles_url: config.profiles_url.clone(),
            boosts_url: config.boosts_url.clone(),
        }
    }

    // The body is parsed whatever the HTTP status; error payloads are JSON too.
    async fn fetch(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "GET dexscreener feed");
        let response = self.http.get(url).send().await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl TokenFeedClient for DexScreenerClient {
    async fn latest_profiles(&self) -> Result<Value> {
        self.fetch(&self.profiles_url).await
    }

    async fn latest_boosts(&self) -> Result<Value> {
        self.fetch(&self.boosts_url).await
    }
}
