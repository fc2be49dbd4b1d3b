use crate::domain::model::{SearchPage, SearchType, Title};
use crate::domain::ports::{ConfigProvider, TitleSource};
use crate::utils::error::{CompareError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://www.omdbapi.com/";

/// HTTP adapter for the OMDb API. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint().to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let mut query = vec![("apikey", self.api_key.as_str())];
        query.extend_from_slice(params);

        tracing::debug!("GET {} {:?}", self.endpoint, params);
        let response = self.client.get(&self.endpoint).query(&query).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(CompareError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        into_payload(body)
    }
}

/// OMDb answers misses with HTTP 200 and `"Response": "False"`.
fn into_payload<T: DeserializeOwned>(body: serde_json::Value) -> Result<T> {
    if body.get("Response").and_then(|v| v.as_str()) == Some("False") {
        let message = body
            .get("Error")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        return Err(CompareError::NoResults { message });
    }

    Ok(serde_json::from_value(body)?)
}

#[async_trait]
impl TitleSource for OmdbClient {
    async fn search(&self, query: &str, search_type: SearchType, page: u32) -> Result<SearchPage> {
        let page = page.to_string();
        self.get(&[
            ("s", query),
            ("type", search_type.as_query_value()),
            ("page", page.as_str()),
        ])
        .await
    }

    async fn fetch_title(&self, imdb_id: &str) -> Result<Title> {
        self.get(&[("i", imdb_id), ("plot", "full")]).await
    }
}
