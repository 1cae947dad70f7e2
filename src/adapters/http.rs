use crate::domain::ports::JsonFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// `JsonFetcher` over a shared `reqwest::Client`.
///
/// Paths resolve against the base URL the way a root-relative link resolves
/// against the page origin. No timeout is configured.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint_url(&self, path: &str, key: &str, value: &str) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, path: &str, key: &str, value: &str) -> Result<serde_json::Value> {
        let url = self.endpoint_url(path, key, value)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        // The body is parsed whatever the status; a non-JSON error page fails here.
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
