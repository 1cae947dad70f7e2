use crate::domain::model::Content;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Identifier-addressed page content.
///
/// Reads return the element's current value, or an empty string when the
/// element holds nothing. Writes replace the element's content wholesale.
pub trait DomSink: Send + Sync {
    fn get(&self, id: &str) -> String;
    fn set(&self, id: &str, content: Content);
}

#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Issues `GET <path>?<key>=<value>` and parses the body as JSON.
    async fn get_json(&self, path: &str, key: &str, value: &str) -> Result<serde_json::Value>;
}
