use crate::core::Handler;
use crate::domain::model::{
    error_text, Content, RenderState, LOADING_TEXT, STOCK_OUTPUT, STOCK_SYMBOL_INPUT,
};
use crate::domain::ports::{DomSink, JsonFetcher};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub const STOCK_PATH: &str = "/stocks";

/// Reads `stockSymbol`, shows `Loading...`, then renders the quote payload
/// as indented JSON text into `stockData`.
pub struct StockFetcher<S: DomSink, F: JsonFetcher> {
    sink: S,
    fetcher: Arc<F>,
    path: String,
}

impl<S: DomSink, F: JsonFetcher> StockFetcher<S, F> {
    pub fn new(sink: S, fetcher: F) -> Self {
        Self {
            sink,
            fetcher: Arc::new(fetcher),
            path: STOCK_PATH.to_string(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    async fn request(&self, symbol: &str) -> Result<String> {
        let quote = self.fetcher.get_json(&self.path, "symbol", symbol).await?;
        Ok(serde_json::to_string_pretty(&quote)?)
    }
}

impl<S: DomSink + Clone, F: JsonFetcher> Clone for StockFetcher<S, F> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            fetcher: Arc::clone(&self.fetcher),
            path: self.path.clone(),
        }
    }
}

#[async_trait]
impl<S: DomSink, F: JsonFetcher> Handler for StockFetcher<S, F> {
    fn name(&self) -> &'static str {
        "stock"
    }

    fn begin(&self) -> String {
        let symbol = self.sink.get(STOCK_SYMBOL_INPUT);
        self.sink.set(STOCK_OUTPUT, Content::Text(LOADING_TEXT.to_string()));
        symbol
    }

    async fn complete(&self, symbol: String) -> RenderState {
        match self.request(&symbol).await {
            Ok(pretty) => {
                self.sink.set(STOCK_OUTPUT, Content::Text(pretty));
                RenderState::Resolved
            }
            Err(e) => {
                tracing::warn!("Stock request for {:?} failed: {}", symbol, e);
                self.sink.set(STOCK_OUTPUT, Content::Text(error_text(&e)));
                RenderState::Errored
            }
        }
    }
}
