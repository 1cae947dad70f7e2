use crate::core::Handler;
use crate::domain::model::{
    error_text, Content, Greeting, RenderState, GREETING_OUTPUT, NAME_INPUT,
};
use crate::domain::ports::{DomSink, JsonFetcher};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub const GREETING_PATH: &str = "/app/hello";

/// Reads `name`, asks the greeting endpoint, and writes the reply into `getrespmsg`.
///
/// The message is written as markup, exactly as the endpoint sent it. A
/// server echoing the name unescaped can therefore inject markup into the page.
pub struct GreetingFetcher<S: DomSink, F: JsonFetcher> {
    sink: S,
    fetcher: Arc<F>,
    path: String,
}

impl<S: DomSink, F: JsonFetcher> GreetingFetcher<S, F> {
    pub fn new(sink: S, fetcher: F) -> Self {
        Self {
            sink,
            fetcher: Arc::new(fetcher),
            path: GREETING_PATH.to_string(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    async fn request(&self, name: &str) -> Result<Greeting> {
        let body = self.fetcher.get_json(&self.path, "name", name).await?;
        Ok(serde_json::from_value(body)?)
    }
}

impl<S: DomSink + Clone, F: JsonFetcher> Clone for GreetingFetcher<S, F> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            fetcher: Arc::clone(&self.fetcher),
            path: self.path.clone(),
        }
    }
}

#[async_trait]
impl<S: DomSink, F: JsonFetcher> Handler for GreetingFetcher<S, F> {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn begin(&self) -> String {
        self.sink.get(NAME_INPUT)
    }

    async fn complete(&self, name: String) -> RenderState {
        match self.request(&name).await {
            Ok(greeting) => {
                self.sink.set(GREETING_OUTPUT, Content::Markup(greeting.message));
                RenderState::Resolved
            }
            Err(e) => {
                tracing::warn!("Greeting request failed: {}", e);
                self.sink.set(GREETING_OUTPUT, Content::Markup(error_text(&e)));
                RenderState::Errored
            }
        }
    }
}
