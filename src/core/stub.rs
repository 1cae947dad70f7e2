use crate::domain::ports::JsonFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Canned `JsonFetcher` for handler tests. A gated stub holds every request
/// until `release` is called.
#[derive(Clone)]
pub(crate) struct StubFetcher {
    response: Option<serde_json::Value>,
    gate: Option<Arc<Notify>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubFetcher {
    pub(crate) fn responding(value: serde_json::Value) -> Self {
        Self {
            response: Some(value),
            gate: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn gated(value: serde_json::Value) -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::responding(value)
        }
    }

    /// Fails every request with a body-parse error.
    pub(crate) fn failing() -> Self {
        Self {
            response: None,
            gate: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonFetcher for StubFetcher {
    async fn get_json(&self, path: &str, key: &str, value: &str) -> Result<serde_json::Value> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}?{}={}", path, key, value));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.response {
            Some(value) => Ok(value.clone()),
            None => Ok(serde_json::from_str::<serde_json::Value>("<html>Not Found</html>")?),
        }
    }
}
