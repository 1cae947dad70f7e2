#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::greeting::GREETING_PATH;
use crate::core::stock::STOCK_PATH;
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Where the application server listens by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:35000";

/// Resolved client settings, whichever source they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub greeting_path: String,
    pub stock_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            greeting_path: GREETING_PATH.to_string(),
            stock_path: STOCK_PATH.to_string(),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_endpoint_path("endpoints.greeting", &self.greeting_path)?;
        validate_endpoint_path("endpoints.stock", &self.stock_path)?;
        Ok(())
    }
}
