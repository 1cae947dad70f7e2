pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HttpFetcher, MemoryPage};
pub use config::ClientConfig;
pub use core::{GreetingFetcher, StockFetcher};
pub use utils::error::{FetchError, Result};
