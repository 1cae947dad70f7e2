pub mod dispatch;
pub mod greeting;
pub mod handler;
pub mod stock;

#[cfg(test)]
pub(crate) mod stub;

pub use crate::domain::model::{Content, RenderState};
pub use crate::domain::ports::{DomSink, JsonFetcher};
pub use crate::utils::error::Result;
pub use greeting::GreetingFetcher;
pub use handler::Handler;
pub use stock::StockFetcher;
