use crate::domain::model::RenderState;
use async_trait::async_trait;

/// One request/response/render cycle bound to a page event.
///
/// `begin` runs synchronously on the caller: it reads the input and writes
/// any interim state. `complete` is the continuation that issues the request
/// and renders the outcome.
#[async_trait]
pub trait Handler: Send + Sync {
    fn name(&self) -> &'static str;

    fn begin(&self) -> String;

    async fn complete(&self, input: String) -> RenderState;
}
