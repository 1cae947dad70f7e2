use crate::core::Handler;
use crate::domain::model::RenderState;
use tokio::task::JoinHandle;

/// Fires a handler the way a page event does.
///
/// The synchronous phase has finished by the time this returns; the
/// continuation runs as its own task. Nothing orders overlapping
/// invocations, so the last one to resolve owns the output element.
pub fn invoke<H>(handler: &H) -> JoinHandle<RenderState>
where
    H: Handler + Clone + 'static,
{
    let input = handler.begin();
    tracing::debug!(handler = handler.name(), input = %input, "dispatched");

    let handler = handler.clone();
    tokio::spawn(async move {
        let state = handler.complete(input).await;
        tracing::debug!(handler = handler.name(), state = ?state, "settled");
        state
    })
}

/// Runs both phases inline and waits for the outcome.
pub async fn run<H>(handler: &H) -> RenderState
where
    H: Handler + ?Sized,
{
    let input = handler.begin();
    tracing::debug!(handler = handler.name(), input = %input, "running");
    handler.complete(input).await
}
