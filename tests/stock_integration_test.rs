use anyhow::Result;
use httpmock::prelude::*;
use page_fetch::core::dispatch;
use page_fetch::domain::model::{
    Content, RenderState, GREETING_OUTPUT, NAME_INPUT, STOCK_OUTPUT, STOCK_SYMBOL_INPUT,
};
use page_fetch::domain::ports::DomSink;
use page_fetch::{GreetingFetcher, HttpFetcher, MemoryPage, StockFetcher};
use std::time::Duration;

#[tokio::test]
async fn test_stock_loading_then_pretty_json() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/stocks").query_param("symbol", "ACME");
        then.status(200)
            .delay(Duration::from_millis(200))
            .json_body(serde_json::json!({"price": 10}));
    });

    let page = MemoryPage::new().with_value(STOCK_SYMBOL_INPUT, "ACME");
    let handler = StockFetcher::new(page.clone(), HttpFetcher::new(&server.base_url())?);

    let task = dispatch::invoke(&handler);
    assert_eq!(page.get(STOCK_OUTPUT), "Loading...");

    assert_eq!(task.await?, RenderState::Resolved);
    api_mock.assert();
    assert_eq!(
        page.content(STOCK_OUTPUT),
        Some(Content::Text("{\n  \"price\": 10\n}".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn test_stock_error_replaces_loading() -> Result<()> {
    let page = MemoryPage::new().with_value(STOCK_SYMBOL_INPUT, "ACME");
    let handler = StockFetcher::new(page.clone(), HttpFetcher::new("http://127.0.0.1:1")?);

    let state = dispatch::invoke(&handler).await?;

    assert_eq!(state, RenderState::Errored);
    assert!(page.get(STOCK_OUTPUT).starts_with("Error: "));
    Ok(())
}

#[tokio::test]
async fn test_last_resolution_wins() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/stocks").query_param("symbol", "SLOW");
        then.status(200)
            .delay(Duration::from_millis(400))
            .json_body(serde_json::json!({"symbol": "SLOW"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/stocks").query_param("symbol", "FAST");
        then.status(200).json_body(serde_json::json!({"symbol": "FAST"}));
    });

    let page = MemoryPage::new().with_value(STOCK_SYMBOL_INPUT, "SLOW");
    let handler = StockFetcher::new(page.clone(), HttpFetcher::new(&server.base_url())?);

    let slow = dispatch::invoke(&handler);
    page.set(STOCK_SYMBOL_INPUT, Content::Text("FAST".to_string()));
    let fast = dispatch::invoke(&handler);

    fast.await?;
    assert_eq!(page.get(STOCK_OUTPUT), "{\n  \"symbol\": \"FAST\"\n}");

    slow.await?;
    assert_eq!(page.get(STOCK_OUTPUT), "{\n  \"symbol\": \"SLOW\"\n}");
    Ok(())
}

#[tokio::test]
async fn test_handlers_write_only_their_own_element() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/app/hello");
        then.status(200).json_body(serde_json::json!({"message": "Hello Ada"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/stocks");
        then.status(200).json_body(serde_json::json!({"price": 10}));
    });

    let page = MemoryPage::new()
        .with_value(NAME_INPUT, "Ada")
        .with_value(STOCK_SYMBOL_INPUT, "ACME");
    let fetcher = HttpFetcher::new(&server.base_url())?;
    let greeting = GreetingFetcher::new(page.clone(), fetcher.clone());
    let stock = StockFetcher::new(page.clone(), fetcher);

    dispatch::run(&greeting).await;
    let greeting_before = page.content(GREETING_OUTPUT);
    assert!(page.content(STOCK_OUTPUT).is_none());

    dispatch::run(&stock).await;
    assert_eq!(page.content(GREETING_OUTPUT), greeting_before);
    assert_eq!(page.get(STOCK_OUTPUT), "{\n  \"price\": 10\n}");

    let stock_before = page.content(STOCK_OUTPUT);
    dispatch::run(&greeting).await;
    assert_eq!(page.content(STOCK_OUTPUT), stock_before);
    Ok(())
}
