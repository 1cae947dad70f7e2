use clap::Parser;
use page_fetch::config::cli::{Cli, Command};
use page_fetch::core::{dispatch, Handler};
use page_fetch::domain::model::{
    RenderState, GREETING_OUTPUT, NAME_INPUT, STOCK_OUTPUT, STOCK_SYMBOL_INPUT,
};
use page_fetch::utils::{logger, validation::Validate};
use page_fetch::{GreetingFetcher, HttpFetcher, MemoryPage, StockFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = cli.client_config()?;
    tracing::debug!("Client config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = HttpFetcher::new(&config.base_url)?;
    tracing::info!("Using server {}", fetcher.base_url());
    let page = MemoryPage::new();

    let (state, output) = match &cli.command {
        Command::Hello { name } => {
            let page = page.clone().with_value(NAME_INPUT, name.as_str());
            let handler =
                GreetingFetcher::new(page, fetcher).with_path(config.greeting_path.as_str());
            (render(&handler).await, GREETING_OUTPUT)
        }
        Command::Stock { symbol } => {
            let page = page.clone().with_value(STOCK_SYMBOL_INPUT, symbol.as_str());
            let handler = StockFetcher::new(page, fetcher).with_path(config.stock_path.as_str());
            (render(&handler).await, STOCK_OUTPUT)
        }
    };

    tracing::debug!("Page after render: {:?}", page.snapshot());

    match page.content(output) {
        Some(content) => println!("{}", content),
        None => tracing::warn!("Nothing rendered into {}", output),
    }

    if state == RenderState::Errored {
        std::process::exit(2);
    }

    Ok(())
}

async fn render<H: Handler>(handler: &H) -> RenderState {
    tracing::info!("Running {} handler", handler.name());
    dispatch::run(handler).await
}
