use clap::Parser;
use drawsync::config::parse_log_level;
use drawsync::infrastructure::{build_parser, HttpFetcher, JsonFileStore};
use drawsync::{Args, Config, Result, Synchronizer};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&args.log_level)?)
        .init();

    let config = Config::new(args)?;
    let args = &config.args;

    let parser = build_parser(args.layout, args.launch_date, &args.container_selector)?;
    let store = Arc::new(JsonFileStore::new(&args.data_file));

    let mut fetcher = HttpFetcher::new(config.http_client.clone());
    if let Some(marker) = parser.page_marker() {
        fetcher = fetcher.requiring(marker.clone());
    }
    let fetcher = Arc::new(fetcher);

    let synchronizer = Synchronizer::new(args.url.clone(), store, fetcher, parser);
    let outcome = synchronizer.update().await?;

    info!("Run finished: {:?}", outcome);
    Ok(())
}
