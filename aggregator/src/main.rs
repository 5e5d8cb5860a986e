use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use newsgrep_aggregator::pipeline;
use newsgrep_aggregator::query;
use newsgrep_aggregator::source::HttpSource;

/// Pull and index every news article reachable from an RSS feed list, then
/// search the result interactively by word.
#[derive(Parser, Debug)]
#[command(name = "newsgrep")]
struct Cli {
    /// URI of the RSS feed list to ingest
    feed_list_uri: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let source = HttpSource::new()?;
    let index = pipeline::ingest(source, &args.feed_list_uri).await?;

    println!();
    info!(tokens = index.token_count(), "ingestion complete");
    query::run(&index)?;
    println!("Exiting....");
    Ok(())
}
