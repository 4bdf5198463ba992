//! flight-search: query all configured vendors for one-way direct flights and
//! print the cheapest-first and fastest-first rankings as JSON.
//!
//! Vendors, cache, and logging are configured through `config/*` files and
//! `FLIGHTS__*` environment variables.

use anyhow::Context;
use clap::Parser;
use flight_offers::config::AppConfig;
use flight_offers::telemetry::init_tracing;
use flight_offers::{LiveUpdate, LiveUpdates, SearchQuery, SearchRequest};
use futures::StreamExt;
use std::sync::Arc;

/// Multi-vendor flight offer search
#[derive(Parser, Debug)]
#[command(name = "flight-search", about = "Search flight offers across vendors")]
struct Cli {
    /// Origin airport code, e.g. SYD.
    #[arg(long)]
    origin: String,

    /// Destination airport code, e.g. BKK.
    #[arg(long)]
    destination: String,

    /// Departure date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Number of adult passengers.
    #[arg(long, default_value = "1")]
    adults: String,

    /// Keep refreshing and print every update.
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(config.log.format);

    let request = SearchRequest::try_from(SearchQuery {
        origin: cli.origin,
        destination: cli.destination,
        date: cli.date,
        adults: cli.adults,
    })
    .context("invalid search")?;

    let engine = Arc::new(config.build_engine().await.context("building engine")?);

    if !cli.watch {
        let best = engine.aggregate(&request).await?;
        println!("{}", serde_json::to_string_pretty(&best)?);
        return Ok(());
    }

    let live = LiveUpdates::new(engine, config.live_update_interval());
    let mut feed = Box::pin(live.stream(request));
    loop {
        tokio::select! {
            update = feed.next() => match update {
                Some(LiveUpdate::Failed { message }) => anyhow::bail!(message),
                Some(update) => println!("{}", serde_json::to_string(&update)?),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}
