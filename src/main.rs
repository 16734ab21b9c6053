//! traffic-report
//!
//! Fetches one day of traffic logs from the dashboard API and prints the
//! classified events plus their rollup as JSON.
//!
//! Usage: `traffic-report [YYYY-MM-DD] [--blocked-only] [--search TEXT]`
//! (date defaults to today, UTC).

use anyhow::{bail, Context};
use serde::Serialize;

use shield_traffic::constants;
use shield_traffic::logic::source::{format_date, parse_date};
use shield_traffic::logic::traffic::TrafficFilter;
use shield_traffic::{summarize, HttpLogSource, Normalizer, SourceConfig, TrafficEvent, TrafficLogCache, TrafficSummary};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DailyReport<'a> {
    date: String,
    summary: TrafficSummary,
    events: Vec<&'a TrafficEvent>,
}

struct Args {
    date: Option<String>,
    filter: TrafficFilter,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut date = None;
    let mut filter = TrafficFilter::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--blocked-only" => filter.blocked_only = true,
            "--search" => {
                filter.search = args.next().context("--search needs a value")?;
            }
            other if other.starts_with("--") => bail!("unknown flag {}", other),
            other => date = Some(other.to_string()),
        }
    }

    Ok(Args { date, filter })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(constants::DEFAULT_LOG_FILTER),
    )
    .init();

    let args = parse_args()?;
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => chrono::Utc::now().date_naive(),
    };

    let config = SourceConfig::from_env()?;
    log::info!("traffic-report v{} using {}", constants::APP_VERSION, config.base_url);

    let cache = TrafficLogCache::new(HttpLogSource::new(config)?);
    let events = cache.events(date, &Normalizer::default()).await;

    // Rollup covers the whole day, the event list honours the filter
    let report = DailyReport {
        date: format_date(date),
        summary: summarize(&events),
        events: args.filter.apply(&events),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
