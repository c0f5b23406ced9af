use crate::Cli;
use anyhow::{Context, Result};
use concierge_engine::Concierge;
use concierge_matcher::MatchConfig;
use concierge_records::{load_records, parse_csv, FieldMap};
use concierge_router::RouteTable;

/// The published Google Sheets CSV the original page loads.
pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR9ryftjbytcsFzmU4KAactGkErWIvh7mzfZ4kpuXREGuPCb6RkNo2qlea5IPE6SpCKYTn7Jzh0QMzb/pub?gid=2043771999&single=true&output=csv";

/// One-shot feed load: fetch, parse, install. The returned context is
/// always ready — a fetch or parse failure flips it into degraded mode
/// (zero records, keyword routing only) instead of failing the command.
pub async fn load(cli: &Cli) -> Result<Concierge> {
    let config = match cli.threshold {
        Some(threshold) => MatchConfig { threshold },
        None => MatchConfig::default(),
    };
    let mut concierge = Concierge::with_config(RouteTable::wedding_defaults(), config);

    let text = match fetch_feed(cli).await {
        Ok(text) => text,
        Err(err) => {
            log::warn!("feed fetch failed: {err:#}");
            concierge.feed_failed();
            return Ok(concierge);
        }
    };

    match parse_csv(&text) {
        Ok(rows) => {
            let records = load_records(&rows, &FieldMap::default());
            log::info!("feed loaded: {} rows, {} usable records", rows.len(), records.len());
            concierge.install_records(records);
        }
        Err(err) => {
            log::warn!("feed parse failed: {err}");
            concierge.feed_failed();
        }
    }

    Ok(concierge)
}

async fn fetch_feed(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.feed_file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading feed file {}", path.display()));
    }

    let url = cli.feed_url.as_deref().unwrap_or(DEFAULT_FEED_URL);
    log::debug!("fetching feed from {url}");
    let response = reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .with_context(|| format!("fetching feed from {url}"))?;
    response.text().await.context("reading feed body")
}
