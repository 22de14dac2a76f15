use anyhow::{Context, Result, anyhow};
use chrono::Utc;

use crate::http_client::http_client;

const SCHEDULE_CSV_URL: &str =
    "https://raw.githubusercontent.com/michaelj86768894/big12/main/Head2Head.csv";
const STANDINGS_CSV_URL: &str =
    "https://raw.githubusercontent.com/michaelj86768894/big12/main/Schedule.csv";

/// Fetch the head-to-head schedule CSV as one complete string.
/// `SCHEDULE_CSV_URL` overrides the published location.
pub fn fetch_schedule_csv() -> Result<String> {
    fetch_csv(&env_url("SCHEDULE_CSV_URL", SCHEDULE_CSV_URL))
}

/// Fetch the raw standings CSV as one complete string.
/// `STANDINGS_CSV_URL` overrides the published location.
pub fn fetch_standings_csv() -> Result<String> {
    fetch_csv(&env_url("STANDINGS_CSV_URL", STANDINGS_CSV_URL))
}

fn env_url(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn fetch_csv(url: &str) -> Result<String> {
    let client = http_client()?;

    // Cache-buster keeps intermediaries from serving a stale copy of the sheet.
    let sep = if url.contains('?') { '&' } else { '?' };
    let full_url = format!("{url}{sep}cb={}", Utc::now().timestamp());

    let response = client
        .get(&full_url)
        .send()
        .with_context(|| format!("request failed: {url}"))?;
    if !response.status().is_success() {
        return Err(anyhow!("unexpected status {} for {url}", response.status()));
    }
    response
        .text()
        .with_context(|| format!("read response body from {url}"))
}
