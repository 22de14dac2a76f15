use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const REQUEST_TIMEOUT_SECS: u64 = 15;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Shared blocking client for the CSV sources. Both fetches go through the
/// same instance so the timeout applies uniformly.
pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("big12_terminal/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build http client")
    })
}
