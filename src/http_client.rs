use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const REQUEST_TIMEOUT_SECS: u64 = 20;
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Shared blocking client. Requests carry a browser `User-Agent`, the same as
/// the web front end that normally calls the feed.
pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .context("failed to build http client")
    })
}
