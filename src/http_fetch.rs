use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

/// GETs `url` and returns the body text of a successful response.
pub fn fetch_json_body(client: &Client, url: &str) -> Result<String> {
    let started = Instant::now();
    let resp = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    tracing::debug!(%url, %status, elapsed = ?started.elapsed(), bytes = body.len(), "GET");

    if !status.is_success() {
        return Err(anyhow!("http {}: {}", status, truncate_body(&body)));
    }
    Ok(body)
}

fn truncate_body(body: &str) -> &str {
    const MAX_ERROR_BODY: usize = 200;
    let trimmed = body.trim();
    if trimmed.len() <= MAX_ERROR_BODY {
        return trimmed;
    }
    let mut end = MAX_ERROR_BODY;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    &trimmed[..end]
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "ö".repeat(150);
        let cut = truncate_body(&body);
        assert!(cut.len() <= 200);
        assert!(cut.chars().all(|c| c == 'ö'));
    }

    #[test]
    fn short_bodies_are_trimmed_only() {
        assert_eq!(truncate_body("  not found \n"), "not found");
    }
}
