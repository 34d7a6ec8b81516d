use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::http_client::http_client;
use crate::http_fetch::fetch_json_body;
use crate::model::{MatchDetail, MatchSummary, as_label, as_u32};

const MATCH_DETAIL_FLAGS: &str = "boxscore=1&estats=1&tf=1&tlge=1&wh2h=1&wstats=1&wtops=1";

pub fn team_page_url(api_base: &str, team_id: &str) -> String {
    format!("{api_base}/team/soccer/teampage/{team_id}")
}

pub fn match_detail_url(api_base: &str, match_id: &str) -> String {
    format!("{api_base}/match/soccer/full/{match_id}?{MATCH_DETAIL_FLAGS}")
}

pub fn fetch_team_results(api_base: &str, team_id: &str) -> Result<Vec<MatchSummary>> {
    let client = http_client()?;
    let url = team_page_url(api_base, team_id);
    let body = fetch_json_body(client, &url).context("team page request failed")?;
    parse_team_results_json(&body)
}

pub fn fetch_match_detail(api_base: &str, match_id: &str) -> Result<MatchDetail> {
    let client = http_client()?;
    let url = match_detail_url(api_base, match_id);
    let body = fetch_json_body(client, &url).context("match detail request failed")?;
    parse_match_detail_json(&body)
}

#[derive(Debug, Deserialize)]
struct TeamPageResponse {
    #[serde(default)]
    results: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct MatchFullResponse {
    #[serde(default)]
    incs: Option<Value>,
}

pub fn parse_team_results_json(raw: &str) -> Result<Vec<MatchSummary>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let page: TeamPageResponse = serde_json::from_str(trimmed).context("invalid team page json")?;
    Ok(page
        .results
        .unwrap_or_default()
        .iter()
        .map(parse_match_summary)
        .collect())
}

pub fn parse_match_detail_json(raw: &str) -> Result<MatchDetail> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(MatchDetail::default());
    }
    let full: MatchFullResponse =
        serde_json::from_str(trimmed).context("invalid match detail json")?;
    let incidents = match full.incs {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    Ok(MatchDetail { incidents })
}

fn parse_match_summary(value: &Value) -> MatchSummary {
    // A numeric zero id is a placeholder upstream, never a fetchable match.
    let id = value
        .get("id")
        .filter(|v| v.as_f64() != Some(0.0))
        .and_then(as_label);
    let home_name = pick_name(value, "home_name");
    let away_name = pick_name(value, "away_name");
    let score = value
        .get("ft_score")
        .filter(|v| !v.is_null())
        .or_else(|| value.get("score"))
        .and_then(parse_score_pair);

    MatchSummary {
        id,
        home_name,
        away_name,
        score,
    }
}

fn pick_name(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(as_label)
        .unwrap_or_else(|| "Unknown".to_string())
}

fn parse_score_pair(value: &Value) -> Option<(u32, u32)> {
    let pair = value.as_array()?;
    if pair.len() < 2 {
        return None;
    }
    Some((as_u32(&pair[0])?, as_u32(&pair[1])?))
}
