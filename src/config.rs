use std::env;

pub const DEFAULT_API_BASE: &str = "https://api.sport365.com/v1/en";
pub const DEFAULT_TEAM_ID: &str = "1-1538";
pub const DEFAULT_TEAM_NAME: &str = "Arsenal";
pub const DEFAULT_PLAYER_NAME: &str = "Viktor Gyökeres";
pub const DEFAULT_PLAYER_VARIANTS: &[&str] = &["viktor", "gyoekeres", "gyökeres"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    pub api_base: String,
    pub team_id: String,
    pub team_name: String,
    pub player_name: String,
    pub player_variants: Vec<String>,
    pub match_limit: Option<usize>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            team_id: DEFAULT_TEAM_ID.to_string(),
            team_name: DEFAULT_TEAM_NAME.to_string(),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            player_variants: default_variants(),
            match_limit: None,
        }
    }
}

impl TallyConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_base = env_string("GOAL_TALLY_API_BASE")
            .map(|s| normalize_api_base(&s))
            .unwrap_or(defaults.api_base);
        let team_id = env_string("GOAL_TALLY_TEAM_ID").unwrap_or(defaults.team_id);
        let team_name = env_string("GOAL_TALLY_TEAM_NAME").unwrap_or(defaults.team_name);
        let player_name = env_string("GOAL_TALLY_PLAYER_NAME").unwrap_or(defaults.player_name);
        let player_variants = env_string("GOAL_TALLY_PLAYER_VARIANTS")
            .map(|raw| parse_variants(&raw))
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.player_variants);
        let match_limit = env_string("GOAL_TALLY_MATCH_LIMIT").and_then(|raw| parse_limit(&raw));

        Self {
            api_base,
            team_id,
            team_name,
            player_name,
            player_variants,
            match_limit,
        }
    }

    /// Applies a single `--key` override. Returns false for unknown keys.
    pub fn apply_override(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        match key {
            "api-base" if !value.is_empty() => self.api_base = normalize_api_base(value),
            "team-id" if !value.is_empty() => self.team_id = value.to_string(),
            "team-name" if !value.is_empty() => self.team_name = value.to_string(),
            "player-name" if !value.is_empty() => self.player_name = value.to_string(),
            "variants" => {
                let variants = parse_variants(value);
                if !variants.is_empty() {
                    self.player_variants = variants;
                }
            }
            "limit" => {
                if let Some(limit) = parse_limit(value) {
                    self.match_limit = Some(limit);
                }
            }
            "api-base" | "team-id" | "team-name" | "player-name" => {}
            _ => return false,
        }
        true
    }
}

pub fn parse_variants(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in raw.split([',', ';']) {
        let variant = part.trim().to_lowercase();
        if variant.is_empty() || out.contains(&variant) {
            continue;
        }
        out.push(variant);
    }
    out
}

fn parse_limit(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn default_variants() -> Vec<String> {
    DEFAULT_PLAYER_VARIANTS
        .iter()
        .map(|v| v.to_string())
        .collect()
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
