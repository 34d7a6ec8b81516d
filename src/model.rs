use serde_json::{Map, Value};

/// Incident `type` code the upstream uses for goals.
pub const GOAL_EVENT_TYPE: i64 = 1;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub id: Option<String>,
    pub home_name: String,
    pub away_name: String,
    pub score: Option<(u32, u32)>,
}

impl MatchSummary {
    pub fn match_label(&self) -> String {
        format!("{} vs {}", self.home_name, self.away_name)
    }

    pub fn score_label(&self) -> String {
        match self.score {
            Some((home, away)) => format!("{home}-{away}"),
            None => "N/A".to_string(),
        }
    }
}

/// Raw `incs` payload: team id -> minute label -> list of event objects.
///
/// Inner levels stay untyped; the flattener skips anything of the wrong shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchDetail {
    pub incidents: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub team_id: String,
    pub minute_label: String,
    pub kind: Option<i64>,
    pub pl_name: Option<String>,
    pub player_name: Option<String>,
    pub min: Option<String>,
}

impl EventRecord {
    pub fn from_value(team_id: &str, minute_label: &str, value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            team_id: team_id.to_string(),
            minute_label: minute_label.to_string(),
            kind: obj.get("type").and_then(as_event_code),
            pl_name: obj.get("pl_name").and_then(non_empty_str),
            player_name: obj.get("player_name").and_then(non_empty_str),
            min: obj
                .get("min")
                .and_then(as_label)
                .or_else(|| obj.get("minute").and_then(as_label)),
        })
    }

    pub fn is_goal(&self) -> bool {
        self.kind == Some(GOAL_EVENT_TYPE)
    }

    /// `pl_name` when populated, otherwise `player_name`.
    pub fn player(&self) -> Option<&str> {
        self.pl_name.as_deref().or(self.player_name.as_deref())
    }

    pub fn minute(&self) -> &str {
        if let Some(min) = self.min.as_deref() {
            return min;
        }
        if self.minute_label.trim().is_empty() {
            "?"
        } else {
            &self.minute_label
        }
    }

    pub fn goal_label(&self) -> String {
        let name = self.player().map(str::trim).unwrap_or(UNKNOWN);
        format!("{} ({}')", name, self.minute())
    }
}

pub(crate) fn as_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn as_u32(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    if let Some(s) = value.as_str() {
        return s.trim().parse::<u32>().ok();
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) {
        Some(f as u32)
    } else {
        None
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
}

fn as_event_code(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 { Some(f as i64) } else { None }
}
