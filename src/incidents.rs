use crate::model::{EventRecord, MatchDetail};

/// Walks team id -> minute label -> events and tags each event with both keys.
///
/// Keys are walked in payload order, so goals come out in the order the feed lists them.
pub fn flatten_events(detail: &MatchDetail) -> Vec<EventRecord> {
    let mut out = Vec::new();
    for (team_id, team_incs) in &detail.incidents {
        let Some(by_minute) = team_incs.as_object() else {
            continue;
        };
        for (minute_label, events) in by_minute {
            let Some(list) = events.as_array() else {
                continue;
            };
            out.extend(
                list.iter()
                    .filter_map(|ev| EventRecord::from_value(team_id, minute_label, ev)),
            );
        }
    }
    out
}

pub fn goal_events(events: Vec<EventRecord>) -> Vec<EventRecord> {
    events.into_iter().filter(EventRecord::is_goal).collect()
}

pub fn extract_goals(detail: &MatchDetail) -> Vec<EventRecord> {
    goal_events(flatten_events(detail))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn detail(incs: Value) -> MatchDetail {
        MatchDetail {
            incidents: incs.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn flatten_tags_team_and_minute() {
        let d = detail(json!({
            "1538": {"23": [{"type": 1, "pl_name": "Viktor Gyökeres", "min": 23}]},
            "42": {"60": [{"type": 3, "pl_name": "Moisés Caicedo"}]}
        }));
        let events = flatten_events(&d);
        assert_eq!(events.len(), 2);
        let goal = events.iter().find(|e| e.is_goal()).expect("goal present");
        assert_eq!(goal.team_id, "1538");
        assert_eq!(goal.minute_label, "23");
        assert_eq!(goal.min.as_deref(), Some("23"));
    }

    #[test]
    fn malformed_levels_are_skipped() {
        let d = detail(json!({
            "1": "oops",
            "2": {"10": {"type": 1}, "11": [7, null, {"type": 1, "pl_name": "A"}]},
            "3": []
        }));
        let events = flatten_events(&d);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].team_id, "2");
        assert_eq!(events[0].minute_label, "11");
    }

    #[test]
    fn goal_filter_keeps_only_type_one() {
        let d = detail(json!({
            "1": {
                "5": [{"type": 1, "pl_name": "A"}, {"type": 2, "pl_name": "B"}],
                "9": [{"pl_name": "C"}, {"type": 1, "player_name": "D"}]
            },
            "2": {"88": [{"type": 1, "pl_name": "E"}, {"type": 11}]}
        }));
        let mut names = extract_goals(&d)
            .iter()
            .filter_map(|g| g.player().map(str::to_string))
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, vec!["A", "D", "E"]);
    }

    #[test]
    fn empty_incidents_yield_nothing() {
        assert!(extract_goals(&MatchDetail::default()).is_empty());
    }
}
