use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use goal_tally::config::DEFAULT_PLAYER_VARIANTS;
use goal_tally::incidents::extract_goals;
use goal_tally::player_match::PlayerMatcher;
use goal_tally::sport365_fetch::parse_match_detail_json;

const SCORERS: &[&str] = &[
    "Viktor Gyökeres",
    "Bukayo Saka",
    "Declan Rice",
    "Gabriel Martinelli",
    "Martin Ødegaard",
];

fn synthetic_match_json(teams: usize, minutes: usize, per_minute: usize) -> String {
    let mut teams_json = Vec::with_capacity(teams);
    for t in 0..teams {
        let mut minutes_json = Vec::with_capacity(minutes);
        for m in 0..minutes {
            let mut events = Vec::with_capacity(per_minute);
            for e in 0..per_minute {
                let kind = if (m + e) % 4 == 0 { 1 } else { 2 + (e % 5) };
                let name = SCORERS[(t + m + e) % SCORERS.len()];
                let field = if e % 2 == 0 { "pl_name" } else { "player_name" };
                events.push(format!(r#"{{"type":{kind},"{field}":"{name}","min":{m}}}"#));
            }
            minutes_json.push(format!(r#""{m}":[{}]"#, events.join(",")));
        }
        teams_json.push(format!(r#""{}":{{{}}}"#, 1000 + t, minutes_json.join(",")));
    }
    format!(r#"{{"incs":{{{}}}}}"#, teams_json.join(","))
}

fn bench_parse(c: &mut Criterion) {
    let raw = synthetic_match_json(2, 120, 6);
    c.bench_function("parse_match_detail_json", |b| {
        b.iter(|| parse_match_detail_json(black_box(&raw)).expect("valid json"))
    });
}

fn bench_extract_and_match(c: &mut Criterion) {
    let raw = synthetic_match_json(2, 120, 6);
    let detail = parse_match_detail_json(&raw).expect("valid json");
    let matcher = PlayerMatcher::new(DEFAULT_PLAYER_VARIANTS);
    c.bench_function("extract_goals_and_match", |b| {
        b.iter(|| {
            let goals = extract_goals(black_box(&detail));
            matcher.filter_goals(&goals).len()
        })
    });
}

criterion_group!(benches, bench_parse, bench_extract_and_match);
criterion_main!(benches);
