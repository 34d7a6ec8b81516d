use std::io::Write;

use anyhow::{Context, Result};

use crate::config::TallyConfig;
use crate::incidents::extract_goals;
use crate::model::{MatchDetail, MatchSummary};
use crate::player_match::PlayerMatcher;
use crate::report::{
    Accumulator, MatchOutcome, RunSummary, write_checking, write_match_outcome,
    write_match_prefix, write_no_results, write_results_found, write_summary,
};
use crate::sport365_fetch;

/// Where match lists and per-match incidents come from.
pub trait MatchSource {
    fn team_results(&mut self) -> Result<Vec<MatchSummary>>;
    fn match_detail(&mut self, match_id: &str) -> Result<MatchDetail>;
}

#[derive(Debug, Clone)]
pub struct Sport365Source {
    api_base: String,
    team_id: String,
}

impl Sport365Source {
    pub fn new(cfg: &TallyConfig) -> Self {
        Self {
            api_base: cfg.api_base.clone(),
            team_id: cfg.team_id.clone(),
        }
    }
}

impl MatchSource for Sport365Source {
    fn team_results(&mut self) -> Result<Vec<MatchSummary>> {
        sport365_fetch::fetch_team_results(&self.api_base, &self.team_id)
            .with_context(|| format!("fetch team results for {}", self.team_id))
    }

    fn match_detail(&mut self, match_id: &str) -> Result<MatchDetail> {
        sport365_fetch::fetch_match_detail(&self.api_base, match_id)
    }
}

/// Runs the whole fetch, filter and report pass, writing progress and summary to `out`.
///
/// Only a failed team-results fetch (or a write error) is returned; per-match
/// failures are reported inline and counted in `matches_failed`.
pub fn run_tally<S, W>(source: &mut S, cfg: &TallyConfig, out: &mut W) -> Result<RunSummary>
where
    S: MatchSource,
    W: Write,
{
    let matcher = PlayerMatcher::new(&cfg.player_variants);
    let results = source.team_results()?;
    write_results_found(out, results.len(), &cfg.team_name)?;

    if results.is_empty() {
        write_no_results(out)?;
        return Ok(RunSummary::default());
    }

    let to_check = match cfg.match_limit {
        Some(limit) => &results[..limit.min(results.len())],
        None => &results[..],
    };
    write_checking(out, to_check.len())?;

    let mut acc = Accumulator::default();
    let mut matches_failed = 0;
    for (idx, summary) in to_check.iter().enumerate() {
        let Some(match_id) = summary.id.as_deref() else {
            tracing::debug!(index = idx, "skipping match without id");
            continue;
        };

        write_match_prefix(out, idx, to_check.len(), summary)?;
        let outcome = match check_match(source, &matcher, match_id, summary, &mut acc) {
            Ok(outcome) => outcome,
            Err(err) => {
                matches_failed += 1;
                tracing::warn!(%match_id, error = %format!("{err:#}"), "match skipped");
                MatchOutcome::Failed(format!("{err:#}"))
            }
        };
        write_match_outcome(out, &outcome)?;
    }

    let run = RunSummary {
        results_found: results.len(),
        matches_checked: to_check.len(),
        matches_failed,
        accumulator: acc,
    };
    write_summary(out, &run, &cfg.player_name, &cfg.team_name)?;
    Ok(run)
}

fn check_match<S: MatchSource>(
    source: &mut S,
    matcher: &PlayerMatcher,
    match_id: &str,
    summary: &MatchSummary,
    acc: &mut Accumulator,
) -> Result<MatchOutcome> {
    let detail = source.match_detail(match_id)?;
    let goals = extract_goals(&detail);
    let target = matcher.filter_goals(&goals);

    if target.is_empty() {
        let scorers = goals
            .iter()
            .map(|g| g.player().unwrap_or("?"))
            .collect::<Vec<_>>();
        tracing::debug!(%match_id, ?scorers, "no target goals");
        return Ok(MatchOutcome::OtherGoals(goals.len()));
    }

    acc.record(summary, &target);
    Ok(MatchOutcome::TargetGoals(target.len()))
}
