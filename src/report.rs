use std::io::{self, Write};

use crate::model::{EventRecord, MatchSummary};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGoals {
    pub match_label: String,
    pub score_label: String,
    pub goal_labels: Vec<String>,
}

/// Running tally of target-player goals, in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    total_goals: usize,
    matches: Vec<MatchGoals>,
}

impl Accumulator {
    /// Adds one match's target goals. Matches without goals are not listed.
    pub fn record(&mut self, summary: &MatchSummary, goals: &[&EventRecord]) {
        if goals.is_empty() {
            return;
        }
        self.total_goals += goals.len();
        self.matches.push(MatchGoals {
            match_label: summary.match_label(),
            score_label: summary.score_label(),
            goal_labels: goals.iter().map(|g| g.goal_label()).collect(),
        });
    }

    pub fn total_goals(&self) -> usize {
        self.total_goals
    }

    pub fn matches(&self) -> &[MatchGoals] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub results_found: usize,
    pub matches_checked: usize,
    pub matches_failed: usize,
    pub accumulator: Accumulator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    TargetGoals(usize),
    OtherGoals(usize),
    Failed(String),
}

pub fn write_results_found<W: Write>(out: &mut W, results: usize, team: &str) -> io::Result<()> {
    writeln!(out, "✅ Found {results} {team} results\n")
}

pub fn write_no_results<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ No results found")
}

pub fn write_checking<W: Write>(out: &mut W, matches: usize) -> io::Result<()> {
    writeln!(out, "📊 Checking {matches} matches...\n")
}

/// Writes the progress prefix without a newline; the outcome finishes the line.
pub fn write_match_prefix<W: Write>(
    out: &mut W,
    index: usize,
    total: usize,
    summary: &MatchSummary,
) -> io::Result<()> {
    write!(
        out,
        "  Match {}/{}: {}... ",
        index + 1,
        total,
        summary.match_label()
    )?;
    out.flush()
}

pub fn write_match_outcome<W: Write>(out: &mut W, outcome: &MatchOutcome) -> io::Result<()> {
    match outcome {
        MatchOutcome::TargetGoals(n) => writeln!(out, "✅ {n} goal(s)!"),
        MatchOutcome::OtherGoals(n) => writeln!(out, "({n} goals total)"),
        MatchOutcome::Failed(err) => writeln!(out, "❌ Error: {err}"),
    }
}

pub fn write_summary<W: Write>(
    out: &mut W,
    run: &RunSummary,
    player: &str,
    team: &str,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "\n📈 SUMMARY: {player} Goals for {team}")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\n🎯 Total Goals: {}", run.accumulator.total_goals())?;
    writeln!(
        out,
        "📊 Matches Checked: {} of {}",
        run.matches_checked, run.results_found
    )?;

    if run.accumulator.is_empty() {
        writeln!(out, "\n⚠️  No goals found for {player} in checked matches")?;
    } else {
        writeln!(out, "\n📋 Goal Details:\n")?;
        for (idx, detail) in run.accumulator.matches().iter().enumerate() {
            writeln!(
                out,
                "  {}. {} ({})",
                idx + 1,
                detail.match_label,
                detail.score_label
            )?;
            for goal in &detail.goal_labels {
                writeln!(out, "     ⚽ {goal}")?;
            }
        }
    }

    writeln!(out, "\n{rule}\n")
}
