use std::io;

use anyhow::{Result, anyhow};

use goal_tally::config::TallyConfig;
use goal_tally::logging::init_logging;
use goal_tally::tally::{Sport365Source, run_tally};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_logging();

    let mut cfg = TallyConfig::from_env();
    apply_args(&mut cfg, std::env::args().skip(1).collect())?;
    tracing::debug!(?cfg, "resolved config");

    let mut source = Sport365Source::new(&cfg);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let run = run_tally(&mut source, &cfg, &mut out)?;
    if run.matches_failed > 0 {
        tracing::warn!(
            failed = run.matches_failed,
            checked = run.matches_checked,
            "some matches could not be fetched"
        );
    }
    Ok(())
}

fn apply_args(cfg: &mut TallyConfig, args: Vec<String>) -> Result<()> {
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let Some(flag) = arg.strip_prefix("--") else {
            return Err(anyhow!("unexpected argument: {arg}"));
        };
        let (key, value) = match flag.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => {
                let Some(next) = iter.next() else {
                    return Err(anyhow!("missing value for --{flag}"));
                };
                (flag.to_string(), next)
            }
        };
        if !cfg.apply_override(&key, &value) {
            return Err(anyhow!("unknown option: --{key}"));
        }
    }
    Ok(())
}
