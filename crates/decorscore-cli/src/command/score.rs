use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use decorscore_engine::{DaySummary, ItemScoreReport};
use serde::Serialize;

use crate::{model::scenario::Scenario, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Scenario JSON file
    scenario: PathBuf,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    generated_at: DateTime<Utc>,
    scenario: PathBuf,
    days: Vec<DayReport>,
    game_total: i64,
}

#[derive(Debug, Serialize)]
struct DayReport {
    summary: DaySummary,
    items: Vec<ItemScoreReport>,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let ScoreArg { scenario, output } = arg;

    let loaded = Scenario::open(scenario)?;
    let mut aggregator = loaded
        .build_aggregator()
        .with_context(|| format!("failed to set up {}", scenario.display()))?;

    let mut days = Vec::with_capacity(loaded.days.len());
    for day in &loaded.days {
        aggregator.begin_day();
        day.apply(&mut aggregator);
        aggregator.finish_day();
        // Cached scores survive finalizing; the breakdown reflects final positions.
        let items = aggregator.breakdown();
        let summary = aggregator.finalize_day();
        days.push(DayReport { summary, items });
    }

    let report = ScoreReport {
        generated_at: Utc::now(),
        scenario: scenario.clone(),
        days,
        game_total: aggregator.game_total(),
    };
    Output::open_or_stdout(output.as_deref())?.write_json(&report)
}
