use clap::{Parser, Subcommand};

use self::{preview::PreviewArg, score::ScoreArg};

mod preview;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play every day of a scenario and report the scores
    Score(#[clap(flatten)] ScoreArg),
    /// Score a single hypothetical placement
    Preview(#[clap(flatten)] PreviewArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Score(arg) => score::run(&arg)?,
        Mode::Preview(arg) => preview::run(&arg)?,
    }
    Ok(())
}
