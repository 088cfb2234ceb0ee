use std::path::PathBuf;

use anyhow::bail;
use decorscore_engine::Placement;
use decorscore_geometry::Point2D;

use crate::{model::scenario::Scenario, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PreviewArg {
    /// Scenario JSON file providing areas and items
    scenario: PathBuf,
    /// Item definition name
    #[arg(long)]
    item: String,
    /// World X coordinate
    #[arg(long, allow_negative_numbers = true)]
    x: f64,
    /// World Y coordinate
    #[arg(long, allow_negative_numbers = true)]
    y: f64,
}

pub(crate) fn run(arg: &PreviewArg) -> anyhow::Result<()> {
    let PreviewArg { scenario, item, x, y } = arg;

    let position = Point2D::new(*x, *y);
    if !position.is_finite() {
        bail!("position ({x}, {y}) is not finite");
    }
    let aggregator = Scenario::open(scenario)?.build_aggregator()?;
    if aggregator.catalog().get(item).is_none() {
        bail!("{} has no item named {item:?}", scenario.display());
    }

    let score = aggregator.preview(item, &Placement::at(position));
    Output::stdout().write_json(&score)
}
