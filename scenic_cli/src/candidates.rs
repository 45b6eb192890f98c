use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use scenic_optimizer::planner::scenic_path_planner::ScenicPathPlanner;
use tracing::info;

use crate::request::{ConfigOverrides, read_request};

#[derive(Args)]
pub struct CandidatesArgs {
    /// The planning request
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Writes the indexed points as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub fn run(args: CandidatesArgs) -> anyhow::Result<()> {
    let request = read_request(&args.input)?;
    let config = args.overrides.apply(&request)?;

    info!(
        "Samples should be collected within {:.1} km of the origin when {}",
        config.search_radius_km(),
        config.travel_mode
    );

    let planner = ScenicPathPlanner::new(config);
    let points = planner.candidate_points(request.origin, &request.samples);

    let mut table = Table::new();
    table.set_header(vec!["Index", "Lat", "Lng", "Value"]);
    for (index, point) in points.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            format!("{:.6}", point.lat()),
            format!("{:.6}", point.lng()),
            point.value().to_string(),
        ]);
    }
    println!("{table}");

    if let Some(out) = args.out {
        std::fs::write(out, serde_json::to_string_pretty(&points)?)?;
    }

    Ok(())
}
