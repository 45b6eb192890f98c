use std::path::PathBuf;

use clap::{Args, ValueEnum};
use comfy_table::Table;
use rand::{SeedableRng, rngs::SmallRng};
use scenic_optimizer::{
    json::types::JsonPlannedPaths,
    planner::{
        cost_matrix_source::ProviderMatrixSource, planned_paths::PlannedPaths,
        scenic_path_planner::ScenicPathPlanner,
    },
    solver::solution::Solution,
};
use tracing::info;

use crate::request::{ConfigOverrides, read_request};

#[derive(Args)]
pub struct PlanArgs {
    /// The planning request
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Seed for GRASP, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Solver whose route is printed
    #[arg(long, value_enum, default_value_t = SolverChoice::Exhaustive)]
    solver: SolverChoice,

    /// Writes both solutions as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum SolverChoice {
    Exhaustive,
    Grasp,
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let request = read_request(&args.input)?;
    let config = args.overrides.apply(&request)?;
    let source = ProviderMatrixSource::new(request.travel_matrix_provider(config.travel_mode));

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    info!(
        "Planning a {} {} path over {} samples",
        config.budget,
        config.travel_mode,
        request.samples.len()
    );

    let planner = ScenicPathPlanner::new(config);
    let planned = planner.plan(request.origin, &request.samples, &source, &mut rng)?;

    print_summary(&planned);

    let chosen = match args.solver {
        SolverChoice::Exhaustive => &planned.exhaustive,
        SolverChoice::Grasp => &planned.grasp,
    };
    print_route(&planned, chosen);

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(
            out,
            serde_json::to_string_pretty(&JsonPlannedPaths::from(&planned))?,
        )?;
    }

    Ok(())
}

fn print_summary(planned: &PlannedPaths) {
    let mut table = Table::new();
    table.set_header(vec!["Solver", "Path", "Score", "Cost (min)"]);

    for (name, solution) in [("exhaustive", &planned.exhaustive), ("grasp", &planned.grasp)] {
        let path = std::iter::once("0".to_owned())
            .chain(solution.path.iter().map(|index| index.to_string()))
            .collect::<Vec<_>>()
            .join(" -> ");

        table.add_row(vec![
            name.to_owned(),
            path,
            solution.score.to_string(),
            format!("{:.1}", solution.cost),
        ]);
    }

    println!("{table}");
}

fn print_route(planned: &PlannedPaths, solution: &Solution) {
    let route = planned.route(solution);
    for (stop, coordinates) in route.coordinates.iter().enumerate() {
        println!("{stop}: {:.6},{:.6}", coordinates.lat, coordinates.lng);
    }
}
