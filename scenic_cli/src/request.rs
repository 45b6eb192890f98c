use std::{fs::File, io::BufReader, path::Path};

use clap::Args;
use scenic_matrix_providers::travel_mode::TravelMode;
use scenic_optimizer::{
    json::types::JsonPlanningRequest, planner::planner_config::PlannerConfig,
    problem::budget::Budget,
};

use crate::parsers;

/// Overrides applied on top of the request file.
#[derive(Args)]
pub struct ConfigOverrides {
    /// Time budget (e.g., "00:25", "45", "1h30m")
    #[arg(short, long, value_parser = parsers::parse_budget)]
    budget: Option<f64>,

    #[arg(short, long, value_enum)]
    mode: Option<TravelModeArg>,

    /// Candidates kept after clustering
    #[arg(short, long)]
    candidates: Option<usize>,

    /// GRASP iterations
    #[arg(long, short = 'n')]
    iterations: Option<usize>,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum TravelModeArg {
    Walking,
    Driving,
}

impl From<TravelModeArg> for TravelMode {
    fn from(value: TravelModeArg) -> Self {
        match value {
            TravelModeArg::Walking => TravelMode::Walking,
            TravelModeArg::Driving => TravelMode::Driving,
        }
    }
}

pub fn read_request(path: &Path) -> anyhow::Result<JsonPlanningRequest> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

impl ConfigOverrides {
    pub fn apply(&self, request: &JsonPlanningRequest) -> anyhow::Result<PlannerConfig> {
        let mut config = request.planner_config()?;

        if let Some(minutes) = self.budget {
            config.budget = Budget::from_minutes(minutes)?;
        }

        if let Some(mode) = self.mode {
            config.travel_mode = mode.into();
        }

        if let Some(candidates) = self.candidates {
            config.candidate_count = candidates;
        }

        if let Some(iterations) = self.iterations {
            config.grasp.max_iterations = iterations;
        }

        Ok(config)
    }
}
