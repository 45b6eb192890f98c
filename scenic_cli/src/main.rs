use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{candidates::CandidatesArgs, generate::GenerateSubcommands, plan::PlanArgs};

mod candidates;
mod generate;
mod parsers;
mod plan;
mod request;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plans a scenic path for a JSON planning request
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// Prints the indexed candidate points a travel matrix must be computed for
    Candidates {
        #[command(flatten)]
        args: CandidatesArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Plan { args }) => plan::run(args)?,
        Some(Commands::Candidates { args }) => candidates::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
