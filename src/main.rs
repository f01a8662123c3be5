use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use gridplace::lib_tracing::LibTracer;
use gridplace::{CostMode, CostWeighting, Directedness, GridDimensions, OptimizerConfig, RunConfig};

const USAGE_EXIT: u8 = 2;

/// Place the nodes of a weighted edge list on a grid so that heavy edges stay short.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge list, one `<from>,<to>:<weight>` record per line
    input: PathBuf,

    /// Write the final `id,x,y` coordinates to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Grid width, derived from the node count if omitted
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height, derived from the node count if omitted
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Evaluate every trial against the cost of the whole grid
    #[arg(short, long)]
    global: bool,

    /// Treat edges as directed
    #[arg(short, long)]
    directed: bool,

    /// Stop after this many consecutive rejected trials
    #[arg(short, long, default_value_t = 1_000_000)]
    end_condition: u64,

    /// Largest number of nodes rotated in one trial
    #[arg(short, long = "max-in-swap", default_value_t = 2)]
    max_in_swap: usize,

    /// Ignore edge weights when measuring distances
    #[arg(long)]
    unweighted: bool,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Iterations between progress reports, 0 disables them
    #[arg(long, default_value_t = 100_000)]
    progress_interval: u64,

    /// Write folded stack samples for a flamegraph to this file
    #[arg(long)]
    flame: Option<PathBuf>,

    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            directedness: if self.directed {
                Directedness::Directed
            } else {
                Directedness::Undirected
            },
            dimensions: GridDimensions::new(self.width, self.height),
            optimizer: OptimizerConfig {
                cost_mode: if self.global { CostMode::Global } else { CostMode::Local },
                weighting: if self.unweighted {
                    CostWeighting::Unweighted
                } else {
                    CostWeighting::Weighted
                },
                end_condition: self.end_condition,
                max_swap: self.max_in_swap,
                progress_interval: self.progress_interval,
            },
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(USAGE_EXIT),
            };
        }
    };

    let config = cli.run_config();
    if let Err(err) = config.optimizer.validate() {
        eprintln!("error: {err}");
        return ExitCode::from(USAGE_EXIT);
    }

    let _tracer = match LibTracer::init(cli.verbose, cli.flame.as_deref()) {
        Ok(tracer) => tracer,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match gridplace::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
