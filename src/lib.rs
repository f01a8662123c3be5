#![forbid(unsafe_code)]

//! Places the nodes of a weighted graph onto the cells of a 2-D grid.
//!
//! Nodes connected by heavy edges should end up close to each other. The
//! placement is improved by stochastic local search: random windows of slots
//! are rotated and a rotation is kept only when it lowers the weighted
//! Euclidean distance of the affected edges.

pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod lib_tracing;
pub mod output;
pub mod render;

use std::fs::File;
use std::io::{BufReader, BufWriter};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, Level};

pub use config::{CostMode, CostWeighting, Directedness, GridDimensions, OptimizerConfig, RunConfig};
pub use error::{Error, Result};
pub use geometry::Point;
pub use graph::{EdgeRecord, GraphModel, NodeId, ParseEdgeError, Weight};
pub use layout::{Cell, CostEvaluator, Grid, LocalSearch, Placement, SearchStats};

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub grid: Grid,
    pub stats: SearchStats,
    pub initial_cost: f64,
    pub final_cost: f64,
}

/// Optimizes a placement for `graph`, starting from the identity permutation.
pub fn optimize<R: rand::Rng>(
    graph: &GraphModel,
    grid: Grid,
    config: &OptimizerConfig,
    rng: R,
) -> Result<(Placement, SearchStats)> {
    let placement = Placement::identity(grid, graph.node_count())?;
    let mut search = LocalSearch::new(graph, placement, config.clone(), rng)?;
    let stats = search.run();
    Ok((search.into_placement(), stats))
}

/// Reads the edge list, optimizes the placement and writes the coordinates.
#[tracing::instrument(skip_all, fields(input = %config.input.display()))]
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.optimizer.validate()?;

    let file = File::open(&config.input).map_err(|source| Error::Read {
        path: config.input.clone(),
        source,
    })?;
    let graph = GraphModel::from_reader(BufReader::new(file), config.directedness).map_err(|err| match err {
        Error::Io(source) => Error::Read {
            path: config.input.clone(),
            source,
        },
        other => other,
    })?;

    let grid = config.dimensions.resolve(graph.node_count())?;
    info!(width = grid.width(), height = grid.height(), "grid");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let placement = Placement::identity(grid, graph.node_count())?;
    let evaluator = CostEvaluator::new(&graph, config.optimizer.weighting);
    let initial_cost = evaluator.grid_cost(&placement);
    if tracing::enabled!(Level::DEBUG) {
        debug!("initial placement:\n{}", render::render_grid(&graph, &placement));
    }

    let mut search = LocalSearch::new(&graph, placement, config.optimizer.clone(), rng)?;
    let stats = search.run();
    let final_cost = search.grid_cost();
    let placement = search.into_placement();
    if tracing::enabled!(Level::DEBUG) {
        debug!("final placement:\n{}", render::render_grid(&graph, &placement));
    }

    if let Some(path) = &config.output {
        let write_error = |source: std::io::Error| Error::Write {
            path: path.clone(),
            source,
        };
        let file = File::create(path).map_err(write_error)?;
        output::write_coordinates(BufWriter::new(file), &graph, &placement).map_err(|err| match err {
            Error::Io(source) => write_error(source),
            other => other,
        })?;
        info!(path = %path.display(), "wrote coordinates");
    }

    Ok(RunSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        grid,
        stats,
        initial_cost,
        final_cost,
    })
}
