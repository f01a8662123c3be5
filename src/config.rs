use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::layout::Grid;

/// How the optimizer measures the effect of a trial move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CostMode {
    /// Only the nodes inside the rotation window are re-evaluated.
    #[default]
    Local,
    /// The whole grid is re-evaluated before and after every move.
    Global,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CostWeighting {
    /// Distance multiplied by the edge weight.
    #[default]
    Weighted,
    /// Plain distance, edge weights are ignored.
    Unweighted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Directedness {
    /// Every edge line also adds the reverse adjacency entry.
    #[default]
    Undirected,
    Directed,
}

#[derive(Clone, PartialEq, Debug)]
pub struct OptimizerConfig {
    pub cost_mode: CostMode,
    pub weighting: CostWeighting,
    /// Number of consecutive rejected trials after which the search stops.
    pub end_condition: u64,
    /// Largest number of slots rotated in a single trial.
    pub max_swap: usize,
    /// Iterations between two progress events, 0 disables them.
    pub progress_interval: u64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            cost_mode: CostMode::Local,
            weighting: CostWeighting::Weighted,
            end_condition: 1_000_000,
            max_swap: 2,
            progress_interval: 100_000,
        }
    }
}

impl OptimizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_swap < 2 {
            return Err(Error::InvalidWindow(self.max_swap));
        }
        Ok(())
    }
}

/// Requested grid size; missing sides are derived from the node count.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GridDimensions {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl GridDimensions {
    pub fn new(width: Option<usize>, height: Option<usize>) -> Self {
        GridDimensions { width, height }
    }

    pub fn resolve(&self, node_count: usize) -> Result<Grid> {
        if self.width == Some(0) || self.height == Some(0) {
            return Err(Error::InvalidDimensions {
                width: self.width.unwrap_or(0),
                height: self.height.unwrap_or(0),
            });
        }

        let (width, height) = match (self.width, self.height) {
            (Some(width), Some(height)) => (width, height),
            (Some(width), None) => (width, node_count.div_ceil(width).max(1)),
            (None, Some(height)) => (node_count.div_ceil(height).max(1), height),
            (None, None) => {
                let side = square_side(node_count);
                (side, side)
            }
        };

        let grid = Grid::new(width, height)?;
        if grid.size() < node_count {
            return Err(Error::GridTooSmall {
                width,
                height,
                nodes: node_count,
            });
        }
        Ok(grid)
    }
}

/// Smallest side whose square holds `node_count` cells, never below 1.
fn square_side(node_count: usize) -> usize {
    let mut side = (node_count as f64).sqrt() as usize;
    while side * side < node_count {
        side += 1;
    }
    while side > 1 && (side - 1) * (side - 1) >= node_count {
        side -= 1;
    }
    side.max(1)
}

#[derive(Clone, PartialEq, Debug)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub directedness: Directedness,
    pub dimensions: GridDimensions,
    pub optimizer: OptimizerConfig,
    /// Seed for the trial generator, taken from OS entropy when absent.
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        RunConfig {
            input: input.into(),
            output: None,
            directedness: Directedness::default(),
            dimensions: GridDimensions::default(),
            optimizer: OptimizerConfig::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_grid_is_the_smallest_that_fits() {
        let grid = GridDimensions::default().resolve(10).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 4));

        let grid = GridDimensions::default().resolve(9).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));

        let grid = GridDimensions::default().resolve(0).unwrap();
        assert_eq!((grid.width(), grid.height()), (1, 1));
    }

    #[test]
    fn missing_side_is_computed_from_the_other() {
        let grid = GridDimensions::new(Some(4), None).resolve(10).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));

        let grid = GridDimensions::new(None, Some(2)).resolve(5).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
    }

    #[test]
    fn explicit_grid_must_hold_every_node() {
        let err = GridDimensions::new(Some(2), Some(2)).resolve(5).unwrap_err();
        assert!(matches!(err, Error::GridTooSmall { nodes: 5, .. }));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let err = GridDimensions::new(Some(0), None).resolve(3).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));

        let err = GridDimensions::new(None, Some(0)).resolve(3).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 0, height: 0 }));
    }

    #[test]
    fn huge_sides_are_too_large() {
        let err = GridDimensions::new(Some(usize::MAX), None).resolve(3).unwrap_err();
        assert!(matches!(err, Error::GridTooLarge { .. }));

        let err = GridDimensions::new(None, Some(usize::MAX)).resolve(3).unwrap_err();
        assert!(matches!(err, Error::GridTooLarge { .. }));
    }

    #[test]
    fn window_must_hold_two_slots() {
        let config = OptimizerConfig {
            max_swap: 1,
            ..OptimizerConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidWindow(1))));
        assert!(OptimizerConfig::default().validate().is_ok());
    }
}
