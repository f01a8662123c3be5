use rand::Rng;
use tracing::{debug, info};

use crate::config::{CostMode, OptimizerConfig};
use crate::error::{Error, Result};
use crate::graph::GraphModel;

use super::cost::CostEvaluator;
use super::placement::{Placement, Rotation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    Initialized,
    Iterating,
    Terminated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub iterations: u64,
    pub accepted: u64,
    pub consecutive_failures: u64,
}

impl SearchStats {
    pub fn success_ratio(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.iterations as f64
    }
}

/// Draws windows of distinct slots by partially shuffling a persistent index array.
#[derive(Clone, Debug)]
pub struct WindowSampler {
    slots: Vec<usize>,
}

impl WindowSampler {
    pub fn new(slot_count: usize) -> Self {
        WindowSampler {
            slots: (0..slot_count).collect(),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns `size` distinct slots, `size` must not exceed the slot count.
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R, size: usize) -> &[usize] {
        let len = self.slots.len();
        debug_assert!(size <= len);
        for i in 0..size {
            let j = rng.gen_range(i..len);
            self.slots.swap(i, j);
        }
        &self.slots[..size]
    }
}

/// Rotates the window, keeps the move on strict improvement and reverts it otherwise.
fn trial(evaluator: &CostEvaluator<'_>, placement: &mut Placement, mode: CostMode, window: &[usize]) -> bool {
    let measure = |placement: &Placement| match mode {
        CostMode::Local => evaluator.subset_cost(placement, window),
        CostMode::Global => evaluator.grid_cost(placement),
    };

    let pre = measure(&*placement);
    placement.rotate(window, Rotation::Left);
    let post = measure(&*placement);

    if post < pre {
        true
    } else {
        placement.rotate(window, Rotation::Left.inverse());
        false
    }
}

/// Stochastic local search over the placement permutation.
///
/// Each iteration rotates the cells of a random window of slots and keeps the
/// rotation only if it lowers the measured cost. The search terminates after
/// `end_condition` consecutive rejections.
pub struct LocalSearch<'g, R> {
    evaluator: CostEvaluator<'g>,
    placement: Placement,
    sampler: WindowSampler,
    rng: R,
    config: OptimizerConfig,
    state: SearchState,
    stats: SearchStats,
}

impl<'g, R: Rng> LocalSearch<'g, R> {
    pub fn new(graph: &'g GraphModel, placement: Placement, config: OptimizerConfig, rng: R) -> Result<Self> {
        config.validate()?;
        if placement.node_count() != graph.node_count() {
            return Err(Error::NodeCountMismatch {
                placement: placement.node_count(),
                graph: graph.node_count(),
            });
        }

        Ok(LocalSearch {
            evaluator: CostEvaluator::new(graph, config.weighting),
            sampler: WindowSampler::new(placement.slot_count()),
            placement,
            rng,
            config,
            state: SearchState::Initialized,
            stats: SearchStats::default(),
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn into_placement(self) -> Placement {
        self.placement
    }

    pub fn grid_cost(&self) -> f64 {
        self.evaluator.grid_cost(&self.placement)
    }

    /// Largest window, bounded by the node count even when padding slots exist.
    fn max_window(&self) -> usize {
        self.config.max_swap.min(self.placement.node_count())
    }

    fn should_stop(&self) -> bool {
        self.stats.consecutive_failures >= self.config.end_condition || self.max_window() < 2
    }

    /// Runs one trial on an explicit window and updates the counters.
    pub fn try_window(&mut self, window: &[usize]) -> bool {
        let accepted = trial(&self.evaluator, &mut self.placement, self.config.cost_mode, window);
        self.record(accepted);
        accepted
    }

    fn record(&mut self, accepted: bool) {
        self.stats.iterations += 1;
        if accepted {
            self.stats.accepted += 1;
            self.stats.consecutive_failures = 0;
        } else {
            self.stats.consecutive_failures += 1;
        }
    }

    /// Performs one iteration, returns `None` once the search has terminated.
    pub fn step(&mut self) -> Option<bool> {
        if self.state == SearchState::Terminated {
            return None;
        }
        if self.should_stop() {
            self.state = SearchState::Terminated;
            return None;
        }
        self.state = SearchState::Iterating;

        let max_window = self.max_window();
        let size = self.rng.gen_range(2..=max_window);
        let window = self.sampler.sample(&mut self.rng, size);
        let accepted = trial(&self.evaluator, &mut self.placement, self.config.cost_mode, window);
        self.record(accepted);

        if self.config.progress_interval > 0 && self.stats.iterations % self.config.progress_interval == 0 {
            info!(
                iteration = self.stats.iterations,
                cost = self.grid_cost(),
                success_ratio = self.stats.success_ratio(),
                "optimizing"
            );
        }
        Some(accepted)
    }

    /// Iterates until the stagnation threshold is reached.
    #[tracing::instrument(skip_all)]
    pub fn run(&mut self) -> SearchStats {
        debug!(
            slots = self.placement.slot_count(),
            max_window = self.max_window(),
            end_condition = self.config.end_condition,
            mode = ?self.config.cost_mode,
            "starting local search"
        );
        while self.step().is_some() {}

        info!(
            iterations = self.stats.iterations,
            accepted = self.stats.accepted,
            cost = self.grid_cost(),
            "local search finished"
        );
        self.stats
    }
}
