use crate::config::CostWeighting;
use crate::graph::GraphModel;

use super::placement::Placement;

/// Weighted grid-distance cost of a placement.
///
/// Every adjacency entry of a node contributes `distance * weight`. Undirected
/// edges appear in both adjacency lists and are therefore counted twice by
/// [`CostEvaluator::grid_cost`]; only differences between costs matter.
#[derive(Clone, Copy, Debug)]
pub struct CostEvaluator<'g> {
    graph: &'g GraphModel,
    weighting: CostWeighting,
}

impl<'g> CostEvaluator<'g> {
    pub fn new(graph: &'g GraphModel, weighting: CostWeighting) -> Self {
        CostEvaluator { graph, weighting }
    }

    /// Cost of the edges leaving `slot`, 0 for padding slots.
    pub fn node_cost(&self, placement: &Placement, slot: usize) -> f64 {
        if slot >= placement.node_count() {
            return 0.0;
        }

        let origin = placement.point(slot);
        self.graph
            .neighbors(slot)
            .iter()
            .map(|neighbor| {
                let distance = origin.distance(&placement.point(neighbor.index));
                match self.weighting {
                    CostWeighting::Weighted => distance * neighbor.weight as f64,
                    CostWeighting::Unweighted => distance,
                }
            })
            .sum()
    }

    pub fn subset_cost(&self, placement: &Placement, slots: &[usize]) -> f64 {
        slots.iter().map(|&slot| self.node_cost(placement, slot)).sum()
    }

    pub fn grid_cost(&self, placement: &Placement) -> f64 {
        (0..placement.node_count())
            .map(|slot| self.node_cost(placement, slot))
            .sum()
    }
}
