use crate::frontier::{Frontier, Priority};
use crate::pathing_grid::Node;
use crate::solver::GridSolver;

/// Stack based depth-first search. Every unvisited neighbour is pushed again when rediscovered
/// and its predecessor becomes the node that found it last, so the search dives along the most
/// recent branch. The path it finds is usually not the shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

impl GridSolver for DepthFirstSolver {
    fn name(&self) -> &'static str {
        "depth-first"
    }

    fn frontier(&self) -> Frontier {
        Frontier::stack()
    }

    fn priority(&self, _node: &Node, _heuristic: i32) -> Priority {
        Priority::new(0)
    }

    fn relaxes(&self, _new_distance: i32, _old_distance: i32) -> bool {
        true
    }
}
