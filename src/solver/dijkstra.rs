use crate::frontier::{Frontier, Priority};
use crate::pathing_grid::Node;
use crate::solver::GridSolver;

/// Expands nodes in order of distance from the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn frontier(&self) -> Frontier {
        Frontier::priority()
    }

    fn priority(&self, node: &Node, _heuristic: i32) -> Priority {
        Priority::new(node.distance)
    }
}
