use crate::frontier::{Frontier, Priority};
use crate::pathing_grid::Node;
use crate::solver::GridSolver;

/// Breadth-first search. On a uniform-cost grid the FIFO order is distance order, so its paths
/// are shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl GridSolver for BreadthFirstSolver {
    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn frontier(&self) -> Frontier {
        Frontier::queue()
    }

    fn priority(&self, _node: &Node, _heuristic: i32) -> Priority {
        Priority::new(0)
    }
}
