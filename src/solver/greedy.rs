use crate::frontier::{Frontier, Priority};
use crate::pathing_grid::Node;
use crate::solver::GridSolver;
use crate::C;
use grid_util::point::Point;

/// Greedy best-first search: always expands the node that looks closest to the target and
/// ignores the cost already paid.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBestFirstSolver;

impl GridSolver for GreedyBestFirstSolver {
    fn name(&self) -> &'static str {
        "greedy best-first"
    }

    fn frontier(&self) -> Frontier {
        Frontier::priority()
    }

    fn heuristic(&self, point: &Point, target: &Point) -> i32 {
        point.manhattan_distance(target) * C
    }

    fn priority(&self, _node: &Node, heuristic: i32) -> Priority {
        Priority::new(heuristic)
    }
}
