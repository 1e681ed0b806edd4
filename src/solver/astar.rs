use crate::frontier::{Frontier, Priority};
use crate::pathing_grid::Node;
use crate::solver::GridSolver;
use crate::C;
use grid_util::point::Point;

/// A* with the Manhattan distance as heuristic. Frontier ties on `total_distance` go to the node
/// with the smaller `distance`.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 make it inadmissible, trading path optimality for
    /// fewer expansions.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn frontier(&self) -> Frontier {
        Frontier::priority()
    }

    /// The Manhattan distance times the heuristic factor.
    fn heuristic(&self, point: &Point, target: &Point) -> i32 {
        ((point.manhattan_distance(target) * C) as f32 * self.heuristic_factor) as i32
    }

    fn priority(&self, node: &Node, _heuristic: i32) -> Priority {
        Priority::with_tie(node.total_distance, node.distance)
    }
}
