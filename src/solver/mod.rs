use crate::error::Result;
use crate::frontier::{Frontier, Priority};
use crate::path::reconstruct_path;
use crate::pathing_grid::{Node, PathingGrid};
use crate::search_context::SearchContext;
use grid_util::point::Point;
use log::{info, warn};

pub mod astar;
pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dijkstra;
pub mod greedy;
pub mod random_walk;

/// Result of a single-source search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Nodes in the order they were finalized, as they looked at that moment. This is the
    /// sequence to replay.
    pub visited_nodes_in_order: Vec<Node>,
    pub found: bool,
    /// The searched copy of the grid with `previous` links populated.
    pub grid: PathingGrid,
    pub start: Point,
    pub finish: Point,
}

impl SearchOutcome {
    /// The start to finish path, or just the finish when it was not reached.
    pub fn reconstruct_path(&self) -> Vec<Node> {
        reconstruct_path(&self.grid, &self.finish)
    }
    pub fn path_points(&self) -> Vec<Point> {
        self.reconstruct_path().iter().map(|n| n.point).collect()
    }
}

/// A single-source search strategy on a uniform-cost grid. Implementors choose the frontier,
/// the ordering key and the relaxation rule; the search loop itself lives in [SearchContext].
pub trait GridSolver {
    fn name(&self) -> &'static str;

    fn frontier(&self) -> Frontier;

    /// Estimated remaining cost from `point` to `target`.
    fn heuristic(&self, _point: &Point, _target: &Point) -> i32 {
        0
    }

    /// Frontier key of a freshly relaxed node; `heuristic` is the node's estimate to the target.
    fn priority(&self, node: &Node, heuristic: i32) -> Priority;

    /// Whether a path of `new_distance` replaces the node's current best.
    fn relaxes(&self, new_distance: i32, old_distance: i32) -> bool {
        new_distance < old_distance
    }

    /// Searches from `start` to `finish` on a reset copy of `grid`. Out-of-bounds, coinciding
    /// or walled endpoints are rejected before any work is done.
    fn run(&self, grid: &PathingGrid, start: Point, finish: Point) -> Result<SearchOutcome> {
        grid.check_endpoints(&start, &finish)?;
        info!("{}: searching from {} to {}", self.name(), start, finish);
        let outcome = SearchContext::new(self, grid, start, finish).run();
        info!(
            "{}: visited {} nodes, finish {}",
            self.name(),
            outcome.visited_nodes_in_order.len(),
            if outcome.found { "reached" } else { "unreachable" }
        );
        if !outcome.found && grid.reachable(&start, &finish) {
            warn!("{}: {} is reachable from {} but was not found", self.name(), finish, start);
        }
        Ok(outcome)
    }

    /// Searches between the grid's own start and finish.
    fn run_designated(&self, grid: &PathingGrid) -> Result<SearchOutcome> {
        self.run(grid, grid.start(), grid.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::astar::AstarSolver;
    use super::bfs::BreadthFirstSolver;
    use super::dfs::DepthFirstSolver;
    use super::dijkstra::DijkstraSolver;
    use super::greedy::GreedyBestFirstSolver;
    use super::*;
    use crate::error::{EndpointIssue, GridError};

    fn check_all(grid: &PathingGrid, f: impl Fn(&str, SearchOutcome)) {
        f("dijkstra", DijkstraSolver.run_designated(grid).unwrap());
        f("astar", AstarSolver::new().run_designated(grid).unwrap());
        f("bfs", BreadthFirstSolver.run_designated(grid).unwrap());
        f("dfs", DepthFirstSolver.run_designated(grid).unwrap());
        f("greedy", GreedyBestFirstSolver.run_designated(grid).unwrap());
    }

    #[test]
    fn rejects_bad_endpoints_before_searching() {
        let grid: PathingGrid = "S.#\n...\n..F".parse().unwrap();
        let solver = DijkstraSolver;
        assert!(matches!(
            solver.run(&grid, Point::new(0, 0), Point::new(5, 5)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            solver.run(&grid, Point::new(-1, 0), Point::new(2, 2)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            solver.run(&grid, Point::new(1, 1), Point::new(1, 1)),
            Err(GridError::InvalidEndpoints {
                issue: EndpointIssue::Coincide,
                ..
            })
        ));
        assert!(matches!(
            solver.run(&grid, Point::new(0, 0), Point::new(2, 0)),
            Err(GridError::InvalidEndpoints {
                issue: EndpointIssue::FinishIsWall,
                ..
            })
        ));
    }

    #[test]
    fn adjacent_endpoints_give_two_node_paths() {
        let grid: PathingGrid = "...\n.SF\n...".parse().unwrap();
        check_all(&grid, |name, outcome| {
            assert!(outcome.found, "{name}");
            assert_eq!(
                outcome.path_points(),
                vec![Point::new(1, 1), Point::new(2, 1)],
                "{name}"
            );
        });
    }

    #[test]
    fn enclosed_finish_is_unreachable() {
        // |S....|
        // |...#.|
        // |..#F#|
        // |...##|
        let grid: PathingGrid = "S....\n...#.\n..#F#\n...##".parse().unwrap();
        check_all(&grid, |name, outcome| {
            assert!(!outcome.found, "{name}");
            let path = outcome.reconstruct_path();
            assert_eq!(path.len(), 1, "{name}");
            assert_eq!(path[0].point, Point::new(3, 2), "{name}");
            // Every open cell but the enclosed finish is explored.
            assert_eq!(outcome.visited_nodes_in_order.len(), 14, "{name}");
            assert!(outcome
                .visited_nodes_in_order
                .iter()
                .all(|n| n.point != outcome.finish && !n.is_wall));
        });
    }

    #[test]
    fn visited_order_starts_at_start_and_ends_at_finish() {
        let grid: PathingGrid = "S..#.\n.#...\n...#F".parse().unwrap();
        check_all(&grid, |name, outcome| {
            assert!(outcome.found, "{name}");
            let first = outcome.visited_nodes_in_order.first().unwrap();
            let last = outcome.visited_nodes_in_order.last().unwrap();
            assert_eq!(first.point, grid.start(), "{name}");
            assert_eq!(last.point, grid.finish(), "{name}");
        });
    }
}
