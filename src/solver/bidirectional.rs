use crate::error::Result;
use crate::path::reconstruct_path;
use crate::pathing_grid::{Node, PathingGrid};
use crate::search_context::SearchContext;
use crate::solver::greedy::GreedyBestFirstSolver;
use crate::solver::GridSolver;
use grid_util::point::Point;
use itertools::interleave;
use log::{debug, info};

/// Result of a bidirectional search.
#[derive(Clone, Debug)]
pub struct BidirectionalOutcome {
    /// Nodes finalized by the side rooted at the start, in order.
    pub visited_nodes_in_order_start: Vec<Node>,
    /// Nodes finalized by the side rooted at the finish, in order.
    pub visited_nodes_in_order_finish: Vec<Node>,
    pub found: bool,
    /// The node at which the two searches met.
    pub meeting_point: Option<Point>,
    /// The stitched start to finish path, present only when `found`.
    pub path: Option<Vec<Node>>,
}

impl BidirectionalOutcome {
    /// Both visited orders merged round by round, start side first, for replaying the two
    /// expansions as one stream.
    pub fn interleaved_visited_order(&self) -> Vec<Node> {
        interleave(
            self.visited_nodes_in_order_start.iter().copied(),
            self.visited_nodes_in_order_finish.iter().copied(),
        )
        .collect()
    }

    pub fn path_points(&self) -> Option<Vec<Point>> {
        self.path
            .as_ref()
            .map(|path| path.iter().map(|n| n.point).collect())
    }
}

/// Runs one search from the start towards the finish and one from the finish towards the start,
/// advancing each by a single finalized node per round until they meet.
#[derive(Clone, Debug, Default)]
pub struct BidirectionalSolver<S = GreedyBestFirstSolver> {
    pub solver: S,
}

impl BidirectionalSolver {
    pub fn new() -> BidirectionalSolver {
        BidirectionalSolver {
            solver: GreedyBestFirstSolver,
        }
    }
}

impl<S: GridSolver> BidirectionalSolver<S> {
    /// Uses `solver` for both sides instead of greedy best-first.
    pub fn with_solver(solver: S) -> BidirectionalSolver<S> {
        BidirectionalSolver { solver }
    }

    pub fn run(
        &self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
    ) -> Result<BidirectionalOutcome> {
        grid.check_endpoints(&start, &finish)?;
        info!(
            "bidirectional {}: searching from {} to {}",
            self.solver.name(),
            start,
            finish
        );
        let mut forward = SearchContext::new(&self.solver, grid, start, finish);
        let mut backward = SearchContext::new(&self.solver, grid, finish, start);
        let mut meeting_point = None;
        loop {
            let forward_step = forward.step();
            if let Some(point) = forward_step {
                if backward.is_visited(&point) {
                    meeting_point = Some(point);
                    break;
                }
            }
            let backward_step = backward.step();
            if let Some(point) = backward_step {
                if forward.is_visited(&point) {
                    meeting_point = Some(point);
                    break;
                }
            }
            if forward_step.is_none() && backward_step.is_none() {
                break;
            }
        }
        let path = meeting_point.map(|meeting| {
            debug!("bidirectional search met at {}", meeting);
            stitch(forward.grid(), backward.grid(), &meeting)
        });
        let outcome = BidirectionalOutcome {
            visited_nodes_in_order_start: forward.visited_nodes_in_order().to_vec(),
            visited_nodes_in_order_finish: backward.visited_nodes_in_order().to_vec(),
            found: meeting_point.is_some(),
            meeting_point,
            path,
        };
        info!(
            "bidirectional {}: visited {} + {} nodes, finish {}",
            self.solver.name(),
            outcome.visited_nodes_in_order_start.len(),
            outcome.visited_nodes_in_order_finish.len(),
            if outcome.found { "reached" } else { "unreachable" }
        );
        Ok(outcome)
    }

    pub fn run_designated(&self, grid: &PathingGrid) -> Result<BidirectionalOutcome> {
        self.run(grid, grid.start(), grid.finish())
    }
}

/// Joins start..meeting from the forward grid with the reversed finish..meeting half from the
/// backward grid. The meeting node appears once.
fn stitch(forward: &PathingGrid, backward: &PathingGrid, meeting: &Point) -> Vec<Node> {
    let mut path = reconstruct_path(forward, meeting);
    let mut tail = reconstruct_path(backward, meeting);
    tail.pop();
    path.extend(tail.into_iter().rev());
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::is_valid_path;
    use crate::solver::bfs::BreadthFirstSolver;

    #[test]
    fn adjacent_endpoints() {
        let grid = PathingGrid::new(1, 2, Point::new(0, 0), Point::new(1, 0)).unwrap();
        let outcome = BidirectionalSolver::new().run_designated(&grid).unwrap();
        assert!(outcome.found);
        assert_eq!(outcome.meeting_point, Some(Point::new(1, 0)));
        assert_eq!(
            outcome.path_points(),
            Some(vec![Point::new(0, 0), Point::new(1, 0)])
        );
    }

    #[test]
    fn meets_in_the_middle_of_a_corridor() {
        let grid = PathingGrid::new(1, 6, Point::new(0, 0), Point::new(5, 0)).unwrap();
        let outcome = BidirectionalSolver::new().run_designated(&grid).unwrap();
        assert!(outcome.found);
        // Rounds: (0,5), (1,4), (2,3) and the start side then pops 3, already seen from the
        // finish.
        assert_eq!(outcome.meeting_point, Some(Point::new(3, 0)));
        assert_eq!(outcome.visited_nodes_in_order_start.len(), 4);
        assert_eq!(outcome.visited_nodes_in_order_finish.len(), 3);
        let path = outcome.path_points().unwrap();
        assert_eq!(path, (0..6).map(|x| Point::new(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn stitched_path_is_valid() {
        let grid: PathingGrid = "S..#....\n.#.#.##.\n.#...#..\n.####.#F".parse().unwrap();
        let outcome = BidirectionalSolver::new().run_designated(&grid).unwrap();
        assert!(outcome.found);
        let path = outcome.path_points().unwrap();
        assert_eq!(path.first(), Some(&grid.start()));
        assert_eq!(path.last(), Some(&grid.finish()));
        assert!(is_valid_path(&grid, &path));

        let shortest = BreadthFirstSolver.run_designated(&grid).unwrap();
        let bfs_sides = BidirectionalSolver::with_solver(BreadthFirstSolver)
            .run_designated(&grid)
            .unwrap();
        let bfs_path = bfs_sides.path_points().unwrap();
        assert!(is_valid_path(&grid, &bfs_path));
        assert!(bfs_path.len() >= shortest.path_points().len());
    }

    #[test]
    fn separated_endpoints() {
        let grid: PathingGrid = "S.#..\n..#..\n..#.F".parse().unwrap();
        let outcome = BidirectionalSolver::new().run_designated(&grid).unwrap();
        assert!(!outcome.found);
        assert!(outcome.path.is_none());
        assert_eq!(outcome.visited_nodes_in_order_start.len(), 6);
        assert_eq!(outcome.visited_nodes_in_order_finish.len(), 6);
        assert_eq!(outcome.interleaved_visited_order().len(), 12);
        assert_eq!(outcome.interleaved_visited_order()[1].point, grid.finish());
    }
}
