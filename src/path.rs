use crate::pathing_grid::{Node, PathingGrid};
use crate::FxIndexSet;
use grid_util::point::Point;
use itertools::Itertools;

/// Follows the `previous` links from `finish` back to the node without a predecessor and returns
/// the nodes in start to finish order.
///
/// If `finish` was never visited the search did not connect it, and the result is the finish
/// alone. An out-of-bounds `finish` gives an empty path. Reconstruction only reads the grid, so
/// repeating it yields the same sequence.
pub fn reconstruct_path(grid: &PathingGrid, finish: &Point) -> Vec<Node> {
    let Some(finish_node) = grid.node(finish) else {
        return Vec::new();
    };
    if !finish_node.is_visited {
        return vec![*finish_node];
    }
    let mut path: Vec<Node> = std::iter::successors(Some(finish_node), |node| {
        node.previous.and_then(|previous| grid.node(&previous))
    })
    .copied()
    .collect();
    path.reverse();
    path
}

/// Checks that a path visits no point twice, only steps between orthogonal neighbours and never
/// crosses a wall or leaves the grid.
pub fn is_valid_path(grid: &PathingGrid, path: &[Point]) -> bool {
    let mut seen = FxIndexSet::default();
    path.iter().all(|p| grid.can_move_to(p) && seen.insert(*p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
}
