use crate::error::Result;
use crate::pathing_grid::PathingGrid;
use crate::solver::SearchOutcome;
use crate::{FxIndexSet, C};
use grid_util::point::Point;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

/// Unguided exploration: a walk that never revisits a node. Runs are replayable through the seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomWalk {
    pub seed: u64,
}

impl RandomWalk {
    pub fn with_seed(seed: u64) -> RandomWalk {
        RandomWalk { seed }
    }

    pub fn run(&self, grid: &PathingGrid, start: Point, finish: Point) -> Result<SearchOutcome> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        random_walk(grid, start, finish, &mut rng)
    }

    pub fn run_designated(&self, grid: &PathingGrid) -> Result<SearchOutcome> {
        self.run(grid, grid.start(), grid.finish())
    }
}

/// Walks from `start`, each step moving to a uniformly chosen open neighbour that has not been
/// visited yet. Stops on reaching `finish` or when the current node has no such neighbour, in
/// which case `found` is false and the visited order ends at the dead end.
///
/// Each visited node records the node it was entered from, so reconstructing the path from the
/// returned grid replays the walk itself.
pub fn random_walk<R: Rng + ?Sized>(
    grid: &PathingGrid,
    start: Point,
    finish: Point,
    rng: &mut R,
) -> Result<SearchOutcome> {
    grid.check_endpoints(&start, &finish)?;
    info!("random walk: starting at {} towards {}", start, finish);
    let mut grid = grid.reset_for_path();
    let mut visited = FxIndexSet::default();
    let mut visited_nodes_in_order = Vec::new();
    let mut current = start;
    let mut previous = None;
    let mut distance = 0;
    let found = loop {
        visited.insert(current);
        if let Some(node) = grid.node_mut(&current) {
            node.is_visited = true;
            node.distance = distance;
            node.total_distance = distance;
            node.previous = previous;
            visited_nodes_in_order.push(*node);
        }
        if current == finish {
            break true;
        }
        let options: SmallVec<[Point; 4]> = grid
            .neighbours(&current)
            .into_iter()
            .filter(|p| !grid.is_wall(p) && !visited.contains(p))
            .collect();
        let Some(&next) = options.choose(rng) else {
            break false;
        };
        previous = Some(current);
        current = next;
        distance += C;
    };
    info!(
        "random walk: visited {} nodes, finish {}",
        visited_nodes_in_order.len(),
        if found { "reached" } else { "not reached" }
    );
    Ok(SearchOutcome {
        visited_nodes_in_order,
        found,
        grid,
        start,
        finish,
    })
}
