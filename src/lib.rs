//! # grid_search_maze
//!
//! Replayable search and maze generation on a uniform-cost 4-connected grid. Every search
//! strategy returns the exact order in which it finalized cells together with a post-search grid
//! from which the path is reconstructed, and every maze generator returns its walls in drawing
//! order. Nothing here renders or schedules; callers replay the returned sequences themselves.
//!
//! Coordinates are [grid_util::point::Point]s where `x` is the column and `y` is the row.
//!
//! Strategies:
//! - [Dijkstra](solver::dijkstra::DijkstraSolver), [A*](solver::astar::AstarSolver) and
//!   [breadth-first search](solver::bfs::BreadthFirstSolver), which find shortest paths;
//! - [depth-first search](solver::dfs::DepthFirstSolver) and
//!   [greedy best-first search](solver::greedy::GreedyBestFirstSolver), which find a path;
//! - [bidirectional search](solver::bidirectional::BidirectionalSolver) growing two frontiers;
//! - a [random walk](solver::random_walk::RandomWalk) for unguided exploration.
//!
//! Maze generators live in [maze].
pub mod error;
pub mod frontier;
pub mod maze;
pub mod path;
pub mod pathing_grid;
pub mod search_context;
pub mod solver;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;

pub use error::{EndpointIssue, GridError, Result};
pub use grid_util::point::Point;
pub use path::{is_valid_path, reconstruct_path};
pub use pathing_grid::{Node, PathingGrid};
pub use solver::{GridSolver, SearchOutcome};

pub(crate) type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Distance of a node no search has reached. Strictly worse than any finite distance.
pub const INFINITY: i32 = i32::MAX;
/// Cost of a single orthogonal step.
pub const C: i32 = 1;

/// Probability that the random maze turns a cell into a wall.
pub const DEFAULT_WALL_DENSITY: f64 = 0.3;
/// Distance between neighbouring stripe lines.
pub const DEFAULT_STRIPE_SPACING: usize = 2;
/// Number of openings cut into every stripe line.
pub const DEFAULT_GAPS_PER_LINE: usize = 1;
/// Chambers smaller than this in both directions are not divided further.
pub const MIN_CHAMBER_SIZE: usize = 3;
