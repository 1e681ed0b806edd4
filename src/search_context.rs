use crate::frontier::Frontier;
use crate::pathing_grid::{Node, PathingGrid};
use crate::solver::{GridSolver, SearchOutcome};
use crate::C;
use grid_util::point::Point;

/// State of one search from `root` towards `target` on a private copy of the grid. Can be
/// advanced one finalized node at a time, which lets two searches be interleaved.
pub struct SearchContext<'a, S: GridSolver + ?Sized> {
    solver: &'a S,
    grid: PathingGrid,
    frontier: Frontier,
    root: Point,
    target: Point,
    visited_nodes_in_order: Vec<Node>,
    reached: bool,
}

impl<'a, S: GridSolver + ?Sized> SearchContext<'a, S> {
    /// Takes a reset copy of `grid` and seeds the frontier with `root`. The endpoints are
    /// expected to have been checked already.
    pub fn new(solver: &'a S, grid: &PathingGrid, root: Point, target: Point) -> Self {
        let mut grid = grid.reset_for_path();
        let mut frontier = solver.frontier();
        let heuristic = solver.heuristic(&root, &target);
        if let Some(node) = grid.node_mut(&root) {
            node.distance = 0;
            node.total_distance = heuristic;
            frontier.push(root, solver.priority(node, heuristic));
        }
        SearchContext {
            solver,
            grid,
            frontier,
            root,
            target,
            visited_nodes_in_order: Vec::new(),
            reached: false,
        }
    }

    pub fn root(&self) -> Point {
        self.root
    }
    pub fn target(&self) -> Point {
        self.target
    }
    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }
    pub fn visited_nodes_in_order(&self) -> &[Node] {
        &self.visited_nodes_in_order
    }
    /// Whether the target has been finalized.
    pub fn reached(&self) -> bool {
        self.reached
    }
    pub fn is_visited(&self, point: &Point) -> bool {
        self.grid.node(point).is_some_and(|node| node.is_visited)
    }

    /// Pops frontier entries until one node gets finalized and returns it. Stale entries, walls
    /// and already visited nodes are skipped. Returns [None] once the frontier is exhausted.
    pub fn step(&mut self) -> Option<Point> {
        while let Some(point) = self.frontier.pop() {
            let Some(node) = self.grid.node_mut(&point) else {
                continue;
            };
            if node.is_visited || node.is_wall {
                continue;
            }
            node.is_visited = true;
            let distance = node.distance;
            self.visited_nodes_in_order.push(*node);
            if point == self.target {
                self.reached = true;
            } else {
                self.relax_neighbours(point, distance);
            }
            return Some(point);
        }
        None
    }

    fn relax_neighbours(&mut self, point: Point, distance: i32) {
        let new_distance = distance + C;
        for neighbour in self.grid.neighbours(&point) {
            let heuristic = self.solver.heuristic(&neighbour, &self.target);
            let Some(node) = self.grid.node_mut(&neighbour) else {
                continue;
            };
            if node.is_wall || node.is_visited || !self.solver.relaxes(new_distance, node.distance)
            {
                continue;
            }
            node.distance = new_distance;
            node.total_distance = new_distance.saturating_add(heuristic);
            node.previous = Some(point);
            self.frontier.push(neighbour, self.solver.priority(node, heuristic));
        }
    }

    /// Steps until the target is finalized or the frontier runs dry.
    pub fn run(mut self) -> SearchOutcome {
        while !self.reached && self.step().is_some() {}
        self.into_outcome()
    }

    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            visited_nodes_in_order: self.visited_nodes_in_order,
            found: self.reached,
            grid: self.grid,
            start: self.root,
            finish: self.target,
        }
    }
}
