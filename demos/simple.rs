use grid_search_maze::pathing_grid::PathingGrid;
use grid_search_maze::solver::{astar::AstarSolver, GridSolver};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  F|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - F marks the finish
//
// Nodes have a 4-neighborhood

fn main() {
    let pathing_grid: PathingGrid = "S..\n.#.\n..F".parse().unwrap();
    println!("{}", pathing_grid);
    let outcome = AstarSolver::new().run_designated(&pathing_grid).unwrap();
    println!("Visited:");
    for node in &outcome.visited_nodes_in_order {
        println!("{} (distance {})", node.point, node.distance);
    }
    println!("Path:");
    for p in outcome.path_points() {
        println!("{:?}", p);
    }
}
