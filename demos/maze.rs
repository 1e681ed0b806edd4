use grid_search_maze::maze::MazeKind;
use grid_search_maze::pathing_grid::PathingGrid;
use grid_search_maze::solver::{
    astar::AstarSolver, bfs::BreadthFirstSolver, dfs::DepthFirstSolver, dijkstra::DijkstraSolver,
    greedy::GreedyBestFirstSolver, GridSolver,
};
use grid_search_maze::Point;
use rand::{rngs::StdRng, SeedableRng};

// Generates every kind of maze on a 15x31 grid and compares how many cells each strategy
// visits before reaching the finish.

fn main() {
    let grid = PathingGrid::new(15, 31, Point::new(0, 7), Point::new(30, 7)).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let solvers: [&dyn GridSolver; 5] = [
        &DijkstraSolver,
        &BreadthFirstSolver,
        &DepthFirstSolver,
        &GreedyBestFirstSolver,
        &AstarSolver {
            heuristic_factor: 1.0,
        },
    ];
    for kind in MazeKind::ALL {
        let walls = kind.generate_designated(&grid, &mut rng).unwrap();
        let maze = grid.with_walls(&walls);
        println!("{} ({} walls)", kind, walls.len());
        println!("{}", maze);
        for solver in solvers {
            let outcome = solver.run_designated(&maze).unwrap();
            if outcome.found {
                println!(
                    "  {:<18} visited {:>3}, path {:>3}",
                    solver.name(),
                    outcome.visited_nodes_in_order.len(),
                    outcome.reconstruct_path().len()
                );
            } else {
                println!(
                    "  {:<18} visited {:>3}, finish unreachable",
                    solver.name(),
                    outcome.visited_nodes_in_order.len()
                );
            }
        }
        println!();
    }
}
