use grid_search_maze::pathing_grid::PathingGrid;
use grid_search_maze::solver::bfs::BreadthFirstSolver;
use grid_search_maze::solver::bidirectional::BidirectionalSolver;

// Runs bidirectional search with greedy and breadth-first sides on the same grid and prints the
// interleaved replay order followed by the stitched path.
//  _________
// |S...#....|
// |.##.#.##.|
// |.#..#..#.|
// |.#.###.#.|
// |...#...#F|
//  _________

fn main() {
    let grid: PathingGrid = "S...#....\n.##.#.##.\n.#..#..#.\n.#.###.#.\n...#...#F"
        .parse()
        .unwrap();
    println!("{}", grid);

    let greedy = BidirectionalSolver::new().run_designated(&grid).unwrap();
    let bfs = BidirectionalSolver::with_solver(BreadthFirstSolver)
        .run_designated(&grid)
        .unwrap();
    for (name, outcome) in [("greedy", greedy), ("breadth-first", bfs)] {
        println!("{name}:");
        let replay: Vec<String> = outcome
            .interleaved_visited_order()
            .iter()
            .map(|n| n.point.to_string())
            .collect();
        println!("  replay {}", replay.join(" "));
        match (outcome.meeting_point, outcome.path_points()) {
            (Some(meeting), Some(path)) => {
                println!("  met at {meeting}, path of {} nodes", path.len());
                for p in path {
                    println!("    {:?}", p);
                }
            }
            _ => println!("  the two searches never met"),
        }
    }
}
