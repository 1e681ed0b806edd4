use criterion::{criterion_group, criterion_main, Criterion};
use grid_search_maze::{
    maze::{MazeGenerator, MazeKind, RandomMaze},
    pathing_grid::PathingGrid,
    solver::{
        astar::AstarSolver, bfs::BreadthFirstSolver, bidirectional::BidirectionalSolver,
        dfs::DepthFirstSolver, dijkstra::DijkstraSolver, greedy::GreedyBestFirstSolver,
        random_walk::RandomWalk, GridSolver,
    },
    Point,
};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;

/// Random-fill grids with the endpoints in opposite corners, keeping only those where the finish
/// is reachable so every strategy does a full search.
fn scenario_grids(count: usize) -> Vec<PathingGrid> {
    let mut rng = StdRng::seed_from_u64(0);
    let open = PathingGrid::new(N, N, Point::new(0, 0), Point::new(N as i32 - 1, N as i32 - 1))
        .unwrap();
    let mut grids = Vec::new();
    while grids.len() < count {
        let walls = RandomMaze::new(0.25)
            .generate_designated(&open, &mut rng)
            .unwrap();
        let grid = open.with_walls(&walls);
        if grid.reachable(&grid.start(), &grid.finish()) {
            grids.push(grid);
        }
    }
    grids
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, grids: &[PathingGrid], solver: S) {
    c.bench_function(format!("random {N}x{N}, {}", solver.name()).as_str(), |b| {
        b.iter(|| {
            for grid in grids {
                black_box(solver.run_designated(grid).ok());
            }
        })
    });
}

fn solver_bench(c: &mut Criterion) {
    let grids = scenario_grids(16);
    bench_solver(c, &grids, DijkstraSolver);
    bench_solver(c, &grids, AstarSolver::new());
    bench_solver(c, &grids, BreadthFirstSolver);
    bench_solver(c, &grids, DepthFirstSolver);
    bench_solver(c, &grids, GreedyBestFirstSolver);

    let bidirectional = BidirectionalSolver::new();
    c.bench_function(format!("random {N}x{N}, bidirectional").as_str(), |b| {
        b.iter(|| {
            for grid in &grids {
                black_box(bidirectional.run_designated(grid).ok());
            }
        })
    });
    let walk = RandomWalk::with_seed(0);
    c.bench_function(format!("random {N}x{N}, random walk").as_str(), |b| {
        b.iter(|| {
            for grid in &grids {
                black_box(walk.run_designated(grid).ok());
            }
        })
    });
}

fn maze_bench(c: &mut Criterion) {
    let grid = PathingGrid::new(N, N, Point::new(0, 0), Point::new(N as i32 - 1, N as i32 - 1))
        .unwrap();
    for kind in MazeKind::ALL {
        let mut rng = StdRng::seed_from_u64(0);
        c.bench_function(format!("{N}x{N} maze, {kind}").as_str(), |b| {
            b.iter(|| black_box(kind.generate_designated(&grid, &mut rng).ok()))
        });
    }
}

criterion_group!(benches, solver_bench, maze_bench);
criterion_main!(benches);
