use crate::error::Result;
use crate::maze::MazeGenerator;
use crate::pathing_grid::PathingGrid;
use crate::DEFAULT_WALL_DENSITY;
use grid_util::point::Point;
use log::info;
use rand::Rng;

/// Walls every cell independently with probability `density`, scanning rows top to bottom.
///
/// The result is not repaired for connectivity: the finish can end up sealed off from the start.
#[derive(Clone, Copy, Debug)]
pub struct RandomMaze {
    /// Clamped to [0, 1]; NaN counts as 0.
    pub density: f64,
}

impl RandomMaze {
    pub fn new(density: f64) -> RandomMaze {
        RandomMaze { density }
    }

    fn probability(&self) -> f64 {
        if self.density.is_nan() {
            0.0
        } else {
            self.density.clamp(0.0, 1.0)
        }
    }
}

impl Default for RandomMaze {
    fn default() -> Self {
        Self::new(DEFAULT_WALL_DENSITY)
    }
}

impl MazeGenerator for RandomMaze {
    fn generate<R: Rng + ?Sized>(
        &self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        grid.check_placement(&start, &finish)?;
        let p = self.probability();
        let walls: Vec<Point> = grid
            .points()
            .filter(|point| *point != start && *point != finish)
            .filter(|_| rng.gen_bool(p))
            .collect();
        info!(
            "random maze: {} walls at density {} on {}x{}",
            walls.len(),
            p,
            grid.num_rows(),
            grid.num_columns()
        );
        Ok(walls)
    }
}
