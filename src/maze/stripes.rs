use crate::error::Result;
use crate::maze::MazeGenerator;
use crate::pathing_grid::PathingGrid;
use crate::{DEFAULT_GAPS_PER_LINE, DEFAULT_STRIPE_SPACING};
use grid_util::point::Point;
use log::info;
use rand::seq::index;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Lines run top to bottom, one per chosen column.
    Vertical,
    /// Lines run left to right, one per chosen row.
    Horizontal,
}

/// Evenly spaced full-length wall lines, each with a few single-cell gaps.
///
/// Which residue of `spacing` the lines sit on is drawn at random, but the first row or column
/// never becomes a line. Lines are emitted in ascending order, cells along a line likewise.
#[derive(Clone, Copy, Debug)]
pub struct StripeMaze {
    pub orientation: Orientation,
    /// Distance between neighbouring lines. Values below 2 are treated as 2 so that an open
    /// line always separates two walls.
    pub spacing: usize,
    /// Gaps cut into each line. At least one; capped at the line length.
    pub gaps_per_line: usize,
}

impl StripeMaze {
    pub fn new(orientation: Orientation) -> StripeMaze {
        StripeMaze {
            orientation,
            spacing: DEFAULT_STRIPE_SPACING,
            gaps_per_line: DEFAULT_GAPS_PER_LINE,
        }
    }

    pub fn vertical() -> StripeMaze {
        Self::new(Orientation::Vertical)
    }

    pub fn horizontal() -> StripeMaze {
        Self::new(Orientation::Horizontal)
    }
}

impl MazeGenerator for StripeMaze {
    fn generate<R: Rng + ?Sized>(
        &self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        grid.check_placement(&start, &finish)?;
        let spacing = self.spacing.max(2);
        let (line_count, line_length) = match self.orientation {
            Orientation::Vertical => (grid.num_columns(), grid.num_rows()),
            Orientation::Horizontal => (grid.num_rows(), grid.num_columns()),
        };
        let offset = rng.gen_range(0..spacing);
        let gaps_per_line = self.gaps_per_line.clamp(1, line_length);
        let mut walls = Vec::new();
        for line in (1..line_count).filter(|i| i % spacing == offset) {
            let gaps = index::sample(rng, line_length, gaps_per_line).into_vec();
            walls.extend(
                (0..line_length)
                    .filter(|j| !gaps.contains(j))
                    .map(|j| match self.orientation {
                        Orientation::Vertical => Point::new(line as i32, j as i32),
                        Orientation::Horizontal => Point::new(j as i32, line as i32),
                    })
                    .filter(|p| *p != start && *p != finish),
            );
        }
        info!(
            "{:?} stripes: {} walls on {}x{}",
            self.orientation,
            walls.len(),
            grid.num_rows(),
            grid.num_columns()
        );
        Ok(walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn vertical_lines_leave_one_gap() {
        let grid = PathingGrid::new(5, 9, Point::new(0, 0), Point::new(8, 4)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            let walls = StripeMaze::vertical()
                .generate_designated(&grid, &mut rng)
                .unwrap();
            let columns: Vec<(i32, usize)> = walls
                .iter()
                .map(|p| p.x)
                .dedup_with_count()
                .map(|(count, x)| (x, count))
                .collect();
            assert!(!columns.is_empty());
            let parity = columns[0].0 % 2;
            for (x, count) in columns {
                assert_ne!(x, 0);
                assert_eq!(x % 2, parity);
                let expected = if x == 8 { 3 } else { 4 };
                assert!(count == expected || count == expected + 1, "{x}: {count}");
                if x != 8 {
                    assert_eq!(count, 4);
                }
            }
            assert!(grid
                .with_walls(&walls)
                .reachable(&grid.start(), &grid.finish()));
        }
    }

    #[test]
    fn horizontal_lines_with_more_gaps() {
        let grid = PathingGrid::new(12, 10, Point::new(0, 0), Point::new(9, 11)).unwrap();
        let maze = StripeMaze {
            orientation: Orientation::Horizontal,
            spacing: 3,
            gaps_per_line: 4,
        };
        let mut rng = StdRng::seed_from_u64(8);
        let walls = maze.generate_designated(&grid, &mut rng).unwrap();
        let rows: Vec<i32> = walls.iter().map(|p| p.y).dedup().collect();
        assert!(rows.len() >= 3);
        assert!(rows.iter().all(|&y| y != 0 && y % 3 == rows[0] % 3));
        for y in rows {
            let count = walls.iter().filter(|p| p.y == y).count();
            let expected = if y == 11 { 5..=6 } else { 6..=6 };
            assert!(expected.contains(&count), "row {y}: {count}");
        }
    }

    #[test]
    fn spacing_and_gaps_are_clamped() {
        let grid = PathingGrid::new(3, 6, Point::new(0, 0), Point::new(5, 2)).unwrap();
        let maze = StripeMaze {
            orientation: Orientation::Vertical,
            spacing: 0,
            gaps_per_line: 100,
        };
        let mut rng = StdRng::seed_from_u64(0);
        // Every line is entirely gap.
        assert!(maze.generate_designated(&grid, &mut rng).unwrap().is_empty());
        let maze = StripeMaze {
            gaps_per_line: 0,
            ..maze
        };
        let walls = maze.generate_designated(&grid, &mut rng).unwrap();
        let columns: Vec<i32> = walls.iter().map(|p| p.x).dedup().collect();
        assert!(columns == vec![1, 3, 5] || columns == vec![2, 4]);
    }
}
