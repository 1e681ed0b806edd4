use crate::error::Result;
use crate::maze::MazeGenerator;
use crate::pathing_grid::PathingGrid;
use crate::MIN_CHAMBER_SIZE;
use grid_util::point::Point;
use grid_util::rect::Rect;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

/// Splits the grid into chambers with walls that each leave one gap, recursing until the
/// chambers are too small to split.
///
/// Walls go on odd rows or columns and gaps on even ones, and no wall line crosses the start or
/// finish, so every open cell stays reachable from every other.
#[derive(Clone, Copy, Debug)]
pub struct RecursiveDivision {
    /// Smallest chamber extent that may still be split. Values below 3 are treated as 3.
    pub min_chamber_size: usize,
}

impl RecursiveDivision {
    pub fn new(min_chamber_size: usize) -> RecursiveDivision {
        RecursiveDivision { min_chamber_size }
    }
}

impl Default for RecursiveDivision {
    fn default() -> Self {
        Self::new(MIN_CHAMBER_SIZE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Split {
    /// A wall along a row.
    Horizontal,
    /// A wall along a column.
    Vertical,
}

impl RecursiveDivision {
    /// Rows (or columns) where a wall may go inside `chamber`: odd, strictly between the
    /// chamber's edges and clear of both endpoints. Chambers exclude `x2` and `y2`.
    fn candidates(&self, chamber: &Rect, split: Split, endpoints: &[Point; 2]) -> Vec<i32> {
        let min = self.min_chamber_size.max(MIN_CHAMBER_SIZE) as i32;
        let (extent, low, high) = match split {
            Split::Horizontal => (chamber.height(), chamber.y1, chamber.y2),
            Split::Vertical => (chamber.width(), chamber.x1, chamber.x2),
        };
        if extent < min {
            return Vec::new();
        }
        (low + 1..high - 1)
            .filter(|i| i % 2 == 1)
            .filter(|&i| {
                !endpoints.iter().any(|p| match split {
                    Split::Horizontal => p.y == i && (chamber.x1..chamber.x2).contains(&p.x),
                    Split::Vertical => p.x == i && (chamber.y1..chamber.y2).contains(&p.y),
                })
            })
            .collect()
    }

    /// Picks the split for `chamber`, preferring to cut across the longer side.
    fn choose_split<R: Rng + ?Sized>(
        &self,
        chamber: &Rect,
        endpoints: &[Point; 2],
        rng: &mut R,
    ) -> Option<(Split, i32)> {
        let preferred = match chamber.height().cmp(&chamber.width()) {
            std::cmp::Ordering::Greater => Split::Horizontal,
            std::cmp::Ordering::Less => Split::Vertical,
            std::cmp::Ordering::Equal => {
                if rng.gen_bool(0.5) {
                    Split::Horizontal
                } else {
                    Split::Vertical
                }
            }
        };
        let fallback = match preferred {
            Split::Horizontal => Split::Vertical,
            Split::Vertical => Split::Horizontal,
        };
        [preferred, fallback].into_iter().find_map(|split| {
            self.candidates(chamber, split, endpoints)
                .choose(rng)
                .map(|&line| (split, line))
        })
    }
}

/// Wall cells of `span` with one even cell left open.
fn line_with_gap<R: Rng + ?Sized>(span: core::ops::Range<i32>, rng: &mut R) -> Vec<i32> {
    let gaps: Vec<i32> = span.clone().filter(|i| i % 2 == 0).collect();
    let gap = gaps.choose(rng).copied();
    span.filter(|&i| Some(i) != gap).collect()
}

impl MazeGenerator for RecursiveDivision {
    fn generate<R: Rng + ?Sized>(
        &self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        grid.check_placement(&start, &finish)?;
        let endpoints = [start, finish];
        let mut walls = Vec::new();
        let mut chambers = vec![grid.rect()];
        // Popping the first half before the second draws the outermost walls first.
        while let Some(chamber) = chambers.pop() {
            let Some((split, line)) = self.choose_split(&chamber, &endpoints, rng) else {
                continue;
            };
            debug!("recursive division: {:?} wall at {} in {:?}", split, line, chamber);
            let (first, second) = match split {
                Split::Horizontal => {
                    let cells = line_with_gap(chamber.x1..chamber.x2, rng);
                    walls.extend(cells.into_iter().map(|x| Point::new(x, line)));
                    chamber.split_y(line - chamber.y1)
                }
                Split::Vertical => {
                    let cells = line_with_gap(chamber.y1..chamber.y2, rng);
                    walls.extend(cells.into_iter().map(|y| Point::new(line, y)));
                    chamber.split_x(line - chamber.x1)
                }
            };
            chambers.push(second);
            chambers.push(first);
        }
        info!(
            "recursive division: {} walls on {}x{}",
            walls.len(),
            grid.num_rows(),
            grid.num_columns()
        );
        Ok(walls)
    }
}
