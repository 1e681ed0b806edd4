//! Wall layout generators. Each returns the wall points in the order they should be drawn and
//! never emits the start, the finish or a point outside the grid. Apply the result with
//! [PathingGrid::with_walls].

use crate::error::{GridError, Result};
use crate::pathing_grid::PathingGrid;
use grid_util::point::Point;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

pub mod random;
pub mod recursive_division;
pub mod stripes;

pub use random::RandomMaze;
pub use recursive_division::RecursiveDivision;
pub use stripes::{Orientation, StripeMaze};

pub trait MazeGenerator {
    /// Wall points for `grid` given where the start and finish will be. Only the grid's
    /// dimensions are read; existing walls are ignored.
    fn generate<R: Rng + ?Sized>(
        &self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
        rng: &mut R,
    ) -> Result<Vec<Point>>;

    fn generate_designated<R: Rng + ?Sized>(
        &self,
        grid: &PathingGrid,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        self.generate(grid, grid.start(), grid.finish(), rng)
    }
}

/// Selects one of the generators with its default settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MazeKind {
    Random,
    RecursiveDivision,
    Vertical,
    Horizontal,
}

impl MazeKind {
    pub const ALL: [MazeKind; 4] = [
        MazeKind::Random,
        MazeKind::RecursiveDivision,
        MazeKind::Vertical,
        MazeKind::Horizontal,
    ];

    pub fn generate<R: Rng + ?Sized>(
        self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        match self {
            MazeKind::Random => RandomMaze::default().generate(grid, start, finish, rng),
            MazeKind::RecursiveDivision => {
                RecursiveDivision::default().generate(grid, start, finish, rng)
            }
            MazeKind::Vertical => StripeMaze::vertical().generate(grid, start, finish, rng),
            MazeKind::Horizontal => StripeMaze::horizontal().generate(grid, start, finish, rng),
        }
    }

    pub fn generate_designated<R: Rng + ?Sized>(
        self,
        grid: &PathingGrid,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        self.generate(grid, grid.start(), grid.finish(), rng)
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MazeKind::Random => "random",
            MazeKind::RecursiveDivision => "recursive division",
            MazeKind::Vertical => "vertical stripes",
            MazeKind::Horizontal => "horizontal stripes",
        };
        write!(f, "{}", name)
    }
}

/// Accepts the `Display` names as well as `recursive-division`, `vertical` and `horizontal`,
/// ignoring case.
impl FromStr for MazeKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(MazeKind::Random),
            "recursive division" | "recursive-division" => Ok(MazeKind::RecursiveDivision),
            "vertical stripes" | "vertical" => Ok(MazeKind::Vertical),
            "horizontal stripes" | "horizontal" => Ok(MazeKind::Horizontal),
            other => Err(GridError::Parse {
                line: 0,
                reason: format!("unknown maze kind {:?}", other),
            }),
        }
    }
}
