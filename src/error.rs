//! Error types for grid construction, editing and search entry checks.

use grid_util::point::Point;
use thiserror::Error;

/// Why a start/finish pair was refused.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointIssue {
    #[error("start and finish coincide")]
    Coincide,
    #[error("start is a wall")]
    StartIsWall,
    #[error("finish is a wall")]
    FinishIsWall,
}

/// Boundary errors. Reported before any search or generation work happens; an unreachable
/// finish is never an error.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("{point} is outside the {num_rows}x{num_columns} grid")]
    OutOfBounds {
        point: Point,
        num_rows: usize,
        num_columns: usize,
    },

    #[error("invalid endpoints {start} -> {finish}: {issue}")]
    InvalidEndpoints {
        start: Point,
        finish: Point,
        issue: EndpointIssue,
    },

    #[error("a {num_rows}x{num_columns} grid needs two cells and sides that fit in i32")]
    InvalidDimensions { num_rows: usize, num_columns: usize },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, GridError>;
