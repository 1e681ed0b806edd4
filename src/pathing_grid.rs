use crate::error::{EndpointIssue, GridError, Result};
use crate::INFINITY;
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use grid_util::rect::Rect;
use itertools::iproduct;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// A single cell of a [PathingGrid]. The coordinate never changes; the search fields are
/// written by a search run on its own copy of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    /// `x` is the column and `y` is the row.
    pub point: Point,
    pub is_start: bool,
    pub is_finish: bool,
    pub is_wall: bool,
    pub is_visited: bool,
    /// Cost so far, [INFINITY] while unset.
    pub distance: i32,
    /// Cost so far plus the heuristic estimate, [INFINITY] while unset.
    pub total_distance: i32,
    /// Best known predecessor, as a key into the same grid.
    pub previous: Option<Point>,
}

impl Node {
    fn new(point: Point) -> Node {
        Node {
            point,
            is_start: false,
            is_finish: false,
            is_wall: false,
            is_visited: false,
            distance: INFINITY,
            total_distance: INFINITY,
            previous: None,
        }
    }
    pub fn row(&self) -> usize {
        self.point.y as usize
    }
    pub fn col(&self) -> usize {
        self.point.x as usize
    }
    /// Clears the fields written by a search.
    fn reset_search_fields(&mut self) {
        self.is_visited = false;
        self.distance = INFINITY;
        self.total_distance = INFINITY;
        self.previous = None;
    }
}

/// Rank of an offset in the up, down, left, right neighbour order.
fn direction_rank(offset: Point) -> u8 {
    match (offset.x, offset.y) {
        (0, -1) => 0,
        (0, 1) => 1,
        (-1, 0) => 2,
        _ => 3,
    }
}

/// [PathingGrid] is a row-major [SimpleGrid] of [Node]s with exactly one start and one finish.
/// Every editing operation returns a new grid so earlier grids stay available for replay.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    nodes: SimpleGrid<Node>,
    start: Point,
    finish: Point,
}

impl PartialEq for PathingGrid {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.finish == other.finish
            && self.nodes.width() == other.nodes.width()
            && self.nodes.height() == other.nodes.height()
            && self.nodes.values == other.nodes.values
    }
}

impl Eq for PathingGrid {}

impl PathingGrid {
    /// Creates a wall-free grid with all search fields unset. Both dimensions must fit in an
    /// `i32` coordinate and the grid must hold at least two cells.
    pub fn new(num_rows: usize, num_columns: usize, start: Point, finish: Point) -> Result<Self> {
        let fits = |n: usize| i32::try_from(n).is_ok();
        let cells = num_rows.checked_mul(num_columns);
        if !fits(num_rows) || !fits(num_columns) || cells.map_or(true, |cells| cells < 2) {
            return Err(GridError::InvalidDimensions {
                num_rows,
                num_columns,
            });
        }
        let mut nodes: SimpleGrid<Node> =
            SimpleGrid::new(num_columns, num_rows, Node::new(Point::new(0, 0)));
        for (row, col) in iproduct!(0..num_rows, 0..num_columns) {
            let point = Point::new(col as i32, row as i32);
            nodes.set_point(point, Node::new(point));
        }
        let mut grid = PathingGrid {
            nodes,
            start,
            finish,
        };
        grid.check_in_bounds(&start)?;
        grid.check_in_bounds(&finish)?;
        if start == finish {
            return Err(GridError::InvalidEndpoints {
                start,
                finish,
                issue: EndpointIssue::Coincide,
            });
        }
        grid.move_flag(start, start, |node| &mut node.is_start);
        grid.move_flag(finish, finish, |node| &mut node.is_finish);
        Ok(grid)
    }

    pub fn num_rows(&self) -> usize {
        self.nodes.height()
    }
    pub fn num_columns(&self) -> usize {
        self.nodes.width()
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn finish(&self) -> Point {
        self.finish
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes.values
    }
    /// The whole grid as a rectangle at the origin, upper bounds exclusive.
    pub fn rect(&self) -> Rect {
        self.nodes.rect()
    }

    /// All coordinates in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.num_rows(), 0..self.num_columns())
            .map(|(row, col)| Point::new(col as i32, row as i32))
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        self.nodes.point_in_bounds(*point)
    }

    pub(crate) fn get_ix_point(&self, point: &Point) -> usize {
        self.nodes.get_ix_point(point)
    }

    pub fn node(&self, point: &Point) -> Option<&Node> {
        if self.in_bounds(point) {
            self.nodes.values.get(self.get_ix_point(point))
        } else {
            None
        }
    }

    pub(crate) fn node_mut(&mut self, point: &Point) -> Option<&mut Node> {
        if self.in_bounds(point) {
            let ix = self.get_ix_point(point);
            self.nodes.values.get_mut(ix)
        } else {
            None
        }
    }

    /// Out-of-bounds points are not walls; use [can_move_to](Self::can_move_to) for traversal.
    pub fn is_wall(&self, point: &Point) -> bool {
        self.in_bounds(point) && self.nodes.get_point(*point).is_wall
    }

    pub fn can_move_to(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.nodes.get_point(*point).is_wall
    }

    /// The in-bounds orthogonal neighbours of a point, ordered up, down, left, right. Walls are
    /// included.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        let mut neighbours: SmallVec<[Point; 4]> = point
            .neumann_neighborhood()
            .into_iter()
            .filter(|p| self.in_bounds(p))
            .collect();
        neighbours.sort_by_key(|p| direction_rank(*p - *point));
        neighbours
    }

    pub fn wall_count(&self) -> usize {
        self.nodes().iter().filter(|node| node.is_wall).count()
    }

    /// Returns a copy with the wall at `point` inverted. The start, the finish and
    /// out-of-bounds points are left untouched.
    pub fn with_wall_toggled(&self, point: &Point) -> PathingGrid {
        let mut grid = self.clone();
        if let Some(node) = grid.node_mut(point) {
            if !node.is_start && !node.is_finish {
                node.is_wall = !node.is_wall;
            }
        }
        grid
    }

    /// Returns a copy with every given point turned into a wall, skipping the endpoints and
    /// out-of-bounds points.
    pub fn with_walls<'a, I>(&self, walls: I) -> PathingGrid
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut grid = self.clone();
        for point in walls {
            if let Some(node) = grid.node_mut(point) {
                if !node.is_start && !node.is_finish {
                    node.is_wall = true;
                }
            }
        }
        grid
    }

    /// Returns a copy with the start moved to `point`.
    pub fn with_start(&self, point: Point) -> Result<PathingGrid> {
        self.check_in_bounds(&point)?;
        let issue = if point == self.finish {
            Some(EndpointIssue::Coincide)
        } else if self.is_wall(&point) {
            Some(EndpointIssue::StartIsWall)
        } else {
            None
        };
        if let Some(issue) = issue {
            return Err(GridError::InvalidEndpoints {
                start: point,
                finish: self.finish,
                issue,
            });
        }
        let mut grid = self.clone();
        grid.move_flag(self.start, point, |node| &mut node.is_start);
        grid.start = point;
        Ok(grid)
    }

    /// Returns a copy with the finish moved to `point`.
    pub fn with_finish(&self, point: Point) -> Result<PathingGrid> {
        self.check_in_bounds(&point)?;
        let issue = if point == self.start {
            Some(EndpointIssue::Coincide)
        } else if self.is_wall(&point) {
            Some(EndpointIssue::FinishIsWall)
        } else {
            None
        };
        if let Some(issue) = issue {
            return Err(GridError::InvalidEndpoints {
                start: self.start,
                finish: point,
                issue,
            });
        }
        let mut grid = self.clone();
        grid.move_flag(self.finish, point, |node| &mut node.is_finish);
        grid.finish = point;
        Ok(grid)
    }

    fn move_flag(&mut self, from: Point, to: Point, flag: fn(&mut Node) -> &mut bool) {
        if let Some(node) = self.node_mut(&from) {
            *flag(node) = false;
        }
        if let Some(node) = self.node_mut(&to) {
            *flag(node) = true;
        }
    }

    /// Returns a copy with all search fields cleared; walls and endpoints are kept.
    pub fn reset_for_path(&self) -> PathingGrid {
        let mut grid = self.clone();
        grid.nodes
            .values
            .iter_mut()
            .for_each(Node::reset_search_fields);
        grid
    }

    /// Returns a fresh grid of the same size and endpoints, without walls.
    pub fn cleared(&self) -> PathingGrid {
        let mut grid = self.reset_for_path();
        grid.nodes
            .values
            .iter_mut()
            .for_each(|node| node.is_wall = false);
        grid
    }

    pub fn check_in_bounds(&self, point: &Point) -> Result<()> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                point: *point,
                num_rows: self.num_rows(),
                num_columns: self.num_columns(),
            })
        }
    }
    /// Checks a start/finish pair for maze generation: both in bounds and distinct.
    pub fn check_placement(&self, start: &Point, finish: &Point) -> Result<()> {
        self.check_in_bounds(start)?;
        self.check_in_bounds(finish)?;
        if start == finish {
            return Err(GridError::InvalidEndpoints {
                start: *start,
                finish: *finish,
                issue: EndpointIssue::Coincide,
            });
        }
        Ok(())
    }

    /// Checks a start/finish pair for searching: in bounds, distinct and not walls.
    pub fn check_endpoints(&self, start: &Point, finish: &Point) -> Result<()> {
        self.check_placement(start, finish)?;
        let issue = if self.is_wall(start) {
            EndpointIssue::StartIsWall
        } else if self.is_wall(finish) {
            EndpointIssue::FinishIsWall
        } else {
            return Ok(());
        };
        Err(GridError::InvalidEndpoints {
            start: *start,
            finish: *finish,
            issue,
        })
    }

    /// Builds a [UnionFind] over the open cells in which orthogonally adjacent open cells share a
    /// component.
    pub fn generate_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.nodes().len());
        for point in self.points() {
            if !self.can_move_to(&point) {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            for p in [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)] {
                if self.can_move_to(&p) {
                    components.union(parent_ix, self.get_ix_point(&p));
                }
            }
        }
        components
    }

    /// Checks whether both points are open and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(start) && self.can_move_to(goal) {
            let components = self.generate_components();
            components.equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            false
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes().chunks(self.num_columns()) {
            let line: String = row
                .iter()
                .map(|node| {
                    if node.is_start {
                        'S'
                    } else if node.is_finish {
                        'F'
                    } else if node.is_wall {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the layout written by the [Display] implementation: one line per row with `.` for an
/// open cell, `#` for a wall, `S` for the start and `F` for the finish. Blank lines are ignored.
impl FromStr for PathingGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let parse_error = |line: usize, reason: String| GridError::Parse { line, reason };
        let mut rows: Vec<Vec<char>> = Vec::new();
        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        for (line, text) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let cells: Vec<char> = text.chars().collect();
            if let Some(first) = rows.first() {
                if first.len() != cells.len() {
                    return Err(parse_error(
                        line,
                        format!("expected {} cells, found {}", first.len(), cells.len()),
                    ));
                }
            }
            for (col, &cell) in cells.iter().enumerate() {
                let point = Point::new(col as i32, line as i32);
                let slot = match cell {
                    '.' => continue,
                    '#' => {
                        walls.push(point);
                        continue;
                    }
                    'S' => &mut start,
                    'F' => &mut finish,
                    other => return Err(parse_error(line, format!("unknown cell {:?}", other))),
                };
                if slot.replace(point).is_some() {
                    return Err(parse_error(line, format!("second {:?} at column {}", cell, col)));
                }
            }
            rows.push(cells);
        }
        let (Some(start), Some(finish)) = (start, finish) else {
            return Err(parse_error(rows.len(), "grid needs one S and one F".to_owned()));
        };
        let num_columns = rows.first().map_or(0, Vec::len);
        let grid = PathingGrid::new(rows.len(), num_columns, start, finish)?;
        Ok(grid.with_walls(&walls))
    }
}
