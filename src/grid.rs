use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// BOARD (width 5, height 4), y grows downwards
//      x=0     x=1     x=2     x=3     x=4
// y=0 (0,0) | (1,0) | (2,0) | (3,0) | (4,0)
// y=1 (0,1) | (1,1) | (2,1) | (3,1) | (4,1)
// y=2 (0,2) | (1,2) | (2,2) | (3,2) | (4,2)
// y=3 (0,3) | (1,3) | (2,3) | (3,3) | (4,3)

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(&self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "UP")]
    Up,
    #[serde(alias = "DOWN")]
    Down,
    #[serde(alias = "LEFT")]
    Left,
    #[serde(alias = "RIGHT")]
    Right,
}

impl Direction {
    /// Fixed enumeration order used for neighbour scans and fallback moves.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Exact reverse lookup of `offset`. Anything other than a unit step is `None`.
    pub fn from_offset(dx: i32, dy: i32) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.offset() == (dx, dy))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn create(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// In-bounds orthogonal neighbours of `cell` not in `obstacles`, in `Direction::ALL` order.
    pub fn neighbours<'a>(
        &'a self,
        cell: Cell,
        obstacles: &'a HashSet<Cell>,
    ) -> impl Iterator<Item = Cell> + 'a {
        Direction::ALL
            .into_iter()
            .map(move |d| cell.step(d))
            .filter(move |n| self.contains(*n) && !obstacles.contains(n))
    }
}
