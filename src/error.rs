use crate::grid::Cell;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("board must have positive dimensions, got {width}x{height}")]
    EmptyBoard { width: i32, height: i32 },

    #[error("snake must have at least one segment")]
    EmptySnake,

    #[error("{what} at {cell} is outside the {width}x{height} board")]
    OutOfBounds {
        what: &'static str,
        cell: Cell,
        width: i32,
        height: i32,
    },

    #[error("food at {cell} lies inside the snake body")]
    FoodInsideSnake { cell: Cell },

    /// A committed step was not a unit move away from the head.
    #[error("internal error: step from {from} to {to} is not a single orthogonal move")]
    NonAdjacentStep { from: Cell, to: Cell },
}
