use crate::error::MoveError;
use crate::grid::{Board, Cell, Direction};
use serde::{Deserialize, Serialize};

/// Snapshot handed to the move selector once per tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board_width: i32,
    pub board_height: i32,
    /// Head first, tail last.
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
}

impl GameState {
    pub fn create(
        board_width: i32,
        board_height: i32,
        snake: Vec<Cell>,
        food: Cell,
        direction: Direction,
    ) -> Self {
        Self {
            board_width,
            board_height,
            snake,
            food,
            direction,
        }
    }

    pub fn board(&self) -> Board {
        Board::create(self.board_width, self.board_height)
    }

    /// Rejects snapshots the selector cannot reason about.
    pub fn validate(&self) -> Result<(), MoveError> {
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err(MoveError::EmptyBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }

        if self.snake.is_empty() {
            return Err(MoveError::EmptySnake);
        }

        let board = self.board();
        for (i, &cell) in self.snake.iter().enumerate() {
            if !board.contains(cell) {
                return Err(MoveError::OutOfBounds {
                    what: if i == 0 { "snake head" } else { "snake segment" },
                    cell,
                    width: self.board_width,
                    height: self.board_height,
                });
            }
        }

        if !board.contains(self.food) {
            return Err(MoveError::OutOfBounds {
                what: "food",
                cell: self.food,
                width: self.board_width,
                height: self.board_height,
            });
        }

        if self.snake.contains(&self.food) {
            return Err(MoveError::FoodInsideSnake { cell: self.food });
        }

        Ok(())
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn tail(&self) -> Option<Cell> {
        self.snake.last().copied()
    }
}
