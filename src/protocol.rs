use crate::grid::{Cell, Direction};
use crate::selector::Strategy;
use crate::state::GameState;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SnakeInfo {
    pub color: String,
    pub head: String,
    pub tail: String,
}

impl Default for SnakeInfo {
    fn default() -> Self {
        Self {
            color: "#2e8b57".to_string(),
            head: "smart-caterpillar".to_string(),
            tail: "curled".to_string(),
        }
    }
}

#[derive(Serialize, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MoveResponse {
    pub r#move: Direction,
    pub strategy: Strategy,
}

#[derive(Serialize, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct MoveRequest {
    pub board_width: i32,
    pub board_height: i32,
    /// Head first.
    pub snake: Vec<Coordinate>,
    pub food: Coordinate,
    pub direction: Direction,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

pub fn request_to_state(req: &MoveRequest) -> GameState {
    let snake = req.snake.iter().map(coord_to_cell).collect();

    GameState::create(
        req.board_width,
        req.board_height,
        snake,
        coord_to_cell(&req.food),
        req.direction,
    )
}

fn coord_to_cell(c: &Coordinate) -> Cell {
    Cell::new(c.x, c.y)
}
