// Move selection cascade:
// 1. seek food, if the snake can still reach its tail after eating
// 2. chase tail
// 3. any free neighbour
// 4. keep heading

use crate::error::MoveError;
use crate::grid::{Cell, Direction};
use crate::search::{shortest_path, tail_reachable};
use crate::simulate::simulate_path;
use crate::state::GameState;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    SeekFood,
    ChaseTail,
    SafeNeighbour,
    KeepHeading,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Decision {
    pub direction: Direction,
    pub strategy: Strategy,
}

/// Runs the cascade and reports which stage produced the move.
pub fn select_move(state: &GameState) -> Result<Decision, MoveError> {
    state.validate()?;

    let board = state.board();
    let snake = &state.snake;
    let (head, tail) = match (state.head(), state.tail()) {
        (Some(h), Some(t)) => (h, t),
        _ => return Err(MoveError::EmptySnake),
    };
    let body: HashSet<Cell> = snake.iter().copied().collect();

    if let Some(path) = shortest_path(&board, head, state.food, &body) {
        if let Some(&next) = path.first() {
            let projected = simulate_path(snake, &path, state.food);
            if tail_reachable(&board, &projected) {
                return commit(head, next, Strategy::SeekFood);
            }
            debug!(
                "food at {} is {} steps away but would trap the snake",
                state.food,
                path.len()
            );
        }
    }

    // The tail is not an obstacle here, so a two-segment snake may turn
    // back onto its own neck, which is also its tail.
    let mut without_tail = body.clone();
    without_tail.remove(&tail);
    if let Some(&next) = shortest_path(&board, head, tail, &without_tail)
        .as_ref()
        .and_then(|p| p.first())
    {
        return commit(head, next, Strategy::ChaseTail);
    }

    for dir in Direction::ALL {
        let next = head.step(dir);
        if board.contains(next) && !body.contains(&next) {
            return Ok(decided(dir, Strategy::SafeNeighbour));
        }
    }

    Ok(decided(state.direction, Strategy::KeepHeading))
}

/// The next direction for `state`. Only malformed snapshots are errors.
pub fn compute_next_move(state: &GameState) -> Result<Direction, MoveError> {
    select_move(state).map(|d| d.direction)
}

fn commit(head: Cell, next: Cell, strategy: Strategy) -> Result<Decision, MoveError> {
    Direction::from_offset(next.x - head.x, next.y - head.y)
        .map(|dir| decided(dir, strategy))
        .ok_or(MoveError::NonAdjacentStep {
            from: head,
            to: next,
        })
}

fn decided(direction: Direction, strategy: Strategy) -> Decision {
    debug!("{:?} -> {}", strategy, direction);
    Decision {
        direction,
        strategy,
    }
}

/// Stateless bot handle for harnesses that drive an object per episode.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeBot;

impl SnakeBot {
    pub fn new() -> Self {
        SnakeBot
    }

    pub fn next_move(&self, state: &GameState) -> Result<Direction, MoveError> {
        compute_next_move(state)
    }
}
