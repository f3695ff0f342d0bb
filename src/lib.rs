pub mod config;
pub mod error;
pub mod grid;
pub mod protocol;
pub mod search;
pub mod selector;
pub mod server;
pub mod simulate;
pub mod state;

pub use error::MoveError;
pub use grid::{Board, Cell, Direction};
pub use selector::{compute_next_move, select_move, Decision, SnakeBot, Strategy};
pub use state::GameState;
