#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod board;
pub mod state;

pub mod engine {
    pub mod terminal;
    pub mod tilt;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, Tile};
pub use crate::engine::terminal::{
    at_least_one_move_exists, empty_space_exists, is_game_over, max_tile_exists, MAX_TILE,
};
pub use crate::engine::tilt::tilt;
pub use crate::state::GameState;
pub use crate::types::Direction;
