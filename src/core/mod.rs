//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod shake;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{FallingPiece, GameState};
pub use pieces::{enumerate_cells, get_shape};
pub use rng::SimpleRng;
pub use shake::Shake;
