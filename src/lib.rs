//! tui-blox: a small falling-block game for the terminal.
//!
//! `core` holds the pure engine (board, pieces, gravity, scoring, shake);
//! `input` and `term` are the crossterm-based presentation layer that
//! drives it once per frame.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
