//! Input module - crossterm key mapping and held-key tracking

pub mod handler;

pub use handler::{should_quit, InputHandler};
