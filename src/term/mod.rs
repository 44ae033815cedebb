//! Terminal "game renderer" module.
//!
//! Renders into a simple framebuffer that is flushed to a terminal
//! backend with diffing. Keeps `core` deterministic and testable while
//! giving precise control over aspect ratio (2 columns per board cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
