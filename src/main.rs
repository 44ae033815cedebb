//! Terminal blox runner (default binary).
//!
//! Frame-stepped loop: render, poll input until the tick deadline, then
//! advance the engine by one fixed frame. Single-threaded and synchronous;
//! exactly one update and one draw per frame.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blox::core::GameState;
use tui_blox::input::{should_quit, InputHandler};
use tui_blox::term::{GameView, TerminalRenderer, Viewport};
use tui_blox::types::FRAME_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(time_seed());
    let view = GameView::default();
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(FRAME_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 30));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = input.handle_key_press(key.code) {
                            game.apply_action(action);
                        }
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Fixed tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            input.update();
            game.tick(input.soft_drop_held());
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
