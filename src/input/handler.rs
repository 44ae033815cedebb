//! Key handling for terminal environments.
//!
//! Soft drop is a held signal, and many terminals never emit key release
//! events; a short timeout auto-releases the hold so a single tap does not
//! turn into a sustained drop.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

// Auto-release window for terminals without key-release events. Terminal
// auto-repeat arrives as fresh presses, so a genuinely held key keeps
// refreshing the timer.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks pressed-this-frame actions and the held soft-drop state.
#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    last_soft_drop_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            soft_drop_held: false,
            last_soft_drop_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Map a key press to a game action.
    ///
    /// Down only updates the held soft-drop state and yields no action.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
            KeyCode::Char(' ') => Some(GameAction::HardDrop),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.soft_drop_held = true;
                self.last_soft_drop_time = Instant::now();
                None
            }
            _ => None,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if matches!(
            code,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S')
        ) {
            self.soft_drop_held = false;
        }
    }

    /// Per-frame maintenance: auto-release a stale soft-drop hold.
    pub fn update(&mut self) {
        if self.soft_drop_held
            && self.last_soft_drop_time.elapsed().as_millis() as u32 > self.key_release_timeout_ms
        {
            self.soft_drop_held = false;
        }
    }

    /// Polled "down held this frame" signal
    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Quit keys: q, Esc, or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_press_mapping() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyCode::Left),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            ih.handle_key_press(KeyCode::Right),
            Some(GameAction::MoveRight)
        );
        assert_eq!(ih.handle_key_press(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(
            ih.handle_key_press(KeyCode::Char(' ')),
            Some(GameAction::HardDrop)
        );
        assert_eq!(
            ih.handle_key_press(KeyCode::Char('r')),
            Some(GameAction::Restart)
        );
        assert_eq!(ih.handle_key_press(KeyCode::Enter), None);
    }

    #[test]
    fn test_soft_drop_is_held_not_an_action() {
        let mut ih = InputHandler::new();
        assert!(!ih.soft_drop_held());

        assert_eq!(ih.handle_key_press(KeyCode::Down), None);
        assert!(ih.soft_drop_held());

        ih.handle_key_release(KeyCode::Down);
        assert!(!ih.soft_drop_held());
    }

    #[test]
    fn test_soft_drop_auto_releases_after_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);
        assert!(ih.soft_drop_held());

        // Simulate no release events by moving the last press into the past.
        ih.last_soft_drop_time = Instant::now() - Duration::from_millis(51);
        ih.update();
        assert!(!ih.soft_drop_held());
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(should_quit(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }
}
