//! Game state module - the complete falling-block engine
//!
//! Ties together board, pieces, RNG, and shake. Driven once per frame by
//! the presentation loop: discrete pressed actions go through
//! `apply_action`, then `tick` advances shake, gravity, and landing.
//!
//! Invalid player input (blocked move, blocked rotation) is silently
//! rejected and leaves state unchanged; there is no error taxonomy.

use crate::core::pieces::{enumerate_cells, SPAWN_POSITION};
use crate::core::{Board, Shake, SimpleRng};
use crate::types::{
    GameAction, PieceKind, Rotation, FALL_INTERVAL, LOCK_BASE_SCORE, SOFT_DROP_BONUS,
};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl FallingPiece {
    /// Create a piece at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Absolute board cells the piece currently occupies
    pub fn cells(&self) -> [(i8, i8); 4] {
        enumerate_cells(self.x, self.y, self.kind, self.rotation)
    }
}

/// Complete game state.
///
/// One owned aggregate, held by the presentation layer and passed by
/// reference to update/draw. No global state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    falling: FallingPiece,
    next: PieceKind,
    score: u32,
    fall_interval: i32,
    fall_timer: i32,
    shake: Shake,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = random_kind(&mut rng);

        let mut state = Self {
            board: Board::new(),
            falling: FallingPiece::spawn(next),
            next,
            score: 0,
            fall_interval: FALL_INTERVAL,
            fall_timer: FALL_INTERVAL,
            shake: Shake::new(),
            rng,
        };
        // Promote the queued kind and sample a fresh preview.
        state.new_fall();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn falling(&self) -> FallingPiece {
        self.falling
    }

    /// Absolute cells of the falling piece (for rendering)
    pub fn falling_cells(&self) -> [(i8, i8); 4] {
        self.falling.cells()
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score as a fixed-width 9-digit zero-padded string
    pub fn score_string(&self) -> String {
        format!("{:09}", self.score)
    }

    /// Current cosmetic jitter offset in screen cells (+y down)
    pub fn shake_offset(&self) -> (f32, f32) {
        self.shake.offset()
    }

    /// Direct grid access, used by tests to set up board scenarios
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Reset to a fresh game: empty grid, zero score, default fall speed,
    /// freshly sampled pieces. Always available, no confirmation.
    pub fn reset(&mut self) {
        self.board.clear();
        self.fall_interval = FALL_INTERVAL;
        self.next = random_kind(&mut self.rng);
        self.new_fall();
        self.score = 0;
    }

    /// Promote the preview piece to falling and sample a new preview
    pub fn new_fall(&mut self) {
        self.falling = FallingPiece::spawn(self.next);
        self.next = random_kind(&mut self.rng);
        self.fall_timer = self.fall_interval;
    }

    /// Move the falling piece to the candidate anchor (x, y) if every
    /// occupied cell stays in bounds and empty. Blocked moves are silent
    /// no-ops.
    pub fn try_move(&mut self, x: i8, y: i8) -> bool {
        let cells = enumerate_cells(x, y, self.falling.kind, self.falling.rotation);
        if cells.iter().all(|&(cx, cy)| self.board.space_clear(cx, cy)) {
            self.falling.x = x;
            self.falling.y = y;
            return true;
        }
        false
    }

    /// Rotate the falling piece clockwise with a fixed kick chain:
    /// in place, then one cell right, then one cell left. First fit wins;
    /// if all three are blocked the rotation is silently rejected.
    pub fn rotate(&mut self) -> bool {
        let rotation = self.falling.rotation.rotate_cw();

        for dx in [0, 1, -1] {
            let x = self.falling.x + dx;
            let cells = enumerate_cells(x, self.falling.y, self.falling.kind, rotation);
            if cells.iter().all(|&(cx, cy)| self.board.space_clear(cx, cy)) {
                self.falling.x = x;
                self.falling.rotation = rotation;
                return true;
            }
        }
        false
    }

    /// Advance the gravity timer by one frame; soft drop burns 7 extra.
    ///
    /// When the timer runs out the piece moves down one cell through
    /// `try_move`: a piece that slid onto a ledge since the last landing
    /// check stays put instead, and the landing check that follows locks
    /// it.
    pub fn advance_gravity(&mut self, soft_drop: bool) {
        self.fall_timer -= 1 + if soft_drop { SOFT_DROP_BONUS } else { 0 };
        if self.fall_timer <= 0 {
            self.try_move(self.falling.x, self.falling.y - 1);
            self.fall_timer = self.fall_interval;
        }
    }

    /// Lock the piece if any occupied cell rests on the floor (y <= 0) or
    /// on an occupied cell.
    pub fn check_landing(&mut self) {
        let landed = self
            .falling
            .cells()
            .iter()
            .any(|&(x, y)| y <= 0 || self.board.get(x, y - 1).is_some());

        if landed {
            self.lock_piece();
        }
    }

    /// Write the falling piece into the board, clear full rows, score the
    /// lock, spawn the next piece, and trigger lock feedback.
    ///
    /// Returns the number of rows cleared.
    pub fn lock_piece(&mut self) -> u32 {
        let kind = self.falling.kind;
        for (x, y) in self.falling.cells() {
            self.board.set(x, y, Some(kind));
        }

        let cleared = self.board.clear_full_rows().len() as u32;
        // Every lock earns base points, multiplied cubically by clears.
        self.score += LOCK_BASE_SCORE * (cleared + 1).pow(3);
        self.new_fall();

        if cleared > 0 {
            self.shake.punch(2 * cleared as i32);
        } else {
            self.shake.punch_down();
        }

        cleared
    }

    /// Main per-frame update: shake decay, gravity, then landing.
    ///
    /// `soft_drop` is the polled "down held" signal for this frame.
    pub fn tick(&mut self, soft_drop: bool) {
        self.shake.step(&mut self.rng);
        self.advance_gravity(soft_drop);
        self.check_landing();
    }

    /// Apply a pressed-this-frame action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(self.falling.x - 1, self.falling.y),
            GameAction::MoveRight => self.try_move(self.falling.x + 1, self.falling.y),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                // Abandon the current piece and pull the next one in.
                self.new_fall();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Uniform draw over the 4 piece kinds
fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::from_index(rng.next_range(PieceKind::ALL.len() as u32) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    #[test]
    fn test_new_game_spawns_at_default_anchor() {
        let state = GameState::new(12345);
        let falling = state.falling();

        assert_eq!(falling.x, BOARD_WIDTH / 2 - 2);
        assert_eq!(falling.y, BOARD_HEIGHT + 3);
        assert_eq!(falling.rotation, Rotation::North);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_same_seed_same_piece_sequence() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);

        for _ in 0..10 {
            assert_eq!(a.falling().kind, b.falling().kind);
            assert_eq!(a.next_kind(), b.next_kind());
            a.new_fall();
            b.new_fall();
        }
    }

    #[test]
    fn test_gravity_moves_piece_down_when_timer_expires() {
        let mut state = GameState::new(1);
        let start_y = state.falling().y;

        // Soft drop burns 8 per frame; the 16-frame timer expires on the
        // second frame.
        state.advance_gravity(true);
        assert_eq!(state.falling().y, start_y);
        state.advance_gravity(true);
        assert_eq!(state.falling().y, start_y - 1);
    }

    #[test]
    fn test_hard_drop_promotes_preview() {
        let mut state = GameState::new(42);
        let preview = state.next_kind();

        state.apply_action(GameAction::HardDrop);

        assert_eq!(state.falling().kind, preview);
        assert_eq!(state.falling().x, BOARD_WIDTH / 2 - 2);
        assert_eq!(state.falling().y, BOARD_HEIGHT + 3);
    }
}
