//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions. Row 0 is the bottom row; y grows upward.
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 24;

/// Fixed frame step for the terminal loop (about 30 FPS).
pub const FRAME_MS: u64 = 33;

/// Gravity timing, in frames. The fall timer counts down by one each
/// frame (plus `SOFT_DROP_BONUS` while soft drop is held) and the piece
/// moves down one cell when it reaches zero.
pub const FALL_INTERVAL: i32 = 16;
pub const SOFT_DROP_BONUS: i32 = 7;

/// Base score awarded per lock. A lock with `n` cleared rows scores
/// `LOCK_BASE_SCORE * (n + 1)^3`, so even a solid lock earns points.
pub const LOCK_BASE_SCORE: u32 = 100;

/// Falling piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::J, PieceKind::L, PieceKind::O];

    /// Index into the shape table
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
        }
    }

    /// Kind for a shape-table index (wraps modulo 4)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Index into the shape table
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Discrete game actions (pressed-this-frame inputs).
///
/// Soft drop is a held signal, not an action; it is passed to
/// `GameState::tick` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    /// Abandons the current piece and spawns the next one.
    HardDrop,
    Restart,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index()), kind);
        }
        // from_index wraps
        assert_eq!(PieceKind::from_index(4), PieceKind::I);
    }

    #[test]
    fn test_rotation_cw_cycles() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);
    }
}
