//! Pieces module - shape table and bitmask decoding
//!
//! Each piece kind has one 4x4 occupancy bitmask per rotation. Shapes are
//! decoded into mino offsets by scanning the mask; the same decode drives
//! collision checks and rendering.

use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [MinoOffset; 4];

/// 4x4 occupancy bitmasks, indexed [kind][rotation].
///
/// Bit `15 - (i + 4*j)` set means cell (i, j) of the 4x4 box is occupied.
/// Row j of the box extends *downward* from the anchor in logical space,
/// so the decoded offset for (i, j) is (i, -j).
const SHAPES: [[u16; 4]; 4] = [
    // I
    [0x0F00, 0x2222, 0x00F0, 0x4444],
    // J
    [0x8E00, 0x6440, 0x0E20, 0x44C0],
    // L
    [0x2E00, 0x4460, 0x0E80, 0xC440],
    // O (rotation invariant)
    [0x0660, 0x0660, 0x0660, 0x0660],
];

/// Raw bitmask for a piece kind and rotation
pub fn shape_mask(kind: PieceKind, rotation: Rotation) -> u16 {
    SHAPES[kind.index()][rotation.index()]
}

/// Decode the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mask = shape_mask(kind, rotation);
    let mut shape = [(0, 0); 4];
    let mut n = 0;

    for j in 0..4i8 {
        for i in 0..4i8 {
            let bit = 1u16 << (15 - (i + j * 4));
            if mask & bit != 0 && n < shape.len() {
                shape[n] = (i, -j);
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, 4, "shape mask must have exactly 4 set bits");

    shape
}

/// Absolute board cells occupied by a piece anchored at (x, y).
///
/// Pure function: used for collision checks, locking, and rendering.
pub fn enumerate_cells(x: i8, y: i8, kind: PieceKind, rotation: Rotation) -> [(i8, i8); 4] {
    let mut cells = get_shape(kind, rotation);
    for cell in &mut cells {
        cell.0 += x;
        cell.1 += y;
    }
    cells
}

/// Spawn anchor for new pieces: horizontally near board center, a fixed
/// height above the visible top so pieces fall into view.
pub const SPAWN_POSITION: (i8, i8) = (BOARD_WIDTH / 2 - 2, BOARD_HEIGHT + 3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_masks_have_four_minos() {
        for kind in PieceKind::ALL {
            for rotation in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                assert_eq!(
                    shape_mask(kind, rotation).count_ones(),
                    4,
                    "{:?}/{:?}",
                    kind,
                    rotation
                );
            }
        }
    }

    #[test]
    fn test_i_north_is_horizontal_bar() {
        // 0x0F00: all of box row j=1 occupied.
        let shape = get_shape(PieceKind::I, Rotation::North);
        assert_eq!(shape, [(0, -1), (1, -1), (2, -1), (3, -1)]);
    }

    #[test]
    fn test_o_is_rotation_invariant() {
        let north = get_shape(PieceKind::O, Rotation::North);
        for rotation in [Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(get_shape(PieceKind::O, rotation), north);
        }
    }
}
