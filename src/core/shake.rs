//! Impact shake - decaying random jitter applied to everything drawn
//!
//! Purely cosmetic: the offset never feeds back into gameplay. Offsets are
//! in screen cells with +y pointing down (the direction locked pieces
//! visually settle).

use crate::core::rng::SimpleRng;

#[derive(Debug, Clone, Copy, Default)]
pub struct Shake {
    magnitude: i32,
    offset: (f32, f32),
}

impl Shake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a decaying shake (line-clear feedback).
    ///
    /// The shake lasts `magnitude` frames; each frame samples a fresh
    /// offset in [-magnitude, +magnitude] on both axes, then decays by one.
    pub fn punch(&mut self, magnitude: i32) {
        self.magnitude = magnitude;
    }

    /// Single-frame downward nudge acknowledging a lock with no clears.
    ///
    /// Non-random and vertical-only, so it reads as a settle rather than
    /// a line clear.
    pub fn punch_down(&mut self) {
        self.magnitude = 0;
        self.offset = (0.0, 1.0);
    }

    /// Advance one frame: resample jitter while magnitude remains,
    /// otherwise return to rest.
    pub fn step(&mut self, rng: &mut SimpleRng) {
        if self.magnitude > 0 {
            let m = self.magnitude as f32;
            self.offset = (
                -m + rng.next_f32() * m * 2.0,
                -m + rng.next_f32() * m * 2.0,
            );
            self.magnitude -= 1;
        } else {
            self.magnitude = 0;
            self.offset = (0.0, 0.0);
        }
    }

    /// Current jitter offset in screen cells (+y down)
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punch_decays_to_rest() {
        let mut rng = SimpleRng::new(1);
        let mut shake = Shake::new();
        shake.punch(4);

        for frame in 0..4 {
            shake.step(&mut rng);
            let remaining = 4 - frame;
            let (x, y) = shake.offset();
            assert!(x.abs() <= remaining as f32, "frame {}: {}", frame, x);
            assert!(y.abs() <= remaining as f32, "frame {}: {}", frame, y);
        }

        shake.step(&mut rng);
        assert_eq!(shake.offset(), (0.0, 0.0));
        assert_eq!(shake.magnitude(), 0);
    }

    #[test]
    fn test_punch_down_lasts_one_frame() {
        let mut rng = SimpleRng::new(1);
        let mut shake = Shake::new();

        shake.punch_down();
        assert_eq!(shake.offset(), (0.0, 1.0));

        shake.step(&mut rng);
        assert_eq!(shake.offset(), (0.0, 0.0));
    }
}
