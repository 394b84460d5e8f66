//! The demo color schedule.
//!
//! Data-driven so the sequence can be checked without running the timed
//! loop: the firmware and the simulator both iterate this table cyclically
//! and sleep `hold_ms` between fills.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, MINT, ORCHID, RED, WHITE};

/// One step of the demo: a solid fill color and how long to hold it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub color: Rgb565,
    pub hold_ms: u32,
}

const fn step(color: Rgb565, hold_ms: u32) -> Step {
    Step { color, hold_ms }
}

/// The fixed six-entry cycle: red, white, black, mint, orchid, then a
/// long white hold before wrapping around.
pub const SCHEDULE: [Step; 6] = [
    step(RED, 1_000),
    step(WHITE, 1_000),
    step(BLACK, 1_000),
    step(MINT, 1_000),
    step(ORCHID, 1_000),
    step(WHITE, 5_000),
];

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;

    #[test]
    fn test_schedule_matches_reference_sequence() {
        let raw: Vec<(u16, u32)> = SCHEDULE
            .iter()
            .map(|s| (s.color.into_storage(), s.hold_ms))
            .collect();
        assert_eq!(
            raw,
            vec![
                (0xF800, 1_000),
                (0xFFFF, 1_000),
                (0x0000, 1_000),
                (0xAFB0, 1_000),
                (0xFBFB, 1_000),
                (0xFFFF, 5_000),
            ]
        );
    }

    #[test]
    fn test_schedule_repeats_cyclically() {
        let mut steps = SCHEDULE.iter().cycle();
        for _ in 0..SCHEDULE.len() {
            steps.next();
        }
        assert_eq!(steps.next(), Some(&SCHEDULE[0]));
    }
}
