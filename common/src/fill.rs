//! Frame fill and buffer lifecycle for the color-cycle demo.
//!
//! The demo task does the same thing every step: borrow a frame-sized
//! buffer, fill it with one color, push it to the panel, give the buffer
//! back. The two seams are traits so the firmware, the simulator and the
//! tests can plug in their own panel and buffer source.

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};

use crate::config::FRAME_PIXELS;

/// Receives one full frame of raw RGB565 pixels covering the whole
/// addressable area, (0,0) to (PANEL_WIDTH, PANEL_HEIGHT).
pub trait FrameSink {
    type Error;

    fn draw_frame(&mut self, pixels: &[u16]) -> Result<(), Self::Error>;
}

/// Source of frame-sized pixel buffers.
///
/// `take` may fail. Every frame obtained from `take` must be handed back
/// through `release` exactly once, and never touched afterwards.
pub trait FrameStore {
    type Frame: AsRef<[u16]> + AsMut<[u16]>;

    fn take(&mut self, pixels: usize) -> Option<Self::Frame>;
    fn release(&mut self, frame: Self::Frame);
}

/// Result of one fill step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// Frame submitted to the panel.
    Drawn,
    /// No buffer available; nothing was drawn this step.
    OutOfMemory,
    /// The panel rejected the frame. The buffer was still released.
    DrawFailed,
}

/// Set every pixel slot to `color`.
pub fn fill_buffer(pixels: &mut [u16], color: Rgb565) {
    pixels.fill(color.into_storage());
}

/// One fill step: take a frame, fill it, submit it, release it.
///
/// The frame is released whether or not the sink accepts it. An
/// allocation failure issues no draw at all.
pub fn fill_once<P, S>(panel: &mut P, frames: &mut S, color: Rgb565) -> FillOutcome
where
    P: FrameSink,
    S: FrameStore,
{
    let Some(mut frame) = frames.take(FRAME_PIXELS) else {
        return FillOutcome::OutOfMemory;
    };

    fill_buffer(frame.as_mut(), color);
    let submitted = panel.draw_frame(frame.as_ref());
    frames.release(frame);

    match submitted {
        Ok(()) => FillOutcome::Drawn,
        Err(_) => FillOutcome::DrawFailed,
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::colors::{MINT, RED, WHITE};
    use crate::schedule::SCHEDULE;

    /// Records every submitted frame; optionally rejects them.
    struct MockSink {
        frames: Vec<Vec<u16>>,
        fail: bool,
    }

    impl MockSink {
        fn new() -> Self {
            Self {
                frames: Vec::new(),
                fail: false,
            }
        }
    }

    impl FrameSink for MockSink {
        type Error = ();

        fn draw_frame(&mut self, pixels: &[u16]) -> Result<(), ()> {
            self.frames.push(pixels.to_vec());
            if self.fail { Err(()) } else { Ok(()) }
        }
    }

    /// Hands out up to `budget` frames and counts the lifecycle events.
    struct MockStore {
        budget: usize,
        taken: usize,
        released: usize,
    }

    impl MockStore {
        fn with_budget(budget: usize) -> Self {
            Self {
                budget,
                taken: 0,
                released: 0,
            }
        }
    }

    impl FrameStore for MockStore {
        type Frame = Vec<u16>;

        fn take(&mut self, pixels: usize) -> Option<Vec<u16>> {
            if self.budget == 0 {
                return None;
            }
            self.budget -= 1;
            self.taken += 1;
            Some(vec![0; pixels])
        }

        fn release(&mut self, frame: Vec<u16>) {
            self.released += 1;
            drop(frame);
        }
    }

    #[test]
    fn test_fill_buffer_sets_every_pixel() {
        let mut pixels = [0u16; 16];
        fill_buffer(&mut pixels, RED);
        assert!(pixels.iter().all(|&px| px == 0xF800));
    }

    #[test]
    fn test_fill_once_submits_full_frame_of_color() {
        let mut sink = MockSink::new();
        let mut store = MockStore::with_budget(1);

        assert_eq!(fill_once(&mut sink, &mut store, MINT), FillOutcome::Drawn);

        assert_eq!(sink.frames.len(), 1);
        let frame = &sink.frames[0];
        assert_eq!(frame.len(), FRAME_PIXELS);
        assert!(frame.iter().all(|&px| px == MINT.into_storage()));
    }

    #[test]
    fn test_allocation_failure_skips_draw() {
        let mut sink = MockSink::new();
        let mut store = MockStore::with_budget(0);

        assert_eq!(
            fill_once(&mut sink, &mut store, WHITE),
            FillOutcome::OutOfMemory
        );

        assert!(sink.frames.is_empty());
        assert_eq!(store.taken, 0);
        assert_eq!(store.released, 0);
    }

    #[test]
    fn test_buffer_released_when_draw_fails() {
        let mut sink = MockSink::new();
        sink.fail = true;
        let mut store = MockStore::with_budget(1);

        assert_eq!(
            fill_once(&mut sink, &mut store, RED),
            FillOutcome::DrawFailed
        );

        assert_eq!(store.taken, 1);
        assert_eq!(store.released, 1);
    }

    #[test]
    fn test_one_release_per_take_across_a_schedule_cycle() {
        let mut sink = MockSink::new();
        let mut store = MockStore::with_budget(SCHEDULE.len());

        for step in SCHEDULE {
            assert_eq!(
                fill_once(&mut sink, &mut store, step.color),
                FillOutcome::Drawn
            );
        }

        assert_eq!(store.taken, SCHEDULE.len());
        assert_eq!(store.released, SCHEDULE.len());

        // Budget exhausted: the next step degrades, it does not crash.
        assert_eq!(
            fill_once(&mut sink, &mut store, WHITE),
            FillOutcome::OutOfMemory
        );
        assert_eq!(store.released, SCHEDULE.len());
    }
}
