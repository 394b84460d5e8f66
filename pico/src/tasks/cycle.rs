//! The color-cycle demo task.

use defmt::{error, info, warn};
use embassy_time::Timer;
use lcdcycle_common::fill::{FillOutcome, fill_once};
use lcdcycle_common::schedule::SCHEDULE;

use crate::display::Panel;
use crate::frames::HeapFrames;

/// Cycle the panel through the demo schedule forever.
///
/// Allocation or draw failures skip the current step; the loop never
/// exits on its own.
#[embassy_executor::task]
pub async fn color_cycle(mut panel: Panel, mut frames: HeapFrames) {
    info!("color cycle task started");

    for step in SCHEDULE.iter().cycle() {
        match fill_once(&mut panel, &mut frames, step.color) {
            FillOutcome::Drawn => {}
            FillOutcome::OutOfMemory => error!("no frame buffer free, skipping fill"),
            FillOutcome::DrawFailed => warn!("panel rejected frame"),
        }
        Timer::after_millis(u64::from(step.hold_ms)).await;
    }
}
