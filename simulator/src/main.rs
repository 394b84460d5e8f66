//! Desktop color-cycle demo.
//!
//! Runs the same schedule and fill path as the firmware against a
//! simulated 240x280 panel so the demo can be eyeballed without
//! hardware. Requires SDL2.

use std::convert::Infallible;
use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use lcdcycle_common::config::{PANEL_HEIGHT, PANEL_WIDTH};
use lcdcycle_common::fill::{FillOutcome, FrameSink, FrameStore, fill_once};
use lcdcycle_common::schedule::SCHEDULE;

/// How often the window polls for close events while holding a color.
const POLL_MS: u64 = 50;

/// Simulated panel fed by the shared fill path.
struct SimPanel(SimulatorDisplay<Rgb565>);

impl FrameSink for SimPanel {
    type Error = Infallible;

    fn draw_frame(&mut self, pixels: &[u16]) -> Result<(), Infallible> {
        let area = Rectangle::new(
            Point::zero(),
            Size::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32),
        );
        self.0
            .fill_contiguous(&area, pixels.iter().map(|&raw| Rgb565::from(RawU16::new(raw))))
    }
}

/// Host-side frame store; allocation failure is not interesting here.
struct VecFrames;

impl FrameStore for VecFrames {
    type Frame = Vec<u16>;

    fn take(&mut self, pixels: usize) -> Option<Vec<u16>> {
        Some(vec![0; pixels])
    }

    fn release(&mut self, frame: Vec<u16>) {
        drop(frame);
    }
}

fn main() {
    let display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("lcdcycle", &output_settings);

    let mut panel = SimPanel(display);
    let mut frames = VecFrames;

    'demo: for step in SCHEDULE.iter().cycle() {
        if fill_once(&mut panel, &mut frames, step.color) != FillOutcome::Drawn {
            eprintln!("fill failed, stopping");
            break;
        }
        window.update(&panel.0);

        // Sleep in short slices so window close stays responsive.
        let mut remaining = u64::from(step.hold_ms);
        while remaining > 0 {
            let slice = remaining.min(POLL_MS);
            thread::sleep(Duration::from_millis(slice));
            remaining -= slice;
            if window.events().any(|e| matches!(e, SimulatorEvent::Quit)) {
                break 'demo;
            }
        }
    }
}
