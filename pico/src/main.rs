//! ST7789V2 color-cycle bring-up for Raspberry Pi Pico 2 (RP2350).
//!
//! Brings a 1.69" 240x280 panel up over SPI and runs a solid-color
//! cycling task forever.
//!
//! Wiring:
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO23 (SPI0 TX)
//! - CS: GPIO5
//! - DC: GPIO16
//! - RST: GPIO17
//! - Backlight: GPIO4
//!
//! The firmware only targets ARM; on the host this crate builds as a
//! stub so the workspace (and the `frames` unit tests) compile without
//! the thumbv8 toolchain.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

extern crate alloc;

pub mod frames;

#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod heap;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
mod app {
    use defmt::{error, info};
    use embassy_executor::Spawner;
    use embassy_rp::gpio::{Level, Output};
    use embassy_rp::spi::Spi;
    use {defmt_rtt as _, panic_probe as _};

    use crate::display::{display_spi_config, init_panel};
    use crate::frames::HeapFrames;
    use crate::heap;
    use crate::tasks::color_cycle;

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"lcdcycle"),
        embassy_rp::binary_info::rp_program_description!(c"ST7789V2 240x280 color-cycle bring-up"),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("lcdcycle starting...");

        let p = embassy_rp::init(Default::default());

        heap::init();

        // Panel control pins; backlight goes high immediately.
        let cs = Output::new(p.PIN_5, Level::High);
        let dc = Output::new(p.PIN_16, Level::Low);
        let rst = Output::new(p.PIN_17, Level::High);
        let mut _backlight = Output::new(p.PIN_4, Level::High);

        // TX-only SPI; the panel has no MISO line.
        let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_23, display_spi_config());

        let panel = match init_panel(spi, cs, dc, rst) {
            Ok(panel) => panel,
            Err(e) => {
                error!("panel bring-up failed: {}", e);
                return;
            }
        };

        info!("panel initialized");

        spawner.spawn(color_cycle(panel, HeapFrames::new())).unwrap();
    }
}

#[cfg(not(target_arch = "arm"))]
fn main() {}
