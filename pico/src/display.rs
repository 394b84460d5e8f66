//! Panel bring-up for the 1.69" ST7789V2 module.
//!
//! The controller RAM is 240x320 while the glass exposes 240x280, offset
//! 20 lines down; the module also wants inverted colors and BGR channel
//! order. All of that is declared once on the mipidsi builder, which
//! applies it between the reset/init sequence and display-on.

use defmt::{Format, error};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use lcdcycle_common::config::{GAP_X, GAP_Y, PANEL_HEIGHT, PANEL_WIDTH, SPI_FREQ_HZ};
use lcdcycle_common::fill::FrameSink;
use mipidsi::Builder;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, ColorOrder};
use static_cell::StaticCell;

/// Scratch buffer the SPI interface batches command and pixel bytes
/// through.
static INTERFACE_BUF: StaticCell<[u8; 512]> = StaticCell::new();

type PanelSpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, NoDelay>;
type PanelDriver =
    mipidsi::Display<SpiInterface<'static, PanelSpi, Output<'static>>, ST7789, Output<'static>>;

/// Bring-up or draw failure. Init-path variants are fatal to startup.
#[derive(Clone, Copy, Debug, Format)]
pub enum PanelError {
    /// Claiming the bus behind the chip-select line failed.
    Transport,
    /// The controller reset/init command sequence failed.
    Init,
    /// A frame submission was rejected.
    Draw,
}

/// Handle to the initialized panel, owned by whichever task currently
/// issues draw commands.
pub struct Panel {
    driver: PanelDriver,
}

/// SPI configuration for the panel link.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = SPI_FREQ_HZ;
    config
}

/// Initialize the panel: transport, controller driver, then the reset /
/// init / inversion / gap / display-on sequence.
///
/// Fails fast: the first error aborts the sequence and the caller must
/// not use the panel.
pub fn init_panel(
    spi: Spi<'static, SPI0, Blocking>,
    cs: Output<'static>,
    dc: Output<'static>,
    rst: Output<'static>,
) -> Result<Panel, PanelError> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| PanelError::Transport)?;
    let di = SpiInterface::new(spi_device, dc, INTERFACE_BUF.init([0; 512]));

    let driver = Builder::new(ST7789, di)
        .display_size(PANEL_WIDTH as u16, PANEL_HEIGHT as u16)
        .display_offset(GAP_X, GAP_Y)
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .reset_pin(rst)
        .init(&mut embassy_time::Delay)
        .map_err(|e| {
            error!("controller init rejected: {}", defmt::Debug2Format(&e));
            PanelError::Init
        })?;

    Ok(Panel { driver })
}

impl FrameSink for Panel {
    type Error = PanelError;

    /// Stream one full frame, window set once over the whole area.
    fn draw_frame(&mut self, pixels: &[u16]) -> Result<(), PanelError> {
        self.driver
            .set_pixels(
                0,
                0,
                PANEL_WIDTH as u16 - 1,
                PANEL_HEIGHT as u16 - 1,
                pixels.iter().map(|&raw| Rgb565::from(RawU16::new(raw))),
            )
            .map_err(|_| PanelError::Draw)
    }
}
