//! Panel geometry and bus timing constants.

/// Addressable panel width in pixels.
pub const PANEL_WIDTH: usize = 240;

/// Addressable panel height in pixels.
pub const PANEL_HEIGHT: usize = 280;

/// Pixel slots in one full frame.
pub const FRAME_PIXELS: usize = PANEL_WIDTH * PANEL_HEIGHT;

/// Bytes in one full RGB565 frame.
pub const FRAME_BYTES: usize = FRAME_PIXELS * 2;

/// Horizontal offset between controller memory and the visible area.
pub const GAP_X: u16 = 0;

/// Vertical offset between controller memory and the visible area.
/// The ST7789V2 RAM is 240x320; this 1.69" module exposes the 280 rows
/// starting 20 lines in.
pub const GAP_Y: u16 = 20;

/// SPI clock for the panel link. The controller tolerates more, but the
/// module wiring is only validated at 18 MHz.
pub const SPI_FREQ_HZ: u32 = 18_000_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_geometry() {
        assert_eq!(FRAME_PIXELS, 67_200);
        assert_eq!(FRAME_BYTES, 134_400);
    }

    #[test]
    fn test_gap_offset() {
        assert_eq!((GAP_X, GAP_Y), (0, 20));
    }
}
