//! Color constants for the fill demo.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to the ST7789V2 and goes onto the wire without
//! conversion, so the raw storage values of these constants are exactly
//! what the panel receives.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure red (31, 0, 0). First entry of the demo schedule.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure white (31, 63, 31). Appears twice per schedule cycle.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

// =============================================================================
// Custom Colors (demo-specific)
// =============================================================================

/// Pale mint green (21, 61, 16), raw 0xAFB0.
pub const MINT: Rgb565 = Rgb565::new(21, 61, 16);

/// Washed-out pink (31, 31, 27), raw 0xFBFB.
pub const ORCHID: Rgb565 = Rgb565::new(31, 31, 27);

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;

    #[test]
    fn test_raw_values_match_panel_literals() {
        assert_eq!(RED.into_storage(), 0xF800);
        assert_eq!(WHITE.into_storage(), 0xFFFF);
        assert_eq!(BLACK.into_storage(), 0x0000);
        assert_eq!(MINT.into_storage(), 0xAFB0);
        assert_eq!(ORCHID.into_storage(), 0xFBFB);
    }
}
