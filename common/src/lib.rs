//! Common logic for the ST7789V2 color-cycle demo.
//!
//! This crate contains the platform-agnostic code shared between the
//! simulator and the Pico 2 hardware implementation:
//!
//! - [`colors`]: RGB565 color constants for the demo palette
//! - [`config`]: Panel geometry and bus timing constants
//! - [`schedule`]: The data-driven (color, hold) demo sequence
//! - [`fill`]: Frame fill and buffer lifecycle, behind pluggable seams
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while the firmware runs as `no_std`.

#![cfg_attr(not(test), no_std)]

pub mod colors;
pub mod config;
pub mod fill;
pub mod schedule;

// Re-export commonly used items
pub use colors::*;
pub use config::*;
