//! Color constants and conversions for the watchface palette.
//!
//! The companion sends colors packed as `0xRRGGBB` integers. They are decoded
//! into `Rgb565`, the native format of the target displays, by dropping the
//! low bits of each channel.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Default background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default text color on the black background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Watchface Colors
// =============================================================================

/// Dark gray (0x555555). Unfilled activity ring tracks.
pub const DARK_GRAY: Rgb565 = from_hex(0x0055_5555);

/// Sunset orange (0xFF5555). Battery ring at low charge.
pub const SUNSET_ORANGE: Rgb565 = from_hex(0x00FF_5555);

/// Medium aquamarine (0x55FFAA). Default accent.
pub const MEDIUM_AQUAMARINE: Rgb565 = from_hex(0x0055_FFAA);

// =============================================================================
// Conversions
// =============================================================================

/// Decode a packed `0xRRGGBB` color. Bits above 24 are ignored.
pub const fn from_hex(packed: i32) -> Rgb565 {
    let raw = packed as u32;
    let r = ((raw >> 16) & 0xFF) as u8;
    let g = ((raw >> 8) & 0xFF) as u8;
    let b = (raw & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Pick black or white, whichever reads better over `background`.
#[inline]
pub fn legible_over(background: Rgb565) -> Rgb565 {
    if luminance(background) < 128 { WHITE } else { BLACK }
}

/// Perceptual luminance (ITU-R BT.601) of an Rgb565 color, 0-255.
///
/// Channels are expanded to 8 bits by replicating their high bits, then
/// weighted `(77*R + 150*G + 29*B) >> 8`.
#[inline]
pub fn luminance(color: Rgb565) -> u32 {
    let raw = color.into_storage();
    let r5 = u32::from((raw >> 11) & 0x1F);
    let g6 = u32::from((raw >> 5) & 0x3F);
    let b5 = u32::from(raw & 0x1F);

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (r8 * 77 + g8 * 150 + b8 * 29) >> 8
}

// =============================================================================
// Tests
// =============================================================================
