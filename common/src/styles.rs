//! Fonts and text placement styles for the watchface layers.
//!
//! Colors come from the runtime palette, so only fonts and alignments are
//! `const`. Callers build `MonoTextStyle::new(FONT, color)` at draw time;
//! that is a font reference plus a color, nothing more.
//!
//! All placement styles use [`Baseline::Top`] so a layer's text is anchored
//! at the top edge of its region rectangle.

use embedded_graphics::{
    mono_font::{MonoFont, ascii::FONT_5X8},
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Placement
// =============================================================================

/// Anchored at the top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).baseline(Baseline::Top).build();

/// Anchored at the top-right corner.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).baseline(Baseline::Top).build();

/// Anchored at the top edge, horizontally centered.
pub const TOP_CENTER: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).baseline(Baseline::Top).build();

// =============================================================================
// Fonts
// =============================================================================

/// Time (`ProFont` 24pt).
pub const TIME_FONT: &MonoFont = &PROFONT_24_POINT;

/// Day, date and current temperature (`ProFont` 18pt).
pub const MEDIUM_FONT: &MonoFont = &PROFONT_18_POINT;

/// Location name (`ProFont` 12pt).
pub const LOCATION_FONT: &MonoFont = &PROFONT_12_POINT;

/// Low/high labels under the dial.
pub const SMALL_FONT: &MonoFont = &FONT_5X8;
