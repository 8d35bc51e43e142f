//! Dirty-region compositing.
//!
//! The renderer is a pure function of [`DisplayState`]: given the set of
//! dirty regions it clears each one to the background and paints its layer
//! again. Nothing is cached between frames.
//!
//! # Update Strategy
//!
//! | Dirty set | Strategy |
//! |-----------|----------|
//! | contains `Window` | Clear the screen, paint every layer |
//! | any of the dial group | Clear the group's shared area once, paint dial then labels |
//! | anything else | Clear the region's rectangle, paint its layer |
//!
//! # Dial Group
//!
//! The temperature label sits inside the dial and the low/high labels hang
//! below it. Clearing any one of those rectangles would wipe pixels owned by
//! the others, so the group is always expanded and redrawn together, and
//! only the dial clears.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::dirty::{DirtyRegions, Region};
use crate::gauges::{Commands, activity_rings, battery_ring, temperature_dial};
use crate::layout::{dial_group_bounds, gauge_origin, region_bounds};
use crate::state::DisplayState;
use crate::styles::{LOCATION_FONT, MEDIUM_FONT, SMALL_FONT, TIME_FONT, TOP_CENTER, TOP_LEFT, TOP_RIGHT};
use crate::widgets::{draw_commands, draw_condition_icon, draw_label};

/// Redraw everything in `dirty`. An empty set draws nothing.
pub fn draw_dirty<D>(
    display: &mut D,
    state: &DisplayState,
    dirty: DirtyRegions,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if dirty.is_empty() {
        return;
    }
    if dirty.contains(Region::Window) {
        draw_full(display, state);
        return;
    }
    for region in dirty.expanded().iter() {
        if let Some(area) = clear_area(region) {
            fill(display, &area, state.palette.background());
        }
        paint_layer(display, state, region);
    }
}

/// Clear the screen and paint every layer.
pub fn draw_full<D>(
    display: &mut D,
    state: &DisplayState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill(display, &region_bounds(Region::Window), state.palette.background());
    for region in Region::ALL {
        paint_layer(display, state, region);
    }
}

/// Gauge draw commands for a gauge region, `None` for text and icon layers.
pub fn gauge_commands(
    state: &DisplayState,
    region: Region,
) -> Option<Commands> {
    match region {
        Region::TemperatureDial => Some(temperature_dial(state)),
        Region::Activity => Some(activity_rings(state)),
        Region::Battery => Some(battery_ring(state)),
        _ => None,
    }
}

/// Area to clear before painting `region`. Dial-group labels rely on the dial.
const fn clear_area(region: Region) -> Option<Rectangle> {
    match region {
        Region::Temperature | Region::Low | Region::High => None,
        Region::TemperatureDial => Some(dial_group_bounds()),
        other => Some(region_bounds(other)),
    }
}

fn fill<D>(
    display: &mut D,
    area: &Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}

fn paint_layer<D>(
    display: &mut D,
    state: &DisplayState,
    region: Region,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let palette = state.palette;
    let bounds = region_bounds(region);
    let labels = state.labels();

    match region {
        Region::Window => {},
        Region::Time => draw_label(display, &bounds, &state.time, TIME_FONT, palette.text(), TOP_RIGHT),
        Region::Day => draw_label(display, &bounds, &state.day_of_week, MEDIUM_FONT, palette.accent(), TOP_RIGHT),
        Region::Date => draw_label(display, &bounds, &state.day_of_month, MEDIUM_FONT, palette.text(), TOP_RIGHT),
        Region::ConditionIcon => draw_condition_icon(display, bounds.top_left, state.condition(), palette.text()),
        Region::Location => draw_label(display, &bounds, state.location(), LOCATION_FONT, palette.text(), TOP_LEFT),
        Region::Temperature => draw_label(display, &bounds, &labels.current, MEDIUM_FONT, palette.text(), TOP_CENTER),
        Region::Low => draw_label(display, &bounds, &labels.low, SMALL_FONT, palette.accent(), TOP_CENTER),
        Region::High => draw_label(display, &bounds, &labels.high, SMALL_FONT, palette.accent(), TOP_CENTER),
        Region::TemperatureDial | Region::Activity | Region::Battery => {
            if let (Some(origin), Some(commands)) = (gauge_origin(region), gauge_commands(state, region)) {
                draw_commands(display, origin, &commands);
            }
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
