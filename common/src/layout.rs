//! Screen layout.
//!
//! Every [`Region`] owns a fixed rectangle on the 144x168 screen. Redrawing
//! a region clears its rectangle to the background and paints its layer
//! again, so rectangles must cover everything the layer can draw.
//!
//! ```text
//!  0                                            144
//!  +--------------------------------------------+ 0
//!  |                              Mon  07       |
//!  |                                            | 20
//!  |                                  12:34     |
//!  |                                            | 72
//!  |   [icon]  Location name                    | 85
//!  |                                            |
//!  |  ( dial )      ( rings )      ( batt )     | 115
//!  |    20                                      |
//!  |   15 25                                    | 156
//!  +--------------------------------------------+ 168
//! ```

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{GAUGE_SIZE, PADDING, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::dirty::Region;

// =============================================================================
// Anchors
// =============================================================================

/// Top of the time layer.
pub const TIME_Y: i32 = 20;

/// Height of the time layer.
pub const TIME_HEIGHT: u32 = 52;

/// Row shared by the condition icon and the location label.
pub const WEATHER_ROW_Y: i32 = 85;

/// Side of the square condition icon.
pub const ICON_SIZE: u32 = 21;

/// Row shared by the three gauges.
pub const GAUGE_ROW_Y: i32 = 115;

/// Left edges of the three gauges.
pub const DIAL_X: i32 = 5;
pub const ACTIVITY_X: i32 = 52;
pub const BATTERY_X: i32 = 99;

/// Top of the temperature label, centered over the dial.
pub const TEMPERATURE_Y: i32 = 122;

/// Top of the low/high labels under the dial.
pub const LOW_HIGH_Y: i32 = 145;

/// Height of the low/high labels.
pub const LOW_HIGH_HEIGHT: u32 = 15;

const _: () = assert!(DIAL_X + GAUGE_SIZE as i32 <= ACTIVITY_X);
const _: () = assert!(ACTIVITY_X + GAUGE_SIZE as i32 <= BATTERY_X);
const _: () = assert!(BATTERY_X + GAUGE_SIZE as i32 <= SCREEN_WIDTH as i32 - PADDING);
const _: () = assert!(GAUGE_ROW_Y + GAUGE_SIZE as i32 <= SCREEN_HEIGHT as i32);
const _: () = assert!(TIME_Y + TIME_HEIGHT as i32 <= WEATHER_ROW_Y);
const _: () = assert!(LOW_HIGH_Y + LOW_HIGH_HEIGHT as i32 <= SCREEN_HEIGHT as i32);

// =============================================================================
// Regions
// =============================================================================

const fn rect(
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
}

/// Top-left of a gauge canvas.
pub const fn gauge_origin(region: Region) -> Option<Point> {
    match region {
        Region::TemperatureDial => Some(Point::new(DIAL_X, GAUGE_ROW_Y)),
        Region::Activity => Some(Point::new(ACTIVITY_X, GAUGE_ROW_Y)),
        Region::Battery => Some(Point::new(BATTERY_X, GAUGE_ROW_Y)),
        _ => None,
    }
}

/// Screen rectangle owned by `region`.
pub const fn region_bounds(region: Region) -> Rectangle {
    let text_width = SCREEN_WIDTH - 2 * PADDING as u32;
    match region {
        Region::Window => rect(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
        Region::Time => rect(PADDING, TIME_Y, text_width, TIME_HEIGHT),
        Region::Day => rect(76, 0, 37, 21),
        Region::Date => rect(114, 0, 26, 21),
        Region::ConditionIcon => rect(9, WEATHER_ROW_Y, ICON_SIZE, ICON_SIZE),
        Region::Location => rect(34, WEATHER_ROW_Y, SCREEN_WIDTH - 34 - PADDING as u32, 21),
        Region::TemperatureDial => rect(DIAL_X, GAUGE_ROW_Y, GAUGE_SIZE, GAUGE_SIZE),
        Region::Temperature => rect(DIAL_X, TEMPERATURE_Y, GAUGE_SIZE, 20),
        Region::Low => rect(DIAL_X, LOW_HIGH_Y, 20, LOW_HIGH_HEIGHT),
        Region::High => rect(DIAL_X + 21, LOW_HIGH_Y, 20, LOW_HIGH_HEIGHT),
        Region::Activity => rect(ACTIVITY_X, GAUGE_ROW_Y, GAUGE_SIZE, GAUGE_SIZE),
        Region::Battery => rect(BATTERY_X, GAUGE_ROW_Y, GAUGE_SIZE, GAUGE_SIZE),
    }
}

/// Area shared by the dial and the labels drawn over and under it.
pub const fn dial_group_bounds() -> Rectangle {
    let bottom = LOW_HIGH_Y + LOW_HIGH_HEIGHT as i32;
    rect(DIAL_X, GAUGE_ROW_Y, GAUGE_SIZE, (bottom - GAUGE_ROW_Y) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_on_screen() {
        let screen = region_bounds(Region::Window);
        for r in Region::ALL {
            let b = region_bounds(r);
            assert!(
                screen.contains(b.top_left) && b.bottom_right().is_some_and(|p| screen.contains(p)),
                "{r:?} leaves the screen: {b:?}"
            );
        }
    }

    #[test]
    fn test_gauges_do_not_overlap() {
        let gauges = [Region::TemperatureDial, Region::Activity, Region::Battery];
        for (i, a) in gauges.iter().enumerate() {
            for b in &gauges[i + 1..] {
                let overlap = region_bounds(*a).intersection(&region_bounds(*b));
                assert_eq!(overlap.size, Size::zero(), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_gauge_origin_matches_bounds() {
        for r in [Region::TemperatureDial, Region::Activity, Region::Battery] {
            assert_eq!(gauge_origin(r), Some(region_bounds(r).top_left));
        }
        assert_eq!(gauge_origin(Region::Time), None);
    }

    #[test]
    fn test_dial_group_shares_pixels() {
        let dial = region_bounds(Region::TemperatureDial);
        for r in [Region::Temperature, Region::Low, Region::High] {
            let overlap = dial.intersection(&region_bounds(r));
            assert!(overlap.size != Size::zero(), "{r:?} should overlap the dial");
        }
    }

    #[test]
    fn test_dial_group_bounds_cover_members() {
        let group = dial_group_bounds();
        for r in Region::DIAL_GROUP {
            let b = region_bounds(r);
            assert!(
                group.contains(b.top_left) && b.bottom_right().is_some_and(|p| group.contains(p)),
                "{r:?} sticks out of the dial group"
            );
        }
    }

    #[test]
    fn test_day_and_date_share_top_row() {
        let day = region_bounds(Region::Day);
        let date = region_bounds(Region::Date);
        assert_eq!(day.top_left.y, date.top_left.y);
        assert!(day.top_left.x + day.size.width as i32 <= date.top_left.x);
    }
}
