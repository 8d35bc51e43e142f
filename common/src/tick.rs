//! Minute-tick cadence.
//!
//! The host fires one tick per wall-clock minute. Every tick refreshes the
//! time strings; weather and health refreshes run on their own cadences,
//! keyed on the minute of the hour rather than on elapsed time so that they
//! line up with the clock after a restart.

use crate::config::{DEFAULT_UPDATE_INTERVAL, HEALTH_REFRESH_MINUTES};
use crate::dirty::{DirtyRegions, Region};

/// What a tick at a given minute should do beyond refreshing the time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickActions {
    pub request_weather: bool,
    pub refresh_health: bool,
}

/// Interval usable as a modulus. Non-positive values fall back to the default.
#[inline]
pub const fn effective_interval(minutes: i32) -> u32 {
    if minutes > 0 { minutes as u32 } else { DEFAULT_UPDATE_INTERVAL as u32 }
}

/// Decide the periodic work for `minute` (0-59).
pub fn tick_actions(
    minute: u8,
    update_interval: i32,
) -> TickActions {
    let minute = u32::from(minute);
    TickActions {
        request_weather: minute % effective_interval(update_interval) == 0,
        refresh_health: minute % u32::from(HEALTH_REFRESH_MINUTES) == 0,
    }
}

/// Regions every tick redraws.
pub const fn tick_dirty() -> DirtyRegions {
    DirtyRegions::of(Region::Time).union(DirtyRegions::of(Region::Day)).union(DirtyRegions::of(Region::Date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_on_interval_boundaries() {
        assert!(tick_actions(0, 30).request_weather);
        assert!(tick_actions(30, 30).request_weather);
        assert!(!tick_actions(15, 30).request_weather);
        assert!(tick_actions(45, 15).request_weather);
    }

    #[test]
    fn test_interval_longer_than_an_hour() {
        // Only minute 0 divides by 90
        assert!(tick_actions(0, 90).request_weather);
        assert!(!tick_actions(30, 90).request_weather);
    }

    #[test]
    fn test_non_positive_interval_falls_back() {
        assert_eq!(effective_interval(0), 30);
        assert_eq!(effective_interval(-5), 30);
        assert_eq!(effective_interval(1), 1);
        assert!(tick_actions(30, 0).request_weather);
        assert!(!tick_actions(10, -1).request_weather);
    }

    #[test]
    fn test_health_every_five_minutes() {
        assert!(tick_actions(0, 30).refresh_health);
        assert!(tick_actions(25, 30).refresh_health);
        assert!(!tick_actions(26, 30).refresh_health);
    }

    #[test]
    fn test_tick_dirty() {
        let dirty = tick_dirty();
        assert!(dirty.contains(Region::Time));
        assert!(dirty.contains(Region::Day));
        assert!(dirty.contains(Region::Date));
        assert!(!dirty.contains(Region::Battery));
    }
}
