//! Wall-clock snapshot and the derived time/date strings.

use core::fmt::Write;

use heapless::String;

use crate::config::TIME_CAPACITY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Weekday {
    #[default]
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Weekday from days since Monday (0 = Monday). Wraps modulo 7.
    pub const fn from_days_since_monday(days: u32) -> Self {
        match days % 7 {
            0 => Self::Mon,
            1 => Self::Tue,
            2 => Self::Wed,
            3 => Self::Thu,
            4 => Self::Fri,
            5 => Self::Sat,
            _ => Self::Sun,
        }
    }

    /// Three-letter abbreviation, as shown in the day layer.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

/// Local wall-clock time at minute resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallTime {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    pub weekday: Weekday,
    /// Day of month, 1-31
    pub day: u8,
}

impl WallTime {
    pub const fn new(
        hour: u8,
        minute: u8,
        weekday: Weekday,
        day: u8,
    ) -> Self {
        Self {
            hour,
            minute,
            weekday,
            day,
        }
    }
}

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> WallTime;

    /// Host preference for 24-hour time.
    fn is_24h_style(&self) -> bool;
}

/// `HH:MM` in 24-hour style, zero-padded `II:MM` (01-12) otherwise.
pub fn format_time(
    time: &WallTime,
    twenty_four_hour: bool,
) -> String<TIME_CAPACITY> {
    let hour = if twenty_four_hour {
        time.hour
    } else {
        match time.hour % 12 {
            0 => 12,
            h => h,
        }
    };
    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}", hour, time.minute);
    out
}

/// Two-digit day of month.
pub fn format_day_of_month(time: &WallTime) -> String<3> {
    let mut out = String::new();
    let _ = write!(out, "{:02}", time.day);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_24h() {
        let t = WallTime::new(0, 5, Weekday::Mon, 1);
        assert_eq!(format_time(&t, true).as_str(), "00:05");

        let t = WallTime::new(23, 59, Weekday::Mon, 1);
        assert_eq!(format_time(&t, true).as_str(), "23:59");
    }

    #[test]
    fn test_format_12h() {
        let midnight = WallTime::new(0, 0, Weekday::Mon, 1);
        assert_eq!(format_time(&midnight, false).as_str(), "12:00");

        let noon = WallTime::new(12, 30, Weekday::Mon, 1);
        assert_eq!(format_time(&noon, false).as_str(), "12:30");

        let evening = WallTime::new(21, 7, Weekday::Mon, 1);
        assert_eq!(format_time(&evening, false).as_str(), "09:07");
    }

    #[test]
    fn test_day_of_month_zero_padded() {
        assert_eq!(format_day_of_month(&WallTime::new(0, 0, Weekday::Mon, 3)).as_str(), "03");
        assert_eq!(format_day_of_month(&WallTime::new(0, 0, Weekday::Mon, 28)).as_str(), "28");
    }

    #[test]
    fn test_weekday_from_days() {
        assert_eq!(Weekday::from_days_since_monday(0), Weekday::Mon);
        assert_eq!(Weekday::from_days_since_monday(6), Weekday::Sun);
        assert_eq!(Weekday::from_days_since_monday(7), Weekday::Mon);
        assert_eq!(Weekday::Thu.abbrev(), "Thu");
    }
}
