//! Desktop stand-ins for the watch's host services.

use std::collections::VecDeque;

use chrono::{Datelike, Local, Timelike};
use modulus_common::clock::{Clock, WallTime, Weekday};
use modulus_common::host::{BatteryProvider, HealthProvider, Outbox};
use modulus_common::message::{OutboundMessage, TransportFailure};

use crate::config::OUTBOX_CAPACITY;

// =============================================================================
// Clock
// =============================================================================

/// Local system time via `chrono`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    twenty_four_hour: Option<bool>,
}

impl SystemClock {
    /// `force` overrides the host's 12/24-hour preference.
    pub const fn new(force: Option<bool>) -> Self { Self { twenty_four_hour: force } }
}

impl Clock for SystemClock {
    fn now(&self) -> WallTime { wall_time(&Local::now()) }

    /// Desktops expose no portable preference; 24-hour unless forced.
    fn is_24h_style(&self) -> bool { self.twenty_four_hour.unwrap_or(true) }
}

/// Reduce a chrono timestamp to minute resolution.
pub fn wall_time<T: Datelike + Timelike>(t: &T) -> WallTime {
    WallTime::new(
        t.hour() as u8,
        t.minute() as u8,
        Weekday::from_days_since_monday(t.weekday().num_days_from_monday()),
        t.day() as u8,
    )
}

// =============================================================================
// Health
// =============================================================================

/// Pedometer fed from the keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimHealth {
    steps: i32,
}

impl SimHealth {
    pub const fn add_steps(
        &mut self,
        steps: i32,
    ) {
        self.steps = self.steps.saturating_add(steps);
    }
}

impl HealthProvider for SimHealth {
    fn steps_today(&self) -> i32 { self.steps }

    /// Roughly 100 steps per active minute.
    fn active_seconds_today(&self) -> i32 { self.steps.saturating_mul(60) / 100 }

    /// Roughly one kilocalorie per 25 steps.
    fn active_kcal_today(&self) -> i32 { self.steps / 25 }
}

// =============================================================================
// Battery
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimBattery {
    percent: u8,
}

impl SimBattery {
    pub fn new(percent: u8) -> Self { Self { percent: percent.min(100) } }

    /// Move the charge by `delta` percent, clamped to 0-100. Returns the new charge.
    pub fn adjust(
        &mut self,
        delta: i16,
    ) -> u8 {
        self.percent = (i16::from(self.percent) + delta).clamp(0, 100) as u8;
        self.percent
    }
}

impl BatteryProvider for SimBattery {
    fn peek(&self) -> u8 { self.percent }
}

// =============================================================================
// Outbox
// =============================================================================

/// Bounded queue standing in for the phone link.
///
/// Sends only enqueue; the main loop drains the queue, delivers each message
/// to the simulated companion and reports the outcome back as sent/failed
/// events.
#[derive(Debug, Default)]
pub struct SimOutbox {
    queue: VecDeque<OutboundMessage>,
}

impl SimOutbox {
    pub fn new() -> Self { Self::default() }

    /// Take every pending message, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = OutboundMessage> + '_ { self.queue.drain(..) }
}

impl Outbox for SimOutbox {
    type Error = TransportFailure;

    fn send(
        &mut self,
        message: OutboundMessage,
    ) -> Result<(), TransportFailure> {
        if self.queue.len() >= OUTBOX_CAPACITY {
            return Err(TransportFailure::BufferOverflow);
        }
        self.queue.push_back(message);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use modulus_common::host::HealthSample;

    #[test]
    fn test_wall_time_from_chrono() {
        // 2024-03-14 was a Thursday
        let t = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_hms_opt(21, 7, 59).unwrap();
        assert_eq!(wall_time(&t), WallTime::new(21, 7, Weekday::Thu, 14));
    }

    #[test]
    fn test_clock_style_override() {
        assert!(SystemClock::new(None).is_24h_style(), "24-hour by default");
        assert!(!SystemClock::new(Some(false)).is_24h_style());
    }

    #[test]
    fn test_health_derives_minutes_and_calories() {
        let mut health = SimHealth::default();
        health.add_steps(5000);
        let sample = HealthSample::poll(&health);
        assert_eq!(sample.steps, 5000);
        assert_eq!(sample.move_minutes, 50);
        assert_eq!(sample.active_calories, 200);
    }

    #[test]
    fn test_battery_adjust_clamps() {
        let mut battery = SimBattery::new(97);
        assert_eq!(battery.adjust(5), 100);
        assert_eq!(battery.adjust(-120), 0);
        assert_eq!(battery.peek(), 0);
        assert_eq!(SimBattery::new(250).peek(), 100, "Clamped on construction");
    }

    #[test]
    fn test_outbox_queues_until_full() {
        let mut outbox = SimOutbox::new();
        for _ in 0..OUTBOX_CAPACITY {
            assert!(outbox.send(OutboundMessage::RequestWeather).is_ok());
        }
        assert_eq!(outbox.send(OutboundMessage::RequestWeather), Err(TransportFailure::BufferOverflow));

        assert_eq!(outbox.drain().count(), OUTBOX_CAPACITY);
        assert_eq!(outbox.drain().count(), 0, "Drained");
    }
}
