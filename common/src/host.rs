//! Host collaborator seams.
//!
//! The watchface core never talks to hardware or the OS directly. Health
//! metrics, battery level and the outbound message channel are reached
//! through these traits; the clock lives in [`crate::clock`] and storage in
//! [`crate::persist`].

use crate::message::OutboundMessage;

/// Read-only daily health totals. Polled, never pushed.
pub trait HealthProvider {
    /// Steps taken today.
    fn steps_today(&self) -> i32;

    /// Seconds of activity today.
    fn active_seconds_today(&self) -> i32;

    /// Active kilocalories burned today.
    fn active_kcal_today(&self) -> i32;
}

/// Synchronous battery peek. Changes arrive as battery events.
pub trait BatteryProvider {
    /// Charge in percent, 0-100.
    fn peek(&self) -> u8;
}

/// Outbound message channel to the companion.
pub trait Outbox {
    type Error: core::fmt::Debug;

    fn send(
        &mut self,
        message: OutboundMessage,
    ) -> Result<(), Self::Error>;
}

/// One poll of the health provider, in display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HealthSample {
    pub steps: i32,
    pub move_minutes: i32,
    pub active_calories: i32,
}

impl HealthSample {
    pub fn poll<H: HealthProvider>(health: &H) -> Self {
        Self {
            steps: health.steps_today().max(0),
            move_minutes: health.active_seconds_today().max(0) / 60,
            active_calories: health.active_kcal_today().max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHealth(i32, i32, i32);

    impl HealthProvider for FixedHealth {
        fn steps_today(&self) -> i32 { self.0 }

        fn active_seconds_today(&self) -> i32 { self.1 }

        fn active_kcal_today(&self) -> i32 { self.2 }
    }

    #[test]
    fn test_poll_converts_seconds_to_minutes() {
        let sample = HealthSample::poll(&FixedHealth(4200, 1799, 210));
        assert_eq!(sample.steps, 4200);
        assert_eq!(sample.move_minutes, 29, "1799 s is 29 whole minutes");
        assert_eq!(sample.active_calories, 210);
    }

    #[test]
    fn test_poll_clamps_negative_readings() {
        let sample = HealthSample::poll(&FixedHealth(-1, -60, -5));
        assert_eq!(sample, HealthSample::default());
    }
}
