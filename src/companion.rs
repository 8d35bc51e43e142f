//! Simulated phone companion.
//!
//! Answers weather requests with canned observations the way the phone app
//! answers them with live ones: temperatures rounded to whole degrees in the
//! configured unit, the WMO weather code reduced to an icon index, and the
//! location name. Codes without an icon leave CONDITIONS out of the batch.
//!
//! It also plays the settings page, pushing one setting per key press.

use modulus_common::keys::MessageKey;
use modulus_common::message::{InboundBatch, Value};
use modulus_common::weather::Condition;

use crate::config::{
    ACCENT_CYCLE,
    BACKGROUND_CYCLE,
    INTERVAL_CYCLE,
    STEP_GOAL_INCREMENT,
    STEP_GOAL_MAX,
    STEP_GOAL_MIN,
};

/// Temperature unit the companion reports in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    /// Convert a Celsius reading and round to whole degrees.
    pub fn from_celsius(
        self,
        celsius: f32,
    ) -> i32 {
        let value = match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        };
        value.round() as i32
    }
}

/// One upstream forecast in Celsius with its WMO weather code.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Observation {
    current: f32,
    low: f32,
    high: f32,
    wmo_code: i32,
}

/// Forecasts handed out in turn, one per request.
const OBSERVATIONS: [Observation; 7] = [
    Observation { current: 18.4, low: 12.6, high: 21.5, wmo_code: 1 },
    Observation { current: 15.2, low: 11.0, high: 17.8, wmo_code: 3 },
    Observation { current: 9.6, low: 7.1, high: 11.3, wmo_code: 45 },
    Observation { current: 11.8, low: 9.4, high: 13.2, wmo_code: 63 },
    Observation { current: -2.3, low: -6.7, high: 0.4, wmo_code: 73 },
    Observation { current: 24.9, low: 19.5, high: 31.2, wmo_code: 95 },
    Observation { current: 6.5, low: 4.0, high: 8.2, wmo_code: 10 },
];

/// Weather reply for one request, in the companion's unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherReport {
    pub current: i32,
    pub low: i32,
    pub high: i32,
    pub condition: Option<Condition>,
    pub location: String,
}

impl WeatherReport {
    /// The inbound batch carrying this report.
    pub fn batch(&self) -> InboundBatch<'_> {
        let mut batch = InboundBatch::new()
            .with(MessageKey::CurTemp, Value::Int(self.current))
            .with(MessageKey::HighTemp, Value::Int(self.high))
            .with(MessageKey::LowTemp, Value::Int(self.low));
        if let Some(condition) = self.condition {
            batch.push(MessageKey::Conditions, Value::Int(condition.index()));
        }
        batch.push(MessageKey::Location, Value::Str(&self.location));
        batch
    }
}

/// Companion state: unit, location, connection and settings cursors.
#[derive(Clone, Debug)]
pub struct SimCompanion {
    units: Units,
    location: String,
    connected: bool,
    next_observation: usize,
    background: usize,
    accent: usize,
    interval: usize,
    step_goal: i32,
}

impl SimCompanion {
    pub fn new(
        units: Units,
        location: &str,
    ) -> Self {
        Self {
            units,
            location: location.to_owned(),
            connected: true,
            next_observation: 0,
            background: 0,
            accent: 0,
            interval: 1,
            step_goal: STEP_GOAL_MIN,
        }
    }

    #[inline]
    pub const fn is_connected(&self) -> bool { self.connected }

    /// Flip the phone link. Returns the new state.
    pub const fn toggle_connection(&mut self) -> bool {
        self.connected = !self.connected;
        self.connected
    }

    /// Fetch the next canned forecast.
    pub fn weather(&mut self) -> WeatherReport {
        let obs = OBSERVATIONS[self.next_observation];
        self.next_observation = (self.next_observation + 1) % OBSERVATIONS.len();

        let condition = Condition::from_wmo_code(obs.wmo_code);
        if condition.is_none() {
            log::debug!("WMO code {} has no icon", obs.wmo_code);
        }
        WeatherReport {
            current: self.units.from_celsius(obs.current),
            low: self.units.from_celsius(obs.low),
            high: self.units.from_celsius(obs.high),
            condition,
            location: self.location.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Settings page
    // -------------------------------------------------------------------------

    pub fn next_background(&mut self) -> InboundBatch<'static> {
        self.background = (self.background + 1) % BACKGROUND_CYCLE.len();
        InboundBatch::new().with(MessageKey::BackgroundColour, Value::Int(BACKGROUND_CYCLE[self.background]))
    }

    pub fn next_accent(&mut self) -> InboundBatch<'static> {
        self.accent = (self.accent + 1) % ACCENT_CYCLE.len();
        InboundBatch::new().with(MessageKey::AccentColour, Value::Int(ACCENT_CYCLE[self.accent]))
    }

    /// Raise the step goal, wrapping back to the minimum past the maximum.
    pub fn raise_step_goal(&mut self) -> InboundBatch<'static> {
        self.step_goal += STEP_GOAL_INCREMENT;
        if self.step_goal > STEP_GOAL_MAX {
            self.step_goal = STEP_GOAL_MIN;
        }
        InboundBatch::new().with(MessageKey::StepGoal, Value::Int(self.step_goal))
    }

    pub fn next_interval(&mut self) -> InboundBatch<'static> {
        self.interval = (self.interval + 1) % INTERVAL_CYCLE.len();
        InboundBatch::new().with(MessageKey::UpdateInterval, Value::Int(INTERVAL_CYCLE[self.interval]))
    }

    /// A saved API key. The watch only checks for its presence.
    pub fn api_key(&self) -> InboundBatch<'static> {
        InboundBatch::new().with(MessageKey::OwmApiKey, Value::Str("simulated-key"))
    }
}

// =============================================================================
// Tests
// =============================================================================
