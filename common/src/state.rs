//! Display state: every scalar the watchface draws from.
//!
//! A single [`DisplayState`] is owned by the application shell, mutated by
//! the reducer and the tick handler, and read by the renderer.
//!
//! # Lifecycle
//!
//! 1. [`DisplayState::new`] establishes the defaults from [`crate::config`].
//! 2. [`DisplayState::restore`] overrides each field whose key exists in the
//!    persisted snapshot.
//! 3. Inbound messages override fields at any time (see [`crate::reducer`]).
//!
//! Time strings, health counters and the battery level are never persisted.

use heapless::String;

use crate::clock::{WallTime, format_day_of_month, format_time};
use crate::colors::{BLACK, MEDIUM_AQUAMARINE, WHITE, from_hex, legible_over};
use crate::config::{
    DEFAULT_ACTIVE_GOAL,
    DEFAULT_BATTERY_PERCENT,
    DEFAULT_HIGH_TEMP,
    DEFAULT_LOCATION,
    DEFAULT_LOW_TEMP,
    DEFAULT_MOVE_GOAL,
    DEFAULT_STEP_GOAL,
    DEFAULT_TEMPERATURE,
    DEFAULT_UPDATE_INTERVAL,
    LABEL_CAPACITY,
    LOCATION_CAPACITY,
    TIME_CAPACITY,
};
use crate::host::HealthSample;
use crate::keys::MessageKey;
use crate::persist::Persistence;
use crate::text::{int_label, truncated};
use crate::weather::Condition;
use embedded_graphics::pixelcolor::Rgb565;

// =============================================================================
// Palette
// =============================================================================

/// The three watchface colors. `text` is always derived from `background`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    background: Rgb565,
    text: Rgb565,
    accent: Rgb565,
}

impl Palette {
    pub fn new(
        background: Rgb565,
        accent: Rgb565,
    ) -> Self {
        Self {
            background,
            text: legible_over(background),
            accent,
        }
    }

    #[inline]
    pub const fn background(&self) -> Rgb565 { self.background }

    #[inline]
    pub const fn text(&self) -> Rgb565 { self.text }

    #[inline]
    pub const fn accent(&self) -> Rgb565 { self.accent }

    /// Change the background and recompute the legible text color.
    pub fn set_background(
        &mut self,
        background: Rgb565,
    ) {
        self.background = background;
        self.text = legible_over(background);
    }

    pub const fn set_accent(
        &mut self,
        accent: Rgb565,
    ) {
        self.accent = accent;
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BLACK,
            text: WHITE,
            accent: MEDIUM_AQUAMARINE,
        }
    }
}

// =============================================================================
// Weather
// =============================================================================

/// Current temperature and today's range, in whole degrees.
///
/// The producer does not guarantee `low <= current <= high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Temperature {
    pub current: i32,
    pub low: i32,
    pub high: i32,
}

impl Default for Temperature {
    fn default() -> Self {
        Self {
            current: DEFAULT_TEMPERATURE,
            low: DEFAULT_LOW_TEMP,
            high: DEFAULT_HIGH_TEMP,
        }
    }
}

/// Pre-formatted labels for the three temperature text layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemperatureLabels {
    pub current: String<LABEL_CAPACITY>,
    pub low: String<LABEL_CAPACITY>,
    pub high: String<LABEL_CAPACITY>,
}

impl TemperatureLabels {
    pub fn from_temperature(t: &Temperature) -> Self {
        Self {
            current: int_label(t.current),
            low: int_label(t.low),
            high: int_label(t.high),
        }
    }
}

// =============================================================================
// Activity
// =============================================================================

/// Today's activity counters and the goals they are measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub steps: i32,
    pub step_goal: i32,
    pub move_minutes: i32,
    pub move_goal: i32,
    pub active_calories: i32,
    pub active_goal: i32,
}

impl Default for Activity {
    fn default() -> Self {
        Self {
            steps: 0,
            step_goal: DEFAULT_STEP_GOAL,
            move_minutes: 0,
            move_goal: DEFAULT_MOVE_GOAL,
            active_calories: 0,
            active_goal: DEFAULT_ACTIVE_GOAL,
        }
    }
}

// =============================================================================
// Display State
// =============================================================================

/// Everything the renderer needs, owned in one place.
#[derive(Clone, Debug)]
pub struct DisplayState {
    pub time: String<TIME_CAPACITY>,
    pub day_of_week: String<4>,
    pub day_of_month: String<3>,
    temperature: Temperature,
    labels: TemperatureLabels,
    /// Raw index as received. Use [`condition`](Self::condition) to look it up.
    pub condition_index: i32,
    location: String<LOCATION_CAPACITY>,
    pub activity: Activity,
    battery_percent: u8,
    /// Raw minutes as received. See [`crate::tick::effective_interval`].
    pub weather_update_interval: i32,
    pub palette: Palette,
}

impl DisplayState {
    /// Defaults, before any persisted value is applied.
    pub fn new() -> Self {
        let temperature = Temperature::default();
        Self {
            time: truncated("00:00"),
            day_of_week: truncated("Mon"),
            day_of_month: truncated("01"),
            labels: TemperatureLabels::from_temperature(&temperature),
            temperature,
            condition_index: Condition::Clear.index(),
            location: truncated(DEFAULT_LOCATION),
            activity: Activity::default(),
            battery_percent: DEFAULT_BATTERY_PERCENT,
            weather_update_interval: DEFAULT_UPDATE_INTERVAL,
            palette: Palette::default(),
        }
    }

    /// Defaults overridden by whatever the store holds.
    pub fn restored<P: Persistence>(store: &P) -> Self {
        let mut state = Self::new();
        state.restore(store);
        state
    }

    /// Override every field whose key exists in `store`.
    ///
    /// Temperature keys are restored independently: each was persisted on
    /// its own, so a store may legitimately hold only some of them.
    pub fn restore<P: Persistence>(
        &mut self,
        store: &P,
    ) {
        if let Some(minutes) = store.read_int(MessageKey::UpdateInterval) {
            self.weather_update_interval = minutes;
        }
        if let Some(packed) = store.read_int(MessageKey::BackgroundColour) {
            self.palette.set_background(from_hex(packed));
        }
        if let Some(packed) = store.read_int(MessageKey::AccentColour) {
            self.palette.set_accent(from_hex(packed));
        }
        if let Some(goal) = store.read_int(MessageKey::StepGoal) {
            self.activity.step_goal = goal;
        }
        if let Some(goal) = store.read_int(MessageKey::MoveGoal) {
            self.activity.move_goal = goal;
        }
        if let Some(goal) = store.read_int(MessageKey::CalGoal) {
            self.activity.active_goal = goal;
        }
        if let Some(index) = store.read_int(MessageKey::Conditions) {
            self.condition_index = index;
        }
        if let Some(location) = store.read_string::<LOCATION_CAPACITY>(MessageKey::LocationName) {
            self.location = location;
        }

        let mut temperature = self.temperature;
        if let Some(v) = store.read_int(MessageKey::CurTemp) {
            temperature.current = v;
        }
        if let Some(v) = store.read_int(MessageKey::LowTemp) {
            temperature.low = v;
        }
        if let Some(v) = store.read_int(MessageKey::HighTemp) {
            temperature.high = v;
        }
        self.set_temperature(temperature);

        log::info!(
            "restored state: {}C [{}..{}], interval {} min",
            temperature.current,
            temperature.low,
            temperature.high,
            self.weather_update_interval
        );
    }

    // -------------------------------------------------------------------------
    // Temperature
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn temperature(&self) -> &Temperature { &self.temperature }

    #[inline]
    pub const fn labels(&self) -> &TemperatureLabels { &self.labels }

    /// Replace the whole temperature triple and regenerate its labels.
    pub fn set_temperature(
        &mut self,
        temperature: Temperature,
    ) {
        self.temperature = temperature;
        self.labels = TemperatureLabels::from_temperature(&temperature);
    }

    // -------------------------------------------------------------------------
    // Location & Conditions
    // -------------------------------------------------------------------------

    #[inline]
    pub fn location(&self) -> &str { &self.location }

    /// Copy `name` into the bounded buffer, truncating on a char boundary.
    pub fn set_location(
        &mut self,
        name: &str,
    ) {
        self.location = truncated(name);
    }

    /// Icon for the current index. Out-of-range indices show [`Condition::Clear`].
    #[inline]
    pub const fn condition(&self) -> Condition { Condition::from_index_or_default(self.condition_index) }

    // -------------------------------------------------------------------------
    // Clock, Health, Battery
    // -------------------------------------------------------------------------

    /// Recompute the time, weekday and day-of-month strings.
    pub fn set_time(
        &mut self,
        now: &WallTime,
        twenty_four_hour: bool,
    ) {
        self.time = format_time(now, twenty_four_hour);
        self.day_of_week = truncated(now.weekday.abbrev());
        self.day_of_month = format_day_of_month(now);
    }

    pub const fn set_health(
        &mut self,
        sample: HealthSample,
    ) {
        self.activity.steps = sample.steps;
        self.activity.move_minutes = sample.move_minutes;
        self.activity.active_calories = sample.active_calories;
    }

    #[inline]
    pub const fn battery_percent(&self) -> u8 { self.battery_percent }

    /// Set the charge level, saturating at 100.
    pub fn set_battery_percent(
        &mut self,
        percent: u8,
    ) {
        self.battery_percent = percent.min(100);
    }
}

impl Default for DisplayState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
