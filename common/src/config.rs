//! Watchface configuration constants.
//!
//! Defaults apply at startup before the persisted snapshot is restored.
//! Everything here is compile-time; runtime overrides arrive as inbound
//! messages and are persisted by the reducer.
//!
//! # Compile-Time Validation
//!
//! Related constants carry `const` assertions, so a misconfigured range
//! (e.g. a dial that ends before it starts) fails the build.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Horizontal padding between the screen edge and text layers.
pub const PADDING: i32 = 4;

// =============================================================================
// Display State Defaults
// =============================================================================

/// Current temperature shown before the first weather update.
pub const DEFAULT_TEMPERATURE: i32 = 20;

/// Daily low shown before the first weather update.
pub const DEFAULT_LOW_TEMP: i32 = 15;

/// Daily high shown before the first weather update.
pub const DEFAULT_HIGH_TEMP: i32 = 25;

const _: () = assert!(DEFAULT_LOW_TEMP <= DEFAULT_TEMPERATURE);
const _: () = assert!(DEFAULT_TEMPERATURE <= DEFAULT_HIGH_TEMP);

/// Location label shown until the companion sends a name.
pub const DEFAULT_LOCATION: &str = "My Location";

/// Daily step goal (outer activity ring).
pub const DEFAULT_STEP_GOAL: i32 = 5000;

/// Daily move-minutes goal (middle activity ring).
pub const DEFAULT_MOVE_GOAL: i32 = 30;

/// Daily active-kilocalories goal (inner activity ring).
pub const DEFAULT_ACTIVE_GOAL: i32 = 300;

/// Battery level assumed until the provider is first peeked.
pub const DEFAULT_BATTERY_PERCENT: u8 = 100;

// =============================================================================
// Buffer Capacities
// =============================================================================

/// Maximum location length in bytes. Longer names are truncated.
pub const LOCATION_CAPACITY: usize = 63;

const _: () = assert!(DEFAULT_LOCATION.len() <= LOCATION_CAPACITY);

/// Capacity of each temperature label. Fits any `i32` ("-2147483648").
pub const LABEL_CAPACITY: usize = 12;

/// Capacity of the formatted time ("23:59").
pub const TIME_CAPACITY: usize = 8;

/// Maximum number of tuples accepted in one inbound batch.
pub const MAX_BATCH_TUPLES: usize = 16;

// =============================================================================
// Refresh Cadence
// =============================================================================

/// Minutes between weather requests unless the companion overrides it.
pub const DEFAULT_UPDATE_INTERVAL: i32 = 30;

/// Health metrics are polled when `minute % HEALTH_REFRESH_MINUTES == 0`.
pub const HEALTH_REFRESH_MINUTES: u8 = 5;

const _: () = assert!(DEFAULT_UPDATE_INTERVAL > 0);
const _: () = assert!(HEALTH_REFRESH_MINUTES > 0);

// =============================================================================
// Gauge Geometry
// =============================================================================

/// Side of every square gauge canvas, in pixels.
pub const GAUGE_SIZE: u32 = 41;

/// Center of the gauge canvas on both axes.
pub const GAUGE_CENTER: i32 = 20;

/// Radius of the temperature dial ring and of the indicator's path.
pub const DIAL_RADIUS: u32 = 18;

/// Stroke width of the temperature dial ring.
pub const DIAL_STROKE: u32 = 4;

/// Thickness of the background wedge that opens the bottom of the dial.
pub const DIAL_GAP_INSET: u32 = 6;

/// Angles bounding the dial's bottom gap, clockwise from 12 o'clock.
pub const DIAL_GAP_START_DEG: i32 = 127;
pub const DIAL_GAP_END_DEG: i32 = 233;

/// Indicator angle at `temperature == low`.
pub const DIAL_START_DEG: i32 = 235;

/// Indicator travel from low to high.
pub const DIAL_SWEEP_DEG: i32 = 250;

/// Radii of the indicator dot: background halo, then text-colored core.
pub const DIAL_DOT_HALO_RADIUS: u32 = 4;
pub const DIAL_DOT_RADIUS: u32 = 2;

/// Ring thickness of the activity and battery gauges.
pub const RING_INSET: u32 = 5;

/// Offset between nested activity rings.
pub const RING_STEP: u32 = 7;

const _: () = assert!(DIAL_GAP_START_DEG < DIAL_GAP_END_DEG);
const _: () = assert!(DIAL_GAP_END_DEG < DIAL_START_DEG);
const _: () = assert!(DIAL_START_DEG + DIAL_SWEEP_DEG - 360 < DIAL_GAP_START_DEG);
const _: () = assert!(GAUGE_CENTER as u32 * 2 + 1 == GAUGE_SIZE);
const _: () = assert!(DIAL_DOT_RADIUS < DIAL_DOT_HALO_RADIUS);
const _: () = assert!(GAUGE_SIZE > 4 * RING_STEP);

// =============================================================================
// Thresholds
// =============================================================================

/// Battery ring switches to the low-battery color at or below this percent.
pub const LOW_BATTERY_PERCENT: u8 = 20;

const _: () = assert!(LOW_BATTERY_PERCENT < DEFAULT_BATTERY_PERCENT);
