//! Simulator configuration.
//!
//! These constants use `std::time::Duration` and host-only defaults, so they
//! live here rather than in the common crate.

use std::time::Duration;

// =============================================================================
// Window
// =============================================================================

/// Title of the SDL window.
pub const WINDOW_TITLE: &str = "Modulus";

/// Default pixel scale of the simulator window.
pub const DEFAULT_SCALE: u32 = 3;

/// Largest accepted pixel scale.
pub const MAX_SCALE: u32 = 8;

/// Target frame time (~50 FPS). The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

const _: () = assert!(DEFAULT_SCALE >= 1 && DEFAULT_SCALE <= MAX_SCALE);

// =============================================================================
// Host Defaults
// =============================================================================

/// Default JSON file backing the persisted settings.
pub const DEFAULT_STORE_FILE: &str = "modulus-store.json";

/// Location the simulated companion reports when none is given.
pub const DEFAULT_LOCATION: &str = "My Location";

/// Battery charge at start-up, in percent.
pub const DEFAULT_BATTERY: u8 = 80;

/// Battery change per key press, in percent.
pub const BATTERY_STEP: u8 = 5;

/// Steps added to the simulated pedometer per key press.
pub const STEPS_PER_PRESS: i32 = 750;

/// Outbound messages the simulated channel buffers before overflowing.
pub const OUTBOX_CAPACITY: usize = 4;

const _: () = assert!(DEFAULT_BATTERY <= 100);
const _: () = assert!(BATTERY_STEP > 0 && BATTERY_STEP <= 100);
const _: () = assert!(OUTBOX_CAPACITY > 0);

// =============================================================================
// Companion Settings Cycles
// =============================================================================

/// Background colors pushed by the `C` key, packed `0xRRGGBB`.
pub const BACKGROUND_CYCLE: [i32; 5] = [0x0000_0000, 0x0000_0055, 0x0055_5555, 0x00AA_AAAA, 0x00FF_FFFF];

/// Accent colors pushed by the `A` key, packed `0xRRGGBB`.
pub const ACCENT_CYCLE: [i32; 5] = [0x0055_FFAA, 0x00FF_AA00, 0x0055_AAFF, 0x00FF_55AA, 0x00AA_FF55];

/// Weather update intervals pushed by the `I` key, in minutes.
pub const INTERVAL_CYCLE: [i32; 4] = [15, 30, 60, 120];

/// Step goal increase per `G` key press.
pub const STEP_GOAL_INCREMENT: i32 = 1000;

/// Step goal wraps back to this value once it passes [`STEP_GOAL_MAX`].
pub const STEP_GOAL_MIN: i32 = 2000;

pub const STEP_GOAL_MAX: i32 = 20000;

const _: () = assert!(STEP_GOAL_MIN > 0 && STEP_GOAL_MIN < STEP_GOAL_MAX);
