//! Core logic for the Modulus watchface.
//!
//! This crate is platform-agnostic and shared between the desktop simulator
//! and any wearable host:
//!
//! - [`colors`]: Palette constants, packed-color decoding, legible foreground
//! - [`config`]: Defaults, capacities, gauge geometry, cadences and thresholds
//! - [`layout`]: Screen rectangles for every drawable layer
//! - [`keys`]: Message/persistence key namespace
//! - [`message`]: Inbound batches and the outbound weather request
//! - [`persist`]: Persistence trait and an in-memory store
//! - [`clock`], [`host`]: Collaborator traits for time, health, battery and outbox
//! - [`weather`]: Condition icon table and WMO code mapping
//! - [`state`]: The owned [`DisplayState`](state::DisplayState)
//! - [`reducer`]: Applies inbound batches to state and storage
//! - [`tick`]: Minute-tick cadence decisions
//! - [`dirty`]: Dirty-region set
//! - [`gauges`]: Pure gauge math and draw-command lists
//! - [`styles`], [`widgets`]: Fonts and drawing primitives
//! - [`render`]: Dirty-region compositing onto a `DrawTarget`
//! - [`app`]: Event-handler shell wiring the host collaborators together
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Tests run with `std` enabled (via
//! `cfg_attr`) so the standard harness is available on the host.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod clock;
pub mod colors;
pub mod config;
pub mod dirty;
pub mod gauges;
pub mod host;
pub mod keys;
pub mod layout;
pub mod message;
pub mod persist;
pub mod reducer;
pub mod render;
pub mod state;
pub mod styles;
pub mod text;
pub mod tick;
pub mod weather;
pub mod widgets;

// Re-export commonly used items
pub use app::{WatchEvents, Watchface};
pub use dirty::{DirtyRegions, Region};
pub use keys::MessageKey;
pub use message::{InboundBatch, OutboundMessage, Value};
pub use persist::{MemoryStore, Persistence};
pub use reducer::{Reduction, reduce};
pub use state::DisplayState;
