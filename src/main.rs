//! Modulus watchface simulator for desktop.
//!
//! Runs the shared watchface core in an SDL window through the
//! embedded-graphics-simulator crate, with desktop stand-ins for the clock,
//! pedometer, battery, persistent storage and the phone companion.
//!
//! # Frame Loop
//!
//! 1. Paint whatever the watchface marked dirty and present the frame
//! 2. Handle keyboard input (see [`controls`])
//! 3. Deliver queued outbound messages to the companion and feed its replies back
//! 4. Fire a tick when the wall-clock minute changes
//! 5. Sleep out the rest of the frame

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod cli;
mod companion;
mod config;
mod controls;
mod host;
mod store;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use modulus_common::clock::Clock;
use modulus_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use modulus_common::message::{OutboundMessage, TransportFailure};
use modulus_common::render::draw_dirty;
use modulus_common::{DirtyRegions, InboundBatch, WatchEvents, Watchface};

use crate::cli::Cli;
use crate::companion::{SimCompanion, Units};
use crate::config::{BATTERY_STEP, FRAME_TIME, STEPS_PER_PRESS, WINDOW_TITLE};
use crate::controls::Action;
use crate::host::{SimBattery, SimHealth, SimOutbox, SystemClock};
use crate::store::{FileStore, StoreError};

type SimFace = Watchface<FileStore, SimHealth, SimOutbox, SystemClock>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if cli.debug { "debug" } else { "info" }))
        .format_timestamp_secs()
        .init();

    log::info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<(), StoreError> {
    let store = if cli.ephemeral {
        FileStore::in_memory()
    } else {
        FileStore::open(&cli.store)?
    };
    if store.path().is_none() {
        log::info!("ephemeral store, settings are not saved");
    }

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let clock = SystemClock::new(cli.twenty_four_hour);
    let mut battery = SimBattery::new(cli.battery);
    let units = if cli.fahrenheit { Units::Fahrenheit } else { Units::Celsius };
    let mut companion = SimCompanion::new(units, &cli.location);

    let mut face = Watchface::start(store, SimHealth::default(), SimOutbox::new(), clock, &battery);

    // The phone app fetches weather as soon as it comes up
    let report = companion.weather();
    push(&mut face, &companion, &report.batch());

    let mut last_minute = clock.now();

    loop {
        let frame_start = Instant::now();

        paint_frame(&mut display, &mut face);
        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(action) = Action::from_key_name(&keycode.name()) {
                        apply(action, &mut face, &mut companion, &mut battery);
                    }
                },
                _ => {},
            }
        }

        deliver_outbox(&mut face, &mut companion);

        let now = clock.now();
        if now != last_minute {
            last_minute = now;
            face.on_tick();
        }

        let elapsed = frame_start.elapsed();
        if let Some(rest) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(rest);
        }
    }
}

/// Paint every pending region and return what was painted.
fn paint_frame(
    display: &mut SimulatorDisplay<Rgb565>,
    face: &mut SimFace,
) -> DirtyRegions {
    let dirty = face.take_dirty();
    draw_dirty(display, face.state(), dirty);
    dirty
}

fn apply(
    action: Action,
    face: &mut SimFace,
    companion: &mut SimCompanion,
    battery: &mut SimBattery,
) {
    log::debug!("key: {action:?}");
    match action {
        Action::PushWeather => {
            let report = companion.weather();
            push(face, companion, &report.batch());
        },
        Action::CycleBackground
        | Action::CycleAccent
        | Action::RaiseStepGoal
        | Action::CycleInterval
        | Action::SendApiKey => {
            let batch = match action {
                Action::CycleBackground => companion.next_background(),
                Action::CycleAccent => companion.next_accent(),
                Action::RaiseStepGoal => companion.raise_step_goal(),
                Action::CycleInterval => companion.next_interval(),
                _ => companion.api_key(),
            };
            push(face, companion, &batch);
        },
        Action::ToggleLink => {
            let connected = companion.toggle_connection();
            log::info!("phone link {}", if connected { "up" } else { "down" });
        },
        Action::BatteryDown => face.on_battery(battery.adjust(-i16::from(BATTERY_STEP))),
        Action::BatteryUp => face.on_battery(battery.adjust(i16::from(BATTERY_STEP))),
        Action::ForceTick => face.on_tick(),
        Action::AddSteps => {
            face.health_mut().add_steps(STEPS_PER_PRESS);
            face.refresh_health();
        },
    }
}

/// Hand a companion batch to the watch, or drop it if the link is down.
fn push(
    face: &mut SimFace,
    companion: &SimCompanion,
    batch: &InboundBatch<'_>,
) {
    if companion.is_connected() {
        face.on_inbox_received(batch);
    } else {
        face.on_inbox_dropped(TransportFailure::NotConnected);
    }
}

/// Deliver every queued outbound message and report each outcome.
fn deliver_outbox(
    face: &mut SimFace,
    companion: &mut SimCompanion,
) {
    let pending: Vec<OutboundMessage> = face.outbox_mut().drain().collect();
    for message in pending {
        if !companion.is_connected() {
            face.on_outbox_failed(TransportFailure::NotConnected);
            continue;
        }
        face.on_outbox_sent();
        match message {
            OutboundMessage::RequestWeather => {
                let report = companion.weather();
                face.on_inbox_received(&report.batch());
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use modulus_common::Region;

    fn headless_face() -> SimFace {
        Watchface::start(
            FileStore::in_memory(),
            SimHealth::default(),
            SimOutbox::new(),
            SystemClock::new(None),
            &SimBattery::new(80),
        )
    }

    #[test]
    fn test_paint_frame_consumes_dirty_set() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut face = headless_face();

        assert_eq!(paint_frame(&mut display, &mut face), DirtyRegions::all(), "First frame paints everything");
        assert!(paint_frame(&mut display, &mut face).is_empty(), "Nothing left to paint");

        face.on_battery(40);
        assert_eq!(paint_frame(&mut display, &mut face), DirtyRegions::of(Region::Battery));
    }

    #[test]
    fn test_disconnected_link_fails_queued_requests() {
        let mut face = headless_face();
        let mut companion = SimCompanion::new(Units::Celsius, "Oslo");
        face.request_weather();
        companion.toggle_connection();

        deliver_outbox(&mut face, &mut companion);

        assert_eq!(face.outbox_mut().drain().count(), 0, "Failed sends are not retried");
        assert_ne!(face.state().location(), "Oslo", "No reply without a link");
    }

    #[test]
    fn test_delivered_request_is_answered_with_weather() {
        let mut face = headless_face();
        let mut companion = SimCompanion::new(Units::Celsius, "Oslo");
        face.request_weather();

        deliver_outbox(&mut face, &mut companion);

        assert_eq!(face.state().location(), "Oslo");
    }
}
