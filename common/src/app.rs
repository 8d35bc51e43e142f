//! Application shell.
//!
//! [`Watchface`] owns the display state and the host collaborators and
//! turns host events into state mutations and dirty marks. The host drives
//! it through [`WatchEvents`] and, once per loop iteration, takes the dirty
//! set and hands it to [`render::draw_dirty`](crate::render::draw_dirty).
//!
//! # Startup Order
//!
//! 1. Restore the persisted snapshot over the defaults
//! 2. Format the time from the clock
//! 3. Peek the battery
//! 4. Poll health metrics
//!
//! Everything starts dirty so the first frame paints the whole screen.

use crate::clock::{Clock, WallTime};
use crate::dirty::{DirtyRegions, Region};
use crate::host::{BatteryProvider, HealthProvider, HealthSample, Outbox};
use crate::message::{InboundBatch, OutboundMessage, TransportFailure};
use crate::persist::Persistence;
use crate::reducer::reduce;
use crate::state::DisplayState;
use crate::tick::{tick_actions, tick_dirty};

/// Host event callbacks. Never re-entered.
pub trait WatchEvents {
    /// Wall-clock minute changed.
    fn on_tick(&mut self);

    /// A batch arrived from the companion.
    fn on_inbox_received(
        &mut self,
        batch: &InboundBatch<'_>,
    );

    /// A batch was dropped before it could be delivered.
    fn on_inbox_dropped(
        &mut self,
        reason: TransportFailure,
    );

    /// The last outbound message was acknowledged.
    fn on_outbox_sent(&mut self);

    /// The last outbound message was not delivered.
    fn on_outbox_failed(
        &mut self,
        reason: TransportFailure,
    );

    /// Battery charge changed.
    fn on_battery(
        &mut self,
        percent: u8,
    );
}

/// The watchface with its collaborators.
pub struct Watchface<S, H, O, C> {
    state: DisplayState,
    store: S,
    health: H,
    outbox: O,
    clock: C,
    dirty: DirtyRegions,
}

impl<S, H, O, C> Watchface<S, H, O, C>
where
    S: Persistence,
    H: HealthProvider,
    O: Outbox,
    C: Clock,
{
    pub fn start<B: BatteryProvider>(
        store: S,
        health: H,
        outbox: O,
        clock: C,
        battery: &B,
    ) -> Self {
        let mut face = Self {
            state: DisplayState::restored(&store),
            store,
            health,
            outbox,
            clock,
            dirty: DirtyRegions::all(),
        };
        let now = face.refresh_time();
        face.state.set_battery_percent(battery.peek());
        face.refresh_health();

        log::info!(
            "watchface started at {:02}:{:02}, battery {}%",
            now.hour,
            now.minute,
            face.state.battery_percent()
        );
        face
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn state(&self) -> &DisplayState { &self.state }

    #[inline]
    pub const fn store(&self) -> &S { &self.store }

    #[inline]
    pub const fn health_mut(&mut self) -> &mut H { &mut self.health }

    #[inline]
    pub const fn outbox(&self) -> &O { &self.outbox }

    #[inline]
    pub const fn outbox_mut(&mut self) -> &mut O { &mut self.outbox }

    /// Regions awaiting a redraw; clears the pending set.
    #[inline]
    pub const fn take_dirty(&mut self) -> DirtyRegions { self.dirty.take() }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Ask the companion for fresh weather. Failures are logged, not retried.
    pub fn request_weather(&mut self) { self.send(OutboundMessage::RequestWeather); }

    /// Poll the health provider now.
    pub fn refresh_health(&mut self) {
        let sample = HealthSample::poll(&self.health);
        self.state.set_health(sample);
        self.dirty.mark(Region::Activity);
        log::debug!(
            "health: {} steps, {} min, {} kcal",
            sample.steps,
            sample.move_minutes,
            sample.active_calories
        );
    }

    fn refresh_time(&mut self) -> WallTime {
        let now = self.clock.now();
        self.state.set_time(&now, self.clock.is_24h_style());
        self.dirty |= tick_dirty();
        now
    }

    fn send(
        &mut self,
        message: OutboundMessage,
    ) {
        match self.outbox.send(message) {
            Ok(()) => log::info!("sent {message:?}"),
            Err(e) => log::error!("sending {message:?} failed: {e:?}"),
        }
    }
}

impl<S, H, O, C> WatchEvents for Watchface<S, H, O, C>
where
    S: Persistence,
    H: HealthProvider,
    O: Outbox,
    C: Clock,
{
    fn on_tick(&mut self) {
        let now = self.refresh_time();
        let actions = tick_actions(now.minute, self.state.weather_update_interval);
        if actions.refresh_health {
            self.refresh_health();
        }
        if actions.request_weather {
            self.request_weather();
        }
    }

    fn on_inbox_received(
        &mut self,
        batch: &InboundBatch<'_>,
    ) {
        let reduction = reduce(&mut self.state, batch, &mut self.store);
        self.dirty |= reduction.dirty;
        if let Some(message) = reduction.outbound {
            self.send(message);
        }
    }

    fn on_inbox_dropped(
        &mut self,
        reason: TransportFailure,
    ) {
        log::error!("inbox dropped: {reason:?}");
    }

    fn on_outbox_sent(&mut self) { log::debug!("outbox sent"); }

    fn on_outbox_failed(
        &mut self,
        reason: TransportFailure,
    ) {
        log::error!("outbox failed: {reason:?}");
    }

    fn on_battery(
        &mut self,
        percent: u8,
    ) {
        self.state.set_battery_percent(percent);
        self.dirty.mark(Region::Battery);
    }
}

// =============================================================================
// Tests
// =============================================================================
