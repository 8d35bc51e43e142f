//! Inbound message reducer.
//!
//! [`reduce`] applies every recognized field of a batch to the display state,
//! writes each changed field through to the store, and reports what needs
//! redrawing plus any message to send back. It is total: absent, unknown and
//! wrong-typed fields are skipped one at a time and nothing ever fails the
//! batch.

use crate::colors::from_hex;
use crate::dirty::{DirtyRegions, Region};
use crate::keys::MessageKey;
use crate::message::{InboundBatch, OutboundMessage};
use crate::persist::{Persistence, persist_int, persist_str};
use crate::state::{DisplayState, Temperature};
use crate::weather::Condition;

/// Outcome of reducing one batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Reduction {
    pub dirty: DirtyRegions,
    pub outbound: Option<OutboundMessage>,
}

/// Apply `batch` to `state`, persisting write-through into `store`.
pub fn reduce<P: Persistence>(
    state: &mut DisplayState,
    batch: &InboundBatch<'_>,
    store: &mut P,
) -> Reduction {
    let mut out = Reduction::default();

    apply_temperature(state, batch, store, &mut out.dirty);

    if let Some(index) = batch.int(MessageKey::Conditions) {
        if Condition::from_index(index).is_none() {
            log::warn!("condition index {index} out of range, drawing clear");
        }
        state.condition_index = index;
        persist_int(store, MessageKey::Conditions, index);
        out.dirty.mark(Region::ConditionIcon);
        log::debug!("conditions -> {index} ({})", Condition::from_index_or_default(index).name());
    }

    if let Some(name) = batch.str(MessageKey::Location) {
        state.set_location(name);
        persist_str(store, MessageKey::LocationName, state.location());
        out.dirty.mark(Region::Location);
        log::debug!("location -> {}", state.location());
    }

    if let Some(minutes) = batch.int(MessageKey::UpdateInterval) {
        state.weather_update_interval = minutes;
        persist_int(store, MessageKey::UpdateInterval, minutes);
        log::debug!("update interval -> {minutes} min");
    }

    if batch.contains(MessageKey::OwmApiKey) {
        log::info!("API key received, requesting weather");
        out.outbound = Some(OutboundMessage::RequestWeather);
    }

    if let Some(packed) = batch.int(MessageKey::BackgroundColour) {
        state.palette.set_background(from_hex(packed));
        persist_int(store, MessageKey::BackgroundColour, packed);
        out.dirty |= DirtyRegions::of(Region::Window)
            | Region::Time
            | Region::Date
            | Region::Location
            | Region::Temperature;
        log::debug!("background -> {packed:#08x}");
    }

    if let Some(packed) = batch.int(MessageKey::AccentColour) {
        state.palette.set_accent(from_hex(packed));
        persist_int(store, MessageKey::AccentColour, packed);
        out.dirty |= DirtyRegions::of(Region::Low)
            | Region::High
            | Region::Day
            | Region::TemperatureDial
            | Region::Activity
            | Region::Battery;
        log::debug!("accent -> {packed:#08x}");
    }

    apply_goals(state, batch, store, &mut out.dirty);

    out
}

/// The three temperature fields only make sense together; a partial group is
/// skipped whole.
fn apply_temperature<P: Persistence>(
    state: &mut DisplayState,
    batch: &InboundBatch<'_>,
    store: &mut P,
    dirty: &mut DirtyRegions,
) {
    let current = batch.int(MessageKey::CurTemp);
    let low = batch.int(MessageKey::LowTemp);
    let high = batch.int(MessageKey::HighTemp);

    let (Some(current), Some(low), Some(high)) = (current, low, high) else {
        if current.is_some() || low.is_some() || high.is_some() {
            log::warn!("partial temperature group, skipping");
        }
        return;
    };

    state.set_temperature(Temperature { current, low, high });
    persist_int(store, MessageKey::CurTemp, current);
    persist_int(store, MessageKey::LowTemp, low);
    persist_int(store, MessageKey::HighTemp, high);
    *dirty |= DirtyRegions::of(Region::Temperature) | Region::Low | Region::High | Region::TemperatureDial;
    log::debug!("temperature -> {current} [{low}..{high}]");
}

fn apply_goals<P: Persistence>(
    state: &mut DisplayState,
    batch: &InboundBatch<'_>,
    store: &mut P,
    dirty: &mut DirtyRegions,
) {
    let goals = [
        (MessageKey::StepGoal, &mut state.activity.step_goal),
        (MessageKey::MoveGoal, &mut state.activity.move_goal),
        (MessageKey::CalGoal, &mut state.activity.active_goal),
    ];

    for (key, slot) in goals {
        if let Some(goal) = batch.int(key) {
            *slot = goal;
            persist_int(store, key, goal);
            dirty.mark(Region::Activity);
            log::debug!("{} -> {goal}", key.name());
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
