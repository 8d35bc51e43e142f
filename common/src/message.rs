//! Inbound batches and outbound messages.
//!
//! An inbound batch is an ordered list of `(key id, value)` tuples as
//! delivered by the host's message service. Lookups return the first tuple
//! carrying a key. Ids outside the [`MessageKey`] namespace and repeats of a
//! key already present are discarded on insertion, so every known key always
//! finds a slot.

use heapless::Vec;

use crate::config::MAX_BATCH_TUPLES;
use crate::keys::MessageKey;

const _: () = assert!(MAX_BATCH_TUPLES >= MessageKey::ALL.len(), "Batch must hold every key once");

/// A typed value carried by one tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    Int(i32),
    Str(&'a str),
}

impl<'a> Value<'a> {
    #[inline]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Str(_) => None,
        }
    }

    #[inline]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            Self::Int(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tuple<'a> {
    key: MessageKey,
    value: Value<'a>,
}

/// A whole inbound message, reduced in one pass.
#[derive(Clone, Debug, Default)]
pub struct InboundBatch<'a> {
    tuples: Vec<Tuple<'a>, MAX_BATCH_TUPLES>,
}

impl<'a> InboundBatch<'a> {
    pub const fn new() -> Self { Self { tuples: Vec::new() } }

    /// Append a tuple by raw id. Unknown ids are ignored.
    pub fn push_raw(
        &mut self,
        id: u32,
        value: Value<'a>,
    ) {
        match MessageKey::from_id(id) {
            Some(key) => self.push(key, value),
            None => log::debug!("ignoring unknown key {id}"),
        }
    }

    /// Append a tuple for a known key. Only the first value for a key is kept.
    pub fn push(
        &mut self,
        key: MessageKey,
        value: Value<'a>,
    ) {
        if self.contains(key) {
            log::debug!("ignoring repeated {}", key.name());
            return;
        }
        if self.tuples.push(Tuple { key, value }).is_err() {
            log::warn!("inbound batch full, dropping {}", key.name());
        }
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(
        mut self,
        key: MessageKey,
        value: Value<'a>,
    ) -> Self {
        self.push(key, value);
        self
    }

    /// First value carried for `key`, of any type.
    pub fn find(
        &self,
        key: MessageKey,
    ) -> Option<Value<'a>> {
        self.tuples.iter().find(|t| t.key == key).map(|t| t.value)
    }

    #[inline]
    pub fn contains(
        &self,
        key: MessageKey,
    ) -> bool {
        self.find(key).is_some()
    }

    /// Integer value for `key`. A string in its place counts as absent.
    pub fn int(
        &self,
        key: MessageKey,
    ) -> Option<i32> {
        let value = self.find(key)?;
        let int = value.as_int();
        if int.is_none() {
            log::warn!("{} expected an integer, ignoring", key.name());
        }
        int
    }

    /// String value for `key`. An integer in its place counts as absent.
    pub fn str(
        &self,
        key: MessageKey,
    ) -> Option<&'a str> {
        let value = self.find(key)?;
        let s = value.as_str();
        if s.is_none() {
            log::warn!("{} expected a string, ignoring", key.name());
        }
        s
    }

    #[inline]
    pub fn len(&self) -> usize { self.tuples.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.tuples.is_empty() }
}

/// Messages the watch sends to the companion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutboundMessage {
    /// "Please fetch weather": a single marker byte, no payload.
    RequestWeather,
}

impl OutboundMessage {
    /// Key id of the single field.
    pub const fn key(self) -> u32 {
        match self {
            Self::RequestWeather => MessageKey::RequestWeather.id(),
        }
    }

    /// Marker byte written under [`key`](Self::key).
    pub const fn marker(self) -> u8 {
        match self {
            Self::RequestWeather => 0,
        }
    }
}

/// Why the host reported a transport failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportFailure {
    /// The message did not fit the inbox/outbox buffer.
    BufferOverflow,
    /// The companion is not connected.
    NotConnected,
    /// The companion did not acknowledge in time.
    Timeout,
}
