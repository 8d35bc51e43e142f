//! Key namespace shared by the message channel and the persistence store.
//!
//! The companion addresses fields by numeric id. The same ids key the
//! persisted snapshot, except the location: it arrives as [`Location`] and is
//! stored under [`LocationName`].
//!
//! [`Location`]: MessageKey::Location
//! [`LocationName`]: MessageKey::LocationName

/// Every key the watchface understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MessageKey {
    /// Outbound weather request marker.
    RequestWeather = 0,
    CurTemp = 1,
    LowTemp = 2,
    HighTemp = 3,
    Conditions = 4,
    /// Inbound location name.
    Location = 5,
    /// Persisted location name.
    LocationName = 6,
    UpdateInterval = 7,
    /// Presence-only: asks the watch to request weather right away.
    OwmApiKey = 8,
    BackgroundColour = 9,
    AccentColour = 10,
    StepGoal = 11,
    MoveGoal = 12,
    CalGoal = 13,
}

impl MessageKey {
    /// All keys, in id order.
    pub const ALL: [Self; 14] = [
        Self::RequestWeather,
        Self::CurTemp,
        Self::LowTemp,
        Self::HighTemp,
        Self::Conditions,
        Self::Location,
        Self::LocationName,
        Self::UpdateInterval,
        Self::OwmApiKey,
        Self::BackgroundColour,
        Self::AccentColour,
        Self::StepGoal,
        Self::MoveGoal,
        Self::CalGoal,
    ];

    /// Keys written to the persistence store.
    pub const PERSISTED: [Self; 11] = [
        Self::CurTemp,
        Self::LowTemp,
        Self::HighTemp,
        Self::Conditions,
        Self::LocationName,
        Self::UpdateInterval,
        Self::BackgroundColour,
        Self::AccentColour,
        Self::StepGoal,
        Self::MoveGoal,
        Self::CalGoal,
    ];

    /// Numeric id on the wire and in storage.
    #[inline]
    pub const fn id(self) -> u32 { self as u32 }

    /// Look up a key by id. Unknown ids yield `None`.
    pub const fn from_id(id: u32) -> Option<Self> {
        if (id as usize) < Self::ALL.len() {
            Some(Self::ALL[id as usize])
        } else {
            None
        }
    }

    /// Stable name, used by text-based stores.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RequestWeather => "REQUEST_WEATHER",
            Self::CurTemp => "CUR_TEMP",
            Self::LowTemp => "LOW_TEMP",
            Self::HighTemp => "HIGH_TEMP",
            Self::Conditions => "CONDITIONS",
            Self::Location => "LOCATION",
            Self::LocationName => "LOCATION_NAME",
            Self::UpdateInterval => "UPDATE_INTERVAL",
            Self::OwmApiKey => "OWM_API_KEY",
            Self::BackgroundColour => "BACKGROUND_COLOUR",
            Self::AccentColour => "ACCENT_COLOUR",
            Self::StepGoal => "STEP_GOAL",
            Self::MoveGoal => "MOVE_GOAL",
            Self::CalGoal => "CAL_GOAL",
        }
    }

    /// Reverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|key| key.name() == name) }
}
