//! Keyboard bindings.
//!
//! | Key | Action |
//! |-----|--------|
//! | `W` | Companion pushes weather unprompted |
//! | `C` | Cycle background color |
//! | `A` | Cycle accent color |
//! | `G` | Raise step goal |
//! | `I` | Cycle weather update interval |
//! | `K` | Send the API-key marker (triggers a weather request) |
//! | `L` | Toggle the phone link |
//! | `-` / `=` | Battery down / up |
//! | `T` | Force a minute tick |
//! | `S` | Add steps to the pedometer |
//!
//! Keys are matched by their SDL names so the table does not depend on the
//! keycode representation.

/// What a key press asks the simulator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PushWeather,
    CycleBackground,
    CycleAccent,
    RaiseStepGoal,
    CycleInterval,
    SendApiKey,
    ToggleLink,
    BatteryDown,
    BatteryUp,
    ForceTick,
    AddSteps,
}

impl Action {
    /// Look up the binding for an SDL key name.
    pub fn from_key_name(name: &str) -> Option<Self> {
        Some(match name {
            "W" => Self::PushWeather,
            "C" => Self::CycleBackground,
            "A" => Self::CycleAccent,
            "G" => Self::RaiseStepGoal,
            "I" => Self::CycleInterval,
            "K" => Self::SendApiKey,
            "L" => Self::ToggleLink,
            "-" | "Keypad -" => Self::BatteryDown,
            "=" | "Keypad +" => Self::BatteryUp,
            "T" => Self::ForceTick,
            "S" => Self::AddSteps,
            _ => return None,
        })
    }
}
