//! Weather condition table.
//!
//! The watch only knows six icons. The companion reduces upstream weather
//! codes (WMO 4677, as served by Open-Meteo) to an index into this table and
//! the watch range-checks the index before every lookup.

/// Icon shown next to the location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Condition {
    #[default]
    Clear = 0,
    Cloud = 1,
    Fog = 2,
    Rain = 3,
    Snow = 4,
    Storm = 5,
}

impl Condition {
    /// Icon table in index order.
    pub const TABLE: [Self; 6] = [Self::Clear, Self::Cloud, Self::Fog, Self::Rain, Self::Snow, Self::Storm];

    /// Bounds-checked lookup.
    pub const fn from_index(index: i32) -> Option<Self> {
        if index >= 0 && (index as usize) < Self::TABLE.len() {
            Some(Self::TABLE[index as usize])
        } else {
            None
        }
    }

    /// Lookup falling back to [`Clear`](Self::Clear) for out-of-range indices.
    pub const fn from_index_or_default(index: i32) -> Self {
        match Self::from_index(index) {
            Some(c) => c,
            None => Self::Clear,
        }
    }

    #[inline]
    pub const fn index(self) -> i32 { self as i32 }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloud => "cloud",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
        }
    }

    /// Map a WMO weather code onto the icon table.
    ///
    /// Codes without an icon (e.g. 10 "mist") return `None`; the companion
    /// then leaves CONDITIONS out of the batch.
    pub const fn from_wmo_code(code: i32) -> Option<Self> {
        match code {
            0 | 1 => Some(Self::Clear),
            2 | 3 => Some(Self::Cloud),
            45 | 48 => Some(Self::Fog),
            51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Some(Self::Rain),
            71 | 73 | 75 | 77 | 85 | 86 => Some(Self::Snow),
            95 | 96 | 99 => Some(Self::Storm),
            _ => None,
        }
    }
}
