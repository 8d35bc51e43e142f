//! Dirty-region tracking.
//!
//! Mutations never draw. They mark the regions whose pixels depend on the
//! changed fields and the host composes one redraw per loop iteration. Every
//! region is a pure function of [`DisplayState`](crate::state::DisplayState),
//! so marking too much is only slower, never wrong.

use core::ops::{BitOr, BitOrAssign};

/// A drawable layer of the watchface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Region {
    /// Whole-window background. Implies every other region.
    Window = 0,
    Time = 1,
    Day = 2,
    Date = 3,
    Location = 4,
    Temperature = 5,
    Low = 6,
    High = 7,
    ConditionIcon = 8,
    TemperatureDial = 9,
    Activity = 10,
    Battery = 11,
}

impl Region {
    /// Every region, in draw order (background first, gauges before labels
    /// that sit on top of them).
    pub const ALL: [Self; 12] = [
        Self::Window,
        Self::Time,
        Self::Day,
        Self::Date,
        Self::ConditionIcon,
        Self::Location,
        Self::TemperatureDial,
        Self::Temperature,
        Self::Low,
        Self::High,
        Self::Activity,
        Self::Battery,
    ];

    /// Regions that share pixels with the temperature dial.
    pub const DIAL_GROUP: [Self; 4] = [Self::TemperatureDial, Self::Temperature, Self::Low, Self::High];

    #[inline]
    const fn bit(self) -> u16 { 1 << self as u16 }
}

/// Set of regions awaiting a redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyRegions(u16);

impl DirtyRegions {
    pub const fn new() -> Self { Self(0) }

    /// Every region, as after startup or a background change.
    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < Region::ALL.len() {
            bits |= Region::ALL[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn of(region: Region) -> Self { Self(region.bit()) }

    pub const fn mark(
        &mut self,
        region: Region,
    ) {
        self.0 |= region.bit();
    }

    #[inline]
    pub const fn contains(
        &self,
        region: Region,
    ) -> bool {
        self.0 & region.bit() != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.0 == 0 }

    #[must_use]
    pub const fn union(
        self,
        other: Self,
    ) -> Self {
        Self(self.0 | other.0)
    }

    /// Return the pending set and clear it.
    pub const fn take(&mut self) -> Self {
        let taken = *self;
        self.0 = 0;
        taken
    }

    /// Add regions that overlap a marked one.
    ///
    /// The dial, the temperature label and the low/high labels share a
    /// bounding box, so clearing one wipes the others.
    #[must_use]
    pub fn expanded(self) -> Self {
        let mut out = self;
        if Region::DIAL_GROUP.iter().any(|r| self.contains(*r)) {
            for r in Region::DIAL_GROUP {
                out.mark(r);
            }
        }
        out
    }

    /// Marked regions in draw order.
    pub fn iter(self) -> impl Iterator<Item = Region> { Region::ALL.into_iter().filter(move |r| self.contains(*r)) }
}

impl From<Region> for DirtyRegions {
    fn from(region: Region) -> Self { Self::of(region) }
}

impl BitOr for DirtyRegions {
    type Output = Self;

    fn bitor(
        self,
        rhs: Self,
    ) -> Self {
        self.union(rhs)
    }
}

impl BitOr<Region> for DirtyRegions {
    type Output = Self;

    fn bitor(
        mut self,
        rhs: Region,
    ) -> Self {
        self.mark(rhs);
        self
    }
}

impl BitOrAssign for DirtyRegions {
    fn bitor_assign(
        &mut self,
        rhs: Self,
    ) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Region> for DirtyRegions {
    fn bitor_assign(
        &mut self,
        rhs: Region,
    ) {
        self.mark(rhs);
    }
}
