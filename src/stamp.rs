// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Structured body-relative timestamps.
//!
//! A [`Stamp`] is the value produced by [`DayClock::at`](crate::DayClock::at)
//! and consumed by [`DayClock::format`](crate::DayClock::format). It carries
//! the absolute instant together with its decomposition into body days,
//! ticks (thousandths of a day) and subticks (thousandths of a tick).
//!
//! The year/day-of-year pair only exists for bodies with at least two days per
//! orbit; it is modelled as a single `Option<YearDay>` so the pair is either
//! fully present or fully absent.

use qtty::Seconds;

/// Year and day-of-year of a [`Stamp`], both counted from the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearDay {
    pub year: i64,
    pub day: i64,
}

/// An instant decomposed against one body's day and year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    pub(crate) epoch: Seconds,
    pub(crate) day_fractional: f64,
    pub(crate) day_index: i64,
    pub(crate) tick: u16,
    pub(crate) subtick: u16,
    pub(crate) calendar: Option<YearDay>,
    pub(crate) days_per_year: f64,
}

impl Stamp {
    /// SI seconds since the Unix epoch.
    #[inline]
    pub const fn epoch(&self) -> Seconds {
        self.epoch
    }

    /// Continuous count of body days since the epoch.
    #[inline]
    pub const fn day_fractional(&self) -> f64 {
        self.day_fractional
    }

    /// Whole body days since the epoch; negative before it.
    #[inline]
    pub const fn day_index(&self) -> i64 {
        self.day_index
    }

    /// Thousandths of a day, `0..=999`.
    #[inline]
    pub const fn tick(&self) -> u16 {
        self.tick
    }

    /// Thousandths of a tick, `0..=999`.
    #[inline]
    pub const fn subtick(&self) -> u16 {
        self.subtick
    }

    /// Year and day-of-year, when the body has at least two days per year.
    #[inline]
    pub const fn calendar(&self) -> Option<YearDay> {
        self.calendar
    }

    #[inline]
    pub fn year(&self) -> Option<i64> {
        self.calendar.map(|c| c.year)
    }

    #[inline]
    pub fn day_of_year(&self) -> Option<i64> {
        self.calendar.map(|c| c.day)
    }

    /// Days per year of the clock that produced this stamp.
    #[inline]
    pub const fn days_per_year(&self) -> f64 {
        self.days_per_year
    }
}
